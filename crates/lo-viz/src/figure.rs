//! Plot description independent of any drawing backend

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::params::PlotParams;

/// A grid of panels plus the parameters to draw them with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub params: PlotParams,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(params: PlotParams) -> Self {
        Self {
            params,
            panels: Vec::new(),
        }
    }

    pub fn push(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    /// First panel with the given caption
    pub fn panel(&self, caption: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.caption == caption)
    }
}

/// One set of axes with its layers, drawn back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub caption: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub layers: Vec<Layer>,
}

impl Panel {
    pub fn new(
        caption: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            caption: caption.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            layers: Vec::new(),
        }
    }

    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = (lo, hi);
        self
    }

    pub fn y_range(mut self, lo: f64, hi: f64) -> Self {
        self.y_range = (lo, hi);
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// All point layers of the panel
    pub fn points(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .filter(|l| matches!(l, Layer::Points { .. }))
    }
}

/// Drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    /// Scatter markers, one color per point
    Points {
        points: Vec<(f64, f64)>,
        colors: Vec<Color>,
    },
    /// Horizontal reference line across the panel
    HLine { y: f64, color: Color, dashed: bool },
    /// Straight line `y = intercept + slope * x` across the panel
    AbLine {
        intercept: f64,
        slope: f64,
        color: Color,
    },
    /// Connected line through the points in order
    Line { points: Vec<(f64, f64)>, color: Color },
    /// Filled polygon without border
    Polygon { points: Vec<(f64, f64)>, fill: Color },
}
