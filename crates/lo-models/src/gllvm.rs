//! Presentation of fitted generalized linear latent variable models
//!
//! This module provides:
//! - Residual diagnostic plots (residuals vs linear predictors, normal
//!   Q-Q, residuals vs row and column index, scale-location)
//! - Information criteria for a fitted model
//! - A structured model summary
//!
//! Models are fitted elsewhere; everything here reads a [`FittedModel`].

pub mod colors;
pub mod criteria;
pub mod diagnostics;
pub mod envelope;
pub mod smooth;
pub mod summary;


pub use colors::response_colors;
pub use criteria::{StandardCriteria, parameter_count};
pub use diagnostics::Diagnostics;
pub use envelope::{QqEnvelope, qq_line};
pub use smooth::{LinearSmoother, Lowess, SmoothCurve, Smoother};
pub use summary::GllvmSummary;

use serde::{Deserialize, Serialize};

use lo_core::{FittedModel, ModelError, ResidualSource};
use lo_viz::{Color, Figure, PlotParams, Surface};

use crate::base::Result;
use crate::error::DiagnosticsError;

/// The five residual diagnostic plots, numbered 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticPlot {
    ResidualsVsLinearPredictors,
    NormalQq,
    ResidualsVsRow,
    ResidualsVsColumn,
    ScaleLocation,
}

impl DiagnosticPlot {
    pub const ALL: [DiagnosticPlot; 5] = [
        DiagnosticPlot::ResidualsVsLinearPredictors,
        DiagnosticPlot::NormalQq,
        DiagnosticPlot::ResidualsVsRow,
        DiagnosticPlot::ResidualsVsColumn,
        DiagnosticPlot::ScaleLocation,
    ];

    /// Plot with 1-based number `index`
    pub fn from_index(index: usize) -> Result<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DiagnosticsError::InvalidSelection(index))
    }

    /// 1-based plot number
    pub fn index(self) -> usize {
        self as usize + 1
    }

    pub fn default_caption(self) -> &'static str {
        match self {
            DiagnosticPlot::ResidualsVsLinearPredictors => "Residuals vs linear predictors",
            DiagnosticPlot::NormalQq => "Normal Q-Q",
            DiagnosticPlot::ResidualsVsRow => "Residuals vs row",
            DiagnosticPlot::ResidualsVsColumn => "Residuals vs column",
            DiagnosticPlot::ScaleLocation => "Scale-Location",
        }
    }
}

/// Options of the diagnostics plotter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticOptions {
    /// Plots to draw, in order
    pub which: Vec<DiagnosticPlot>,
    /// Caption of each plot, indexed by plot number - 1
    pub captions: [String; 5],
    /// One color per response; palette colors when absent
    pub var_colors: Option<Vec<Color>>,
    /// Overlay a smoother on the scatter plots
    pub add_smooth: bool,
    /// Draw simulated envelopes
    pub envelopes: bool,
    /// Replications of the Q-Q envelope simulation
    pub reps: usize,
    /// Fit line and band colors of the envelopes
    pub envelope_colors: [Color; 2],
    /// Plot only this many randomly chosen responses
    pub n_plot: Option<usize>,
    /// Seed for the envelope simulation and response subsampling
    pub seed: Option<u64>,
    /// Graphics parameters for this call
    pub params: PlotParams,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            which: DiagnosticPlot::ALL.to_vec(),
            captions: DiagnosticPlot::ALL.map(|p| p.default_caption().to_string()),
            var_colors: None,
            add_smooth: true,
            envelopes: true,
            reps: 150,
            envelope_colors: [Color::BLUE, Color::LIGHT_BLUE],
            n_plot: None,
            seed: None,
            params: PlotParams::default(),
        }
    }
}

impl DiagnosticOptions {
    /// Parse options from a YAML document; missing fields take defaults
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml_ng::from_str(text).map_err(|e| DiagnosticsError::Config(e.to_string()))
    }

    /// Select plots by their 1-based numbers; repeats and order are ignored
    pub fn with_which(mut self, indices: &[usize]) -> Result<Self> {
        let picked = indices
            .iter()
            .map(|&i| DiagnosticPlot::from_index(i))
            .collect::<Result<Vec<_>>>()?;
        self.which = DiagnosticPlot::ALL
            .into_iter()
            .filter(|plot| picked.contains(plot))
            .collect();
        Ok(self)
    }

    /// Selected plots in plot-number order, each once
    pub fn selected(&self) -> impl Iterator<Item = DiagnosticPlot> + '_ {
        DiagnosticPlot::ALL
            .into_iter()
            .filter(|plot| self.which.contains(plot))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn caption(&self, plot: DiagnosticPlot) -> &str {
        &self.captions[plot.index() - 1]
    }

    /// Check the options against a model with `p` responses
    pub fn validate(&self, p: usize) -> Result<()> {
        if self.which.is_empty() {
            return Err(invalid("which", "no plots selected"));
        }
        if self.reps == 0 {
            return Err(invalid("reps", "need at least one replication"));
        }
        if let Some(colors) = &self.var_colors {
            if colors.len() != p {
                return Err(invalid(
                    "var_colors",
                    format!("expected {} colors, got {}", p, colors.len()),
                ));
            }
        }
        if self.n_plot == Some(0) {
            return Err(invalid("n_plot", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(option: &'static str, message: impl Into<String>) -> DiagnosticsError {
    DiagnosticsError::InvalidOption {
        option,
        message: message.into(),
    }
}

/// Draw the selected diagnostic plots of `model` on `surface`
pub fn plot_diagnostics<R: ResidualSource + ?Sized>(
    model: &FittedModel,
    source: &R,
    options: &DiagnosticOptions,
    surface: &mut dyn Surface,
) -> Result<()> {
    Diagnostics::plot(model, source, options, surface)
}

/// Build the diagnostic figure of `model` without drawing it
pub fn diagnostic_figure<R: ResidualSource + ?Sized>(
    model: &FittedModel,
    source: &R,
    options: &DiagnosticOptions,
) -> Result<Figure> {
    Diagnostics::figure(model, source, options)
}

/// Summarize `model` with the standard information criteria
pub fn summary(model: &FittedModel) -> std::result::Result<GllvmSummary, ModelError> {
    GllvmSummary::new(model, &StandardCriteria)
}
