//! SVG rendering through the plotters SVG backend

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Circle, DrawingArea, IntoDrawingArea, IntoFont, LineSeries, Polygon,
    SVGBackend, ShapeStyle, WHITE,
};
use plotters::series::DashedLineSeries;
use plotters::style::RGBAColor;

use crate::color::Color;
use crate::figure::{Figure, Layer, Panel};
use crate::params::PlotParams;
use crate::surface::Surface;
use crate::{Result, VizError};

/// Renders figures to an SVG document held in memory
#[derive(Debug, Default)]
pub struct SvgSurface {
    svg: Option<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG text of the last rendered figure
    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    /// Write the last rendered figure to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let svg = self.svg.as_deref().ok_or(VizError::Empty)?;
        std::fs::write(path, svg)?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        self.svg = Some(render_svg(figure)?);
        Ok(())
    }
}

fn backend<E: std::fmt::Display>(e: E) -> VizError {
    VizError::Backend(e.to_string())
}

fn rgba(color: &Color) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

fn style(color: &Color, filled: bool) -> ShapeStyle {
    ShapeStyle {
        color: rgba(color),
        filled,
        stroke_width: 1,
    }
}

/// Widen degenerate or inverted ranges so the axes can be built
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) {
        return (-1.0, 1.0);
    }
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// Render a figure to an SVG string
pub fn render_svg(figure: &Figure) -> Result<String> {
    let params = &figure.params;
    let grid = params.grid_for(figure.panels.len());
    log::debug!(
        "rendering {} panels on a {}x{} grid",
        figure.panels.len(),
        grid.0,
        grid.1
    );

    let mut buf = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buf, (params.width, params.height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;

        let areas = root.split_evenly(grid);
        for (panel, area) in figure.panels.iter().zip(areas.iter()) {
            draw_panel(area, panel, params)?;
        }
        root.present().map_err(backend)?;
    }
    Ok(buf)
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: &Panel,
    params: &PlotParams,
) -> Result<()> {
    let (x0, x1) = padded(panel.x_range);
    let (y0, y1) = padded(panel.y_range);
    let in_range = |x: f64, y: f64| x >= x0 && x <= x1 && y >= y0 && y <= y1;

    let mut chart = ChartBuilder::on(area)
        .caption(
            panel.caption.as_str(),
            ("sans-serif", params.caption_size).into_font(),
        )
        .margin(params.margin)
        .x_label_area_size(params.label_area)
        .y_label_area_size(params.label_area)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()
        .map_err(backend)?;

    for layer in &panel.layers {
        match layer {
            Layer::Points { points, colors } => {
                let size = params.point_size;
                chart
                    .draw_series(
                        points
                            .iter()
                            .zip(colors.iter())
                            .filter(|((x, y), _)| in_range(*x, *y))
                            .map(|(&(x, y), c)| Circle::new((x, y), size, style(c, true))),
                    )
                    .map_err(backend)?;
            }
            Layer::HLine { y, color, dashed } => {
                let ends = [(x0, *y), (x1, *y)];
                if *dashed {
                    chart
                        .draw_series(DashedLineSeries::new(ends, 4, 3, style(color, false)))
                        .map_err(backend)?;
                } else {
                    chart
                        .draw_series(LineSeries::new(ends, style(color, false)))
                        .map_err(backend)?;
                }
            }
            Layer::AbLine {
                intercept,
                slope,
                color,
            } => {
                let ends = [(x0, intercept + slope * x0), (x1, intercept + slope * x1)];
                chart
                    .draw_series(LineSeries::new(ends, style(color, false)))
                    .map_err(backend)?;
            }
            Layer::Line { points, color } => {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), style(color, false)))
                    .map_err(backend)?;
            }
            Layer::Polygon { points, fill } => {
                chart
                    .draw_series(std::iter::once(Polygon::new(
                        points.clone(),
                        style(fill, true),
                    )))
                    .map_err(backend)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
