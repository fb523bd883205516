//! Residual diagnostic plots
//!
//! Builds a [`Figure`] from the Dunn-Smyth residuals of a fitted model and
//! hands it to a [`Surface`]. Residuals and linear predictors are
//! flattened column by column, so point `j * n + i` is observation `i` of
//! response `j`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;

use lo_core::data::{
    Shape, finite_range, flatten_columns, order_ascending, repeat_each, tile_indices,
    whisker_range,
};
use lo_core::{FittedModel, ResidualSet, ResidualSource};
use lo_viz::{Color, Figure, Layer, Panel, Surface};

use super::colors::response_colors;
use super::envelope::{QqEnvelope, qq_line, theoretical_quantiles};
use super::smooth::{LinearSmoother, Lowess, Smoother};
use super::{DiagnosticOptions, DiagnosticPlot};
use crate::base::Result;

const RESIDUAL_LABEL: &str = "Dunn-Smyth residuals";
const PREDICTOR_LABEL: &str = "linear predictors";

/// Diagnostics plotter
pub struct Diagnostics;

impl Diagnostics {
    /// Draw the selected plots of `model` on `surface`
    pub fn plot<R: ResidualSource + ?Sized>(
        model: &FittedModel,
        source: &R,
        options: &DiagnosticOptions,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        let figure = Self::figure(model, source, options)?;
        surface.render(&figure)?;
        Ok(())
    }

    /// Build the figure of the selected plots without drawing it
    pub fn figure<R: ResidualSource + ?Sized>(
        model: &FittedModel,
        source: &R,
        options: &DiagnosticOptions,
    ) -> Result<Figure> {
        options.validate(model.n_responses())?;

        let set = source.residuals(model)?;
        set.validate_against(model.shape())?;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let data = PlotData::prepare(model, &set, options, &mut rng);
        let mut figure = Figure::new(options.params.clone());
        // each selected plot once, in plot-number order
        for plot in options.selected() {
            let panel = match plot {
                DiagnosticPlot::ResidualsVsLinearPredictors => {
                    Some(data.residuals_vs_predictors(options))
                }
                DiagnosticPlot::NormalQq => data.normal_qq(options, &mut rng)?,
                DiagnosticPlot::ResidualsVsRow => Some(data.residuals_vs_row(options)),
                DiagnosticPlot::ResidualsVsColumn => Some(data.residuals_vs_column(options)),
                DiagnosticPlot::ScaleLocation => Some(data.scale_location(options)),
            };
            if let Some(panel) = panel {
                figure.push(panel);
            }
        }

        log::debug!(
            "built {} diagnostic panels for {} responses",
            figure.panels.len(),
            data.shape.cols
        );
        Ok(figure)
    }
}

/// Flattened residuals of the plotted responses
struct PlotData {
    shape: Shape,
    residuals: Vec<f64>,
    predictors: Vec<f64>,
    colors: Vec<Color>,
    /// Response totals of the plotted responses
    totals: Vec<f64>,
    /// Per-response colors of the plotted responses
    response_colors: Vec<Color>,
}

impl PlotData {
    fn prepare(
        model: &FittedModel,
        set: &ResidualSet,
        options: &DiagnosticOptions,
        rng: &mut StdRng,
    ) -> Self {
        let p = model.n_responses();
        let totals = model.response_totals().to_vec();
        let colors = response_colors(&totals, options.var_colors.as_deref());

        let selected: Vec<usize> = match options.n_plot {
            Some(k) if k < p => {
                let mut idx = sample(rng, p, k).into_vec();
                idx.sort_unstable();
                log::debug!("plotting responses {:?} of {}", idx, p);
                idx
            }
            _ => (0..p).collect(),
        };
        let set = set.select_responses(&selected);
        let totals: Vec<f64> = selected.iter().map(|&j| totals[j]).collect();
        let response_colors: Vec<Color> = selected.iter().map(|&j| colors[j]).collect();

        let shape = set.shape();
        let residuals = flatten_columns(set.residuals().view());
        let predictors = flatten_columns(set.linear_predictors().view());

        let non_finite = residuals.iter().filter(|r| !r.is_finite()).count();
        if non_finite > 0 {
            log::warn!(
                "{} of {} residuals are not finite and are left out",
                non_finite,
                residuals.len()
            );
        }

        Self {
            shape,
            colors: repeat_each(&response_colors, shape.rows),
            residuals,
            predictors,
            totals,
            response_colors,
        }
    }

    fn points(&self, x: &[f64], y: &[f64], colors: &[Color]) -> Layer {
        Layer::Points {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            colors: colors.to_vec(),
        }
    }

    fn zero_line() -> Layer {
        Layer::HLine {
            y: 0.0,
            color: Color::GREY,
            dashed: true,
        }
    }

    /// LOWESS curve through the scatter, or nothing if it cannot be fitted
    fn lowess(x: &[f64], y: &[f64]) -> Option<Layer> {
        match Lowess::default().smooth(x, y) {
            Ok(curve) => Some(Layer::Line {
                points: curve.line(),
                color: Color::RED,
            }),
            Err(e) => {
                log::warn!("smoother skipped: {}", e);
                None
            }
        }
    }

    fn finite_predictors(&self) -> Vec<f64> {
        self.predictors
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect()
    }

    /// Boxplot whisker extent of the linear predictors; outliers fall outside
    fn predictor_range(&self) -> (f64, f64) {
        whisker_range(&self.finite_predictors())
            .ok()
            .or_else(|| finite_range(&self.predictors))
            .unwrap_or((0.0, 1.0))
    }

    fn residual_range(&self) -> (f64, f64) {
        finite_range(&self.residuals).unwrap_or((-1.0, 1.0))
    }

    fn residuals_vs_predictors(&self, options: &DiagnosticOptions) -> Panel {
        let plot = DiagnosticPlot::ResidualsVsLinearPredictors;
        let (x0, x1) = self.predictor_range();
        let (y0, y1) = self.residual_range();
        let mut panel = Panel::new(options.caption(plot), PREDICTOR_LABEL, RESIDUAL_LABEL)
            .x_range(x0, x1)
            .y_range(y0, y1);

        let curve = if options.add_smooth {
            match LinearSmoother::default().smooth(&self.predictors, &self.residuals) {
                Ok(curve) => Some(curve),
                Err(e) => {
                    log::warn!("residual trend skipped: {}", e);
                    None
                }
            }
        } else {
            None
        };

        if options.envelopes {
            if let Some(band) = curve.as_ref().and_then(|c| c.band_polygon()) {
                panel = panel.layer(Layer::Polygon {
                    points: band,
                    fill: options.envelope_colors[1],
                });
            }
        }
        panel = panel.layer(self.points(&self.predictors, &self.residuals, &self.colors));
        if let Some(curve) = curve {
            panel = panel.layer(Layer::Line {
                points: curve.line(),
                color: options.envelope_colors[0],
            });
        }
        panel.layer(Self::zero_line())
    }

    /// Sorted residuals against normal quantiles; `None` without finite residuals
    fn normal_qq(&self, options: &DiagnosticOptions, rng: &mut StdRng) -> Result<Option<Panel>> {
        let plot = DiagnosticPlot::NormalQq;

        let finite: Vec<usize> = (0..self.residuals.len())
            .filter(|&i| self.residuals[i].is_finite())
            .collect();
        if finite.is_empty() {
            log::warn!("normal Q-Q plot skipped: no finite residuals");
            return Ok(None);
        }
        let values: Vec<f64> = finite.iter().map(|&i| self.residuals[i]).collect();
        let order = order_ascending(&values);
        let theoretical = theoretical_quantiles(values.len())?;

        let mut points = Vec::with_capacity(values.len());
        let mut colors = Vec::with_capacity(values.len());
        for (rank, &k) in order.iter().enumerate() {
            points.push((theoretical[rank], values[k]));
            colors.push(self.colors[finite[k]]);
        }

        let (intercept, slope) = qq_line(&values)?;
        let envelope = if options.envelopes {
            Some(QqEnvelope::simulate(&values, options.reps, rng)?)
        } else {
            None
        };

        let mut ys = values.clone();
        if let Some(env) = &envelope {
            ys.extend_from_slice(&env.lower);
            ys.extend_from_slice(&env.upper);
        }
        let (x0, x1) = finite_range(&theoretical).unwrap_or((-1.0, 1.0));
        let (y0, y1) = finite_range(&ys).unwrap_or((-1.0, 1.0));

        let mut panel = Panel::new(options.caption(plot), "theoretical quantiles", RESIDUAL_LABEL)
            .x_range(x0, x1)
            .y_range(y0, y1);
        if let Some(env) = envelope {
            panel = panel.layer(Layer::Polygon {
                points: env.polygon(),
                fill: options.envelope_colors[1],
            });
        }
        Ok(Some(
            panel
                .layer(Layer::Points { points, colors })
                .layer(Layer::AbLine {
                    intercept,
                    slope,
                    color: options.envelope_colors[0],
                }),
        ))
    }

    fn residuals_vs_row(&self, options: &DiagnosticOptions) -> Panel {
        let plot = DiagnosticPlot::ResidualsVsRow;
        let Shape { rows: n, cols: p } = self.shape;
        let x = tile_indices(n, p);
        let (y0, y1) = self.residual_range();

        let mut panel = Panel::new(options.caption(plot), "row index", RESIDUAL_LABEL)
            .x_range(1.0, n as f64)
            .y_range(y0, y1)
            .layer(self.points(&x, &self.residuals, &self.colors));
        if options.add_smooth {
            if let Some(line) = Self::lowess(&x, &self.residuals) {
                panel = panel.layer(line);
            }
        }
        panel.layer(Self::zero_line())
    }

    /// Responses ordered by ascending total, each drawn at its rank
    fn residuals_vs_column(&self, options: &DiagnosticOptions) -> Panel {
        let plot = DiagnosticPlot::ResidualsVsColumn;
        let Shape { rows: n, cols: p } = self.shape;
        let order = order_ascending(&self.totals);

        let x = repeat_each(&(1..=p).map(|j| j as f64).collect::<Vec<_>>(), n);
        let y: Vec<f64> = order
            .iter()
            .flat_map(|&j| self.residuals[j * n..(j + 1) * n].iter().copied())
            .collect();
        let colors: Vec<Color> = order
            .iter()
            .flat_map(|&j| std::iter::repeat_n(self.response_colors[j], n))
            .collect();
        let (y0, y1) = self.residual_range();

        let mut panel = Panel::new(options.caption(plot), "column index", RESIDUAL_LABEL)
            .x_range(1.0, p as f64)
            .y_range(y0, y1)
            .layer(self.points(&x, &y, &colors));
        if options.add_smooth {
            if let Some(line) = Self::lowess(&x, &y) {
                panel = panel.layer(line);
            }
        }
        panel.layer(Self::zero_line())
    }

    fn scale_location(&self, options: &DiagnosticOptions) -> Panel {
        let plot = DiagnosticPlot::ScaleLocation;
        let y: Vec<f64> = self.residuals.iter().map(|r| r.abs().sqrt()).collect();
        let (x0, x1) = self.predictor_range();
        let (y0, y1) = finite_range(&y).unwrap_or((0.0, 1.0));

        let mut panel = Panel::new(
            options.caption(plot),
            PREDICTOR_LABEL,
            "sqrt(|Dunn-Smyth residuals|)",
        )
        .x_range(x0, x1)
        .y_range(y0, y1)
        .layer(self.points(&self.predictors, &y, &self.colors));
        if options.add_smooth {
            if let Some(line) = Self::lowess(&self.predictors, &y) {
                panel = panel.layer(line);
            }
        }
        panel
    }
}
