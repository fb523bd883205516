//! # lo-models
//!
//! Residual diagnostics, information criteria and summaries for fitted
//! generalized linear latent variable models.
//!
//! ```no_run
//! use lo_models::gllvm::{self, DiagnosticOptions};
//! use lo_viz::SvgSurface;
//! # use lo_core::{FittedModel, ResidualSet};
//! # fn run(model: &FittedModel, residuals: &ResidualSet) -> lo_models::Result<()> {
//! let options = DiagnosticOptions::default().with_which(&[1, 2])?.with_seed(7);
//! let mut surface = SvgSurface::new();
//! gllvm::plot_diagnostics(model, residuals, &options, &mut surface)?;
//! println!("{}", gllvm::summary(model)?);
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod error;
pub mod gllvm;

pub use base::{FitStatistics, InformationCriteria, Result, SummaryTable};
pub use error::DiagnosticsError;
pub use gllvm::{
    DiagnosticOptions, DiagnosticPlot, Diagnostics, GllvmSummary, StandardCriteria,
    diagnostic_figure, plot_diagnostics, summary,
};
