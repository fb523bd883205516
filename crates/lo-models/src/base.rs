//! Core traits and types shared by the model presenters
//!
//! Fit statistics, report tables and the information-criteria seam used
//! by the summary formatter.

use lo_core::FittedModel;

pub use statistics::FitStatistics;
pub use summary::SummaryTable;

pub use crate::error::DiagnosticsError;
pub use lo_core::ModelError;

pub mod statistics;
pub mod summary;

/// Result type for diagnostics operations
pub type Result<T> = std::result::Result<T, DiagnosticsError>;

/// Computes likelihood-based fit statistics for a fitted model
pub trait InformationCriteria {
    /// Parameter count and criteria of `model`
    fn criteria(&self, model: &FittedModel) -> std::result::Result<FitStatistics, ModelError>;
}
