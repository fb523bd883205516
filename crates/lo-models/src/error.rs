//! Diagnostics error types

use thiserror::Error;

use lo_core::ModelError;
use lo_core::data::DataError;
use lo_viz::VizError;

/// Errors raised while building or drawing diagnostic plots
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// Fitted-model record error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Data-related error (shapes, empty samples)
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Drawing surface error
    #[error("Render error: {0}")]
    Render(#[from] VizError),

    /// Plot number outside 1..=5
    #[error("Invalid plot selection: {0} (expected 1 to 5)")]
    InvalidSelection(usize),

    /// Invalid plotting option
    #[error("Invalid option '{option}': {message}")]
    InvalidOption {
        /// Option name
        option: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },

    /// Options file could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}
