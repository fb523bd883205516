//! Matrix helpers shared by the diagnostics and summary layers
//!
//! This module provides labeled tables, order statistics and the small
//! reshaping utilities (column sums, tiling, column-major flattening)
//! that residual plots are built from.

mod labeled;
mod quantile;
mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use labeled::{LabeledMatrix, LabeledVector};
pub use quantile::{
    finite_range, five_number, normal_quantile, ppoints, quantile, quantiles, whisker_range,
};
pub use utils::{
    Shape, column_sums, flatten_columns, order_ascending, repeat_each, tile_indices,
};

/// Error types specific to data operations
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("Empty input: {0}")]
    Empty(String),

    #[error("Label count mismatch: {labels} labels for {len} entries")]
    LabelMismatch { labels: usize, len: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
