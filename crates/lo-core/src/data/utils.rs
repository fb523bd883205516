//! Reshaping utilities for response-shaped matrices

use std::cmp::Ordering;
use std::fmt;

use ndarray::{Array1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Shape of an observation × response matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Create a new Shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of an existing matrix
    pub fn of<S>(matrix: &ndarray::ArrayBase<S, ndarray::Ix2>) -> Self
    where
        S: ndarray::Data,
    {
        Self::new(matrix.nrows(), matrix.ncols())
    }

    /// Check if shape is empty
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Column totals of a matrix
pub fn column_sums(matrix: ArrayView2<'_, f64>) -> Array1<f64> {
    matrix.sum_axis(Axis(0))
}

/// Permutation that sorts `values` ascending.
///
/// Ties keep their original relative order and NaN sorts last, so the
/// result is the same permutation R's `order()` would return (zero-based).
pub fn order_ascending(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| match (values[a].is_nan(), values[b].is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => values[a].total_cmp(&values[b]),
    });
    idx
}

/// Flatten a matrix column by column (column-major), the order in which
/// `c(matrix)` enumerates cells.
pub fn flatten_columns(matrix: ArrayView2<'_, f64>) -> Vec<f64> {
    matrix.t().iter().copied().collect()
}

/// `1..=n` tiled `times` times: `rep(1:n, times)`.
pub fn tile_indices(n: usize, times: usize) -> Vec<f64> {
    (0..times)
        .flat_map(|_| (1..=n).map(|i| i as f64))
        .collect()
}

/// Each element of `values` repeated `each` times: `rep(values, each = n)`.
pub fn repeat_each<T: Clone>(values: &[T], each: usize) -> Vec<T> {
    values
        .iter()
        .flat_map(|v| std::iter::repeat_n(v.clone(), each))
        .collect()
}

