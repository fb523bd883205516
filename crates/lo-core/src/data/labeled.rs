//! Tables with named rows and columns

use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::{DataError, Result};

/// Matrix with row and column labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    /// Row labels
    pub row_names: Vec<String>,
    /// Column labels
    pub col_names: Vec<String>,
    /// Cell values
    pub values: Array2<f64>,
}

impl LabeledMatrix {
    /// Create a new labeled matrix, checking label counts against the shape
    pub fn new(
        row_names: Vec<String>,
        col_names: Vec<String>,
        values: Array2<f64>,
    ) -> Result<Self> {
        if row_names.len() != values.nrows() {
            return Err(DataError::LabelMismatch {
                labels: row_names.len(),
                len: values.nrows(),
            });
        }
        if col_names.len() != values.ncols() {
            return Err(DataError::LabelMismatch {
                labels: col_names.len(),
                len: values.ncols(),
            });
        }

        Ok(Self {
            row_names,
            col_names,
            values,
        })
    }

    /// Look up a cell by labels
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.row_names.iter().position(|r| r == row)?;
        let j = self.col_names.iter().position(|c| c == col)?;
        Some(self.values[(i, j)])
    }

    /// Number of rows and columns
    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }
}

impl fmt::Display for LabeledMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .row_names
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(4);

        write!(f, "{:<width$}", "", width = width)?;
        for name in &self.col_names {
            write!(f, " {:>12}", name)?;
        }
        writeln!(f)?;

        for (name, row) in self.row_names.iter().zip(self.values.rows()) {
            write!(f, "{:<width$}", name, width = width)?;
            for v in row {
                write!(f, " {:>12.6}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Vector with one label per entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledVector {
    /// Entry labels
    pub names: Vec<String>,
    /// Entry values
    pub values: Array1<f64>,
}

impl LabeledVector {
    /// Create a new labeled vector
    pub fn new(names: Vec<String>, values: Array1<f64>) -> Result<Self> {
        if names.len() != values.len() {
            return Err(DataError::LabelMismatch {
                labels: names.len(),
                len: values.len(),
            });
        }
        Ok(Self { names, values })
    }

    /// Look up an entry by label
    pub fn get(&self, name: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == name)?;
        Some(self.values[i])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for LabeledVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, v) in self.names.iter().zip(self.values.iter()) {
            writeln!(f, "{:<20} {:>12.6}", name, v)?;
        }
        Ok(())
    }
}
