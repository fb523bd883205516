//! Report table structures

use std::fmt;

use serde::{Deserialize, Serialize};

use lo_core::data::{LabeledMatrix, LabeledVector};

/// One section of a model report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryTable {
    Scalar(f64),
    Vector(LabeledVector),
    Matrix(LabeledMatrix),
}

impl SummaryTable {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            SummaryTable::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&LabeledVector> {
        match self {
            SummaryTable::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&LabeledMatrix> {
        match self {
            SummaryTable::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f64> for SummaryTable {
    fn from(value: f64) -> Self {
        SummaryTable::Scalar(value)
    }
}

impl From<LabeledVector> for SummaryTable {
    fn from(value: LabeledVector) -> Self {
        SummaryTable::Vector(value)
    }
}

impl From<LabeledMatrix> for SummaryTable {
    fn from(value: LabeledMatrix) -> Self {
        SummaryTable::Matrix(value)
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryTable::Scalar(v) => writeln!(f, "{:.4}", v),
            SummaryTable::Vector(v) => write!(f, "{}", v),
            SummaryTable::Matrix(m) => write!(f, "{}", m),
        }
    }
}
