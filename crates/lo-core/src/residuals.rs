//! Residuals and linear predictors of a fitted model
//!
//! Residual computation itself happens elsewhere; this module defines the
//! read-only view the diagnostics consume and the trait through which it is
//! obtained.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::data::{DataError, Shape};
use crate::error::ModelError;
use crate::model::FittedModel;

/// Dunn-Smyth residuals and linear predictors, both n × p
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualSet {
    residuals: Array2<f64>,
    linear_predictors: Array2<f64>,
}

impl ResidualSet {
    /// Pair residuals with linear predictors of the same shape
    pub fn new(residuals: Array2<f64>, linear_predictors: Array2<f64>) -> Result<Self, DataError> {
        if residuals.dim() != linear_predictors.dim() {
            return Err(DataError::DimensionMismatch {
                what: "linear predictors".to_string(),
                expected: Shape::of(&residuals).to_string(),
                actual: Shape::of(&linear_predictors).to_string(),
            });
        }
        Ok(Self {
            residuals,
            linear_predictors,
        })
    }

    /// Pair externally computed residuals with the model's own linear predictor
    pub fn from_model(model: &FittedModel, residuals: Array2<f64>) -> Result<Self, ModelError> {
        let set = Self::new(residuals, model.linear_predictor()?)?;
        Ok(set)
    }

    pub fn residuals(&self) -> &Array2<f64> {
        &self.residuals
    }

    pub fn linear_predictors(&self) -> &Array2<f64> {
        &self.linear_predictors
    }

    pub fn shape(&self) -> Shape {
        Shape::of(&self.residuals)
    }

    /// Check that both matrices match the response matrix of a model
    pub fn validate_against(&self, expected: Shape) -> Result<(), DataError> {
        let actual = self.shape();
        if actual != expected {
            return Err(DataError::DimensionMismatch {
                what: "residuals".to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    /// Keep only the given response columns, in the given order
    pub fn select_responses(&self, columns: &[usize]) -> Self {
        Self {
            residuals: self.residuals.select(Axis(1), columns),
            linear_predictors: self.linear_predictors.select(Axis(1), columns),
        }
    }
}

/// Source of residuals for a fitted model
pub trait ResidualSource {
    /// Compute (or fetch) the residual set of `model`
    fn residuals(&self, model: &FittedModel) -> Result<ResidualSet, ModelError>;
}

impl ResidualSource for ResidualSet {
    fn residuals(&self, _model: &FittedModel) -> Result<ResidualSet, ModelError> {
        Ok(self.clone())
    }
}

impl<F> ResidualSource for F
where
    F: Fn(&FittedModel) -> Result<ResidualSet, ModelError>,
{
    fn residuals(&self, model: &FittedModel) -> Result<ResidualSet, ModelError> {
        self(model)
    }
}

#[cfg(test)]
mod tests;
