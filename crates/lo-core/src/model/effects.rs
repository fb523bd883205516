//! Row effects and covariate structure of a fitted model

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::data::LabeledVector;
use crate::error::ModelError;

/// Site-level (row) intercepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowEffect {
    #[default]
    None,
    /// Fixed row intercepts, the first constrained to zero
    Fixed { intercepts: Array1<f64> },
    /// Random row intercepts with their estimated standard deviation
    Random { intercepts: Array1<f64>, sigma: f64 },
}

impl RowEffect {
    /// Stored row intercepts, if any
    pub fn intercepts(&self) -> Option<&Array1<f64>> {
        match self {
            RowEffect::None => None,
            RowEffect::Fixed { intercepts } | RowEffect::Random { intercepts, .. } => {
                Some(intercepts)
            }
        }
    }

    pub(crate) fn validate(&self, n: usize) -> Result<(), ModelError> {
        if let Some(intercepts) = self.intercepts() {
            if intercepts.len() != n {
                return Err(ModelError::invalid(
                    "row_effect",
                    format!("expected {} row intercepts, got {}", n, intercepts.len()),
                ));
            }
        }
        if let RowEffect::Random { sigma, .. } = self {
            if !sigma.is_finite() {
                return Err(ModelError::invalid(
                    "row_effect",
                    format!("random row scale must be finite, got {}", sigma),
                ));
            }
        }
        Ok(())
    }
}

/// Covariate structure: none, per-response environmental effects, or a
/// fourth-corner model where effects are mediated by response traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Covariates {
    #[default]
    None,
    Environmental {
        /// Covariate matrix (n × k)
        x: Array2<f64>,
        /// Covariate names (k)
        names: Vec<String>,
        /// Per-response coefficients (p × k)
        coefficients: Array2<f64>,
    },
    FourthCorner {
        /// Covariate matrix (n × k)
        x: Array2<f64>,
        /// Trait matrix (p × t)
        traits: Array2<f64>,
        /// Covariate names (k)
        names: Vec<String>,
        /// Named covariate and covariate-by-trait coefficients
        coefficients: LabeledVector,
    },
}

impl Covariates {
    /// Number of estimated covariate coefficients
    pub fn n_coefficients(&self) -> usize {
        match self {
            Covariates::None => 0,
            Covariates::Environmental { coefficients, .. } => coefficients.len(),
            Covariates::FourthCorner { coefficients, .. } => coefficients.len(),
        }
    }

    pub(crate) fn validate(&self, n: usize, p: usize) -> Result<(), ModelError> {
        match self {
            Covariates::None => Ok(()),
            Covariates::Environmental {
                x,
                names,
                coefficients,
            } => {
                check_design(x, names, n)?;
                if coefficients.dim() != (p, x.ncols()) {
                    return Err(ModelError::invalid(
                        "covariates",
                        format!(
                            "coefficients should be {}×{}, got {}×{}",
                            p,
                            x.ncols(),
                            coefficients.nrows(),
                            coefficients.ncols()
                        ),
                    ));
                }
                Ok(())
            }
            Covariates::FourthCorner {
                x, traits, names, ..
            } => {
                check_design(x, names, n)?;
                if traits.nrows() != p {
                    return Err(ModelError::invalid(
                        "covariates",
                        format!("trait matrix needs {} rows, got {}", p, traits.nrows()),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_design(x: &Array2<f64>, names: &[String], n: usize) -> Result<(), ModelError> {
    if x.nrows() != n {
        return Err(ModelError::invalid(
            "covariates",
            format!("covariate matrix needs {} rows, got {}", n, x.nrows()),
        ));
    }
    if names.len() != x.ncols() {
        return Err(ModelError::invalid(
            "covariates",
            format!("{} names for {} covariates", names.len(), x.ncols()),
        ));
    }
    Ok(())
}
