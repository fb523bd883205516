//! Fitted generalized linear latent variable model record
//!
//! A [`FittedModel`] holds everything the presentation layer reads from a
//! finished fit: the response matrix, the covariate structure, the family
//! with its nuisance parameters, the estimated intercepts and loadings, row
//! effects, the log-likelihood and the call that produced it. Records are
//! assembled with [`FittedModelBuilder`], which checks every shape against
//! the response matrix.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::data::{Shape, column_sums};
use crate::error::ModelError;

mod builder;
mod effects;
mod family;


pub use builder::FittedModelBuilder;
pub use effects::{Covariates, RowEffect};
pub use family::{Family, FamilyKind};

/// Result type for model record operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Estimated intercepts, loadings and latent scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Response-specific intercepts (p)
    pub beta0: Array1<f64>,
    /// Latent variable loadings (p × num_lv)
    pub theta: Array2<f64>,
    /// Predicted latent variable scores (n × num_lv)
    pub lvs: Option<Array2<f64>>,
}

/// Immutable record of a fitted GLLVM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    y: Array2<f64>,
    response_names: Vec<String>,
    num_lv: usize,
    family: Family,
    params: ParameterSet,
    row_effect: RowEffect,
    covariates: Covariates,
    log_likelihood: f64,
    call: String,
}

impl FittedModel {
    /// Start building a record around a response matrix
    pub fn builder(y: Array2<f64>) -> FittedModelBuilder {
        FittedModelBuilder::new(y)
    }

    /// Response matrix (n × p)
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// Shape of the response matrix
    pub fn shape(&self) -> Shape {
        Shape::of(&self.y)
    }

    /// Number of observations (rows)
    pub fn n_obs(&self) -> usize {
        self.y.nrows()
    }

    /// Number of responses (columns)
    pub fn n_responses(&self) -> usize {
        self.y.ncols()
    }

    pub fn response_names(&self) -> &[String] {
        &self.response_names
    }

    /// Number of latent variables
    pub fn num_lv(&self) -> usize {
        self.num_lv
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn row_effect(&self) -> &RowEffect {
        &self.row_effect
    }

    pub fn covariates(&self) -> &Covariates {
        &self.covariates
    }

    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Call the model was fitted with
    pub fn call(&self) -> &str {
        &self.call
    }

    /// Total response per column
    pub fn response_totals(&self) -> Array1<f64> {
        column_sums(self.y.view())
    }

    /// Linear predictor implied by the stored estimates (n × p).
    ///
    /// `eta[i, j] = beta0[j] + row[i] + x[i, ] . xcoef[j, ] + lvs[i, ] . theta[j, ]`
    pub fn linear_predictor(&self) -> Result<Array2<f64>> {
        let (n, p) = self.y.dim();
        let mut eta = Array2::zeros((n, p));
        eta += &self.params.beta0.view().insert_axis(Axis(0));

        if let Some(rows) = self.row_effect.intercepts() {
            eta += &rows.view().insert_axis(Axis(1));
        }

        match &self.covariates {
            Covariates::None => {}
            Covariates::Environmental { x, coefficients, .. } => {
                eta += &x.dot(&coefficients.t());
            }
            Covariates::FourthCorner { .. } => {
                return Err(ModelError::Unsupported(
                    "linear predictor of a fourth-corner model needs its design matrix".to_string(),
                ));
            }
        }

        if self.num_lv > 0 {
            let lvs = self
                .params
                .lvs
                .as_ref()
                .ok_or(ModelError::MissingField("lvs"))?;
            eta += &lvs.dot(&self.params.theta.t());
        }

        Ok(eta)
    }
}
