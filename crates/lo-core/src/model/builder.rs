//! Builder pattern for constructing fitted-model records

use ndarray::{Array1, Array2};

use super::{Covariates, Family, FittedModel, ParameterSet, Result, RowEffect};
use crate::error::ModelError;

/// Builder for [`FittedModel`]
#[derive(Debug, Clone)]
pub struct FittedModelBuilder {
    y: Array2<f64>,
    response_names: Option<Vec<String>>,
    num_lv: usize,
    family: Family,
    beta0: Option<Array1<f64>>,
    theta: Option<Array2<f64>>,
    lvs: Option<Array2<f64>>,
    row_effect: RowEffect,
    covariates: Covariates,
    log_likelihood: Option<f64>,
    call: String,
}

impl FittedModelBuilder {
    /// Create a new builder for a response matrix
    pub fn new(y: Array2<f64>) -> Self {
        Self {
            y,
            response_names: None,
            num_lv: 0,
            family: Family::Poisson,
            beta0: None,
            theta: None,
            lvs: None,
            row_effect: RowEffect::None,
            covariates: Covariates::None,
            log_likelihood: None,
            call: String::new(),
        }
    }

    /// Set response (column) names; defaults to `V1..Vp`
    pub fn response_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.response_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the response family
    pub fn family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    /// Set response-specific intercepts
    pub fn intercepts(mut self, beta0: Array1<f64>) -> Self {
        self.beta0 = Some(beta0);
        self
    }

    /// Set loadings; the number of latent variables is taken from its columns
    pub fn loadings(mut self, theta: Array2<f64>) -> Self {
        self.num_lv = theta.ncols();
        self.theta = Some(theta);
        self
    }

    /// Set predicted latent variable scores
    pub fn latent_scores(mut self, lvs: Array2<f64>) -> Self {
        self.lvs = Some(lvs);
        self
    }

    /// Set row effects
    pub fn row_effect(mut self, row_effect: RowEffect) -> Self {
        self.row_effect = row_effect;
        self
    }

    /// Set the covariate structure
    pub fn covariates(mut self, covariates: Covariates) -> Self {
        self.covariates = covariates;
        self
    }

    /// Set the maximized log-likelihood
    pub fn log_likelihood(mut self, log_likelihood: f64) -> Self {
        self.log_likelihood = Some(log_likelihood);
        self
    }

    /// Set the call the model was fitted with
    pub fn call(mut self, call: impl Into<String>) -> Self {
        self.call = call.into();
        self
    }

    /// Validate and build the record
    pub fn build(self) -> Result<FittedModel> {
        let (n, p) = self.y.dim();
        if n == 0 || p == 0 {
            return Err(ModelError::invalid(
                "y",
                format!("response matrix must be non-empty, got {}×{}", n, p),
            ));
        }

        let response_names = match self.response_names {
            Some(names) if names.len() != p => {
                return Err(ModelError::invalid(
                    "response_names",
                    format!("expected {} names, got {}", p, names.len()),
                ));
            }
            Some(names) => names,
            None => (1..=p).map(|j| format!("V{}", j)).collect(),
        };

        let beta0 = self.beta0.ok_or(ModelError::MissingField("beta0"))?;
        if beta0.len() != p {
            return Err(ModelError::invalid(
                "beta0",
                format!("expected {} intercepts, got {}", p, beta0.len()),
            ));
        }

        let theta = self.theta.unwrap_or_else(|| Array2::zeros((p, 0)));
        if theta.nrows() != p {
            return Err(ModelError::invalid(
                "theta",
                format!("expected {} rows of loadings, got {}", p, theta.nrows()),
            ));
        }

        if let Some(lvs) = &self.lvs {
            if lvs.dim() != (n, self.num_lv) {
                return Err(ModelError::invalid(
                    "lvs",
                    format!(
                        "expected {}×{} latent scores, got {}×{}",
                        n,
                        self.num_lv,
                        lvs.nrows(),
                        lvs.ncols()
                    ),
                ));
            }
        }

        self.family.validate(p)?;
        self.row_effect.validate(n)?;
        self.covariates.validate(n, p)?;

        let log_likelihood = self
            .log_likelihood
            .ok_or(ModelError::MissingField("log_likelihood"))?;

        log::debug!(
            "{} model on {}×{} responses with {} latent variables",
            self.family.kind(),
            n,
            p,
            self.num_lv
        );

        Ok(FittedModel {
            y: self.y,
            response_names,
            num_lv: self.num_lv,
            family: self.family,
            params: ParameterSet {
                beta0,
                theta,
                lvs: self.lvs,
            },
            row_effect: self.row_effect,
            covariates: self.covariates,
            log_likelihood,
            call: self.call,
        })
    }
}
