//! Structured summary of a fitted GLLVM

use std::fmt;

use indexmap::IndexMap;
use ndarray::{Array1, Array2, Axis, concatenate};
use serde::{Deserialize, Serialize};

use lo_core::data::{LabeledMatrix, LabeledVector};
use lo_core::{Covariates, Family, FamilyKind, FittedModel, ModelError, RowEffect};

use crate::base::{FitStatistics, InformationCriteria, SummaryTable};

pub const COEFFICIENTS: &str = "Coefficients";
pub const COVARIATE_COEFFICIENTS: &str = "Covariate coefficients";
pub const ENVIRONMENTAL_COEFFICIENTS: &str = "Environmental coefficients";
pub const ROW_INTERCEPTS: &str = "Row intercepts";
pub const ROW_VARIANCE: &str = "Variance of random row intercepts";
pub const DISPERSION: &str = "Dispersion parameters";
pub const ZERO_INFLATION: &str = "Zero inflation p";

/// Report of a fitted model: fit statistics plus labeled parameter tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GllvmSummary {
    pub call: String,
    pub family: FamilyKind,
    pub num_lv: usize,
    pub n_obs: usize,
    pub n_responses: usize,
    pub statistics: FitStatistics,
    /// Sections in report order, always starting with the coefficients
    pub sections: IndexMap<String, SummaryTable>,
}

impl GllvmSummary {
    pub fn new<C: InformationCriteria + ?Sized>(
        model: &FittedModel,
        criteria: &C,
    ) -> Result<Self, ModelError> {
        let statistics = criteria.criteria(model)?;
        let mut sections = IndexMap::new();

        sections.insert(
            COEFFICIENTS.to_string(),
            coefficient_table(model)?.into(),
        );

        match model.covariates() {
            Covariates::None => {}
            Covariates::FourthCorner { coefficients, .. } => {
                sections.insert(
                    COVARIATE_COEFFICIENTS.to_string(),
                    coefficients.clone().into(),
                );
            }
            Covariates::Environmental {
                names,
                coefficients,
                ..
            } => {
                let table = LabeledMatrix::new(
                    model.response_names().to_vec(),
                    names.clone(),
                    coefficients.clone(),
                )?;
                sections.insert(ENVIRONMENTAL_COEFFICIENTS.to_string(), table.into());
            }
        }

        match model.row_effect() {
            RowEffect::None => {}
            RowEffect::Fixed { intercepts } => {
                sections.insert(ROW_INTERCEPTS.to_string(), row_table(intercepts)?.into());
            }
            RowEffect::Random { intercepts, sigma } => {
                sections.insert(ROW_INTERCEPTS.to_string(), row_table(intercepts)?.into());
                sections.insert(ROW_VARIANCE.to_string(), (sigma * sigma).into());
            }
        }

        let nuisance = match model.family() {
            Family::Poisson | Family::Binomial => None,
            Family::NegativeBinomial { dispersion } | Family::Tweedie { dispersion, .. } => {
                Some((DISPERSION, dispersion))
            }
            Family::Zip { zero_inflation } => Some((ZERO_INFLATION, zero_inflation)),
        };
        if let Some((title, values)) = nuisance {
            let table = LabeledVector::new(model.response_names().to_vec(), values.clone())?;
            sections.insert(title.to_string(), table.into());
        }

        Ok(Self {
            call: model.call().to_string(),
            family: model.family().kind(),
            num_lv: model.num_lv(),
            n_obs: model.n_obs(),
            n_responses: model.n_responses(),
            statistics,
            sections,
        })
    }

    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn get(&self, section: &str) -> Option<&SummaryTable> {
        self.sections.get(section)
    }

    /// The intercept and loading table
    pub fn coefficients(&self) -> Option<&LabeledMatrix> {
        self.get(COEFFICIENTS)?.as_matrix()
    }
}

/// Intercepts next to loadings, one row per response
fn coefficient_table(model: &FittedModel) -> Result<LabeledMatrix, ModelError> {
    let params = model.params();
    let d = model.num_lv();

    let intercept = params.beta0.view().insert_axis(Axis(1));
    let values: Array2<f64> = concatenate(Axis(1), &[intercept, params.theta.view()]).map_err(|e| {
        ModelError::InvalidParameter {
            field: "theta",
            message: e.to_string(),
        }
    })?;

    let columns = std::iter::once("Intercept".to_string())
        .chain((1..=d).map(|k| format!("theta.LV{}", k)))
        .collect();

    Ok(LabeledMatrix::new(
        model.response_names().to_vec(),
        columns,
        values,
    )?)
}

fn row_table(intercepts: &Array1<f64>) -> Result<LabeledVector, ModelError> {
    let names = (1..=intercepts.len()).map(|i| format!("Row{}", i)).collect();
    Ok(LabeledVector::new(names, intercepts.clone())?)
}

impl fmt::Display for GllvmSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Call:")?;
        writeln!(f, "{}", self.call)?;
        writeln!(f)?;
        writeln!(f, "Family: {}", self.family)?;
        writeln!(f, "Latent variables: {}", self.num_lv)?;
        writeln!(
            f,
            "Observations: {}  Responses: {}",
            self.n_obs, self.n_responses
        )?;
        writeln!(f)?;

        let stats = &self.statistics;
        write!(
            f,
            "log-likelihood: {:.4}, df: {}, AIC: {:.4}, ",
            stats.log_likelihood, stats.df, stats.aic
        )?;
        match stats.aicc {
            Some(aicc) => write!(f, "AICc: {:.4}, ", aicc)?,
            None => write!(f, "AICc: NA, ")?,
        }
        writeln!(f, "BIC: {:.4}", stats.bic)?;

        for (title, table) in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}:", title)?;
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}
