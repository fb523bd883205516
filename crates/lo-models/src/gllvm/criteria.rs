//! Parameter counts and information criteria

use lo_core::{Family, FittedModel, ModelError, RowEffect};

use crate::base::{FitStatistics, InformationCriteria};

/// AIC, AICc and BIC from the stored log-likelihood and the number of
/// free parameters of the model
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCriteria;

impl InformationCriteria for StandardCriteria {
    fn criteria(&self, model: &FittedModel) -> Result<FitStatistics, ModelError> {
        let df = parameter_count(model);
        let n_cells = model.n_obs() * model.n_responses();
        log::debug!("{} free parameters for {} observations", df, n_cells);
        Ok(FitStatistics::from_log_likelihood(
            model.log_likelihood(),
            df,
            n_cells,
        ))
    }
}

/// Number of free parameters of a fitted model
///
/// Loadings above the diagonal are fixed at zero, so `d` latent variables
/// on `p` responses contribute `p·d − d(d−1)/2` parameters. Fixed row
/// effects lose one degree of freedom to the first-row constraint.
pub fn parameter_count(model: &FittedModel) -> usize {
    let n = model.n_obs();
    let p = model.n_responses();
    let d = model.num_lv();

    let intercepts = p;
    let loadings = (p * d).saturating_sub(d * d.saturating_sub(1) / 2);
    let covariates = model.covariates().n_coefficients();
    let rows = match model.row_effect() {
        RowEffect::None => 0,
        RowEffect::Fixed { .. } => n.saturating_sub(1),
        RowEffect::Random { .. } => 1,
    };
    let nuisance = match model.family() {
        Family::Poisson | Family::Binomial => 0,
        Family::NegativeBinomial { .. } | Family::Tweedie { .. } | Family::Zip { .. } => p,
    };

    intercepts + loadings + covariates + rows + nuisance
}
