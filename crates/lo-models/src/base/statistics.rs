//! Fit statistics reported alongside coefficients

use serde::{Deserialize, Serialize};

/// Likelihood-based fit statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitStatistics {
    /// Maximized log-likelihood
    pub log_likelihood: f64,
    /// Number of estimated parameters
    pub df: usize,
    /// Akaike information criterion
    pub aic: f64,
    /// Small-sample corrected AIC; undefined when n·p ≤ df + 1
    pub aicc: Option<f64>,
    /// Bayesian information criterion
    pub bic: f64,
}

impl FitStatistics {
    /// Criteria for `df` parameters fitted to `n_cells` observations
    pub fn from_log_likelihood(log_likelihood: f64, df: usize, n_cells: usize) -> Self {
        let k = df as f64;
        let aic = -2.0 * log_likelihood + 2.0 * k;
        let bic = -2.0 * log_likelihood + k * (n_cells as f64).ln();

        let denom = n_cells as f64 - k - 1.0;
        let aicc = if denom > 0.0 {
            Some(aic + 2.0 * k * (k + 1.0) / denom)
        } else {
            log::warn!(
                "AICc undefined for {} parameters and {} observations",
                df,
                n_cells
            );
            None
        };

        Self {
            log_likelihood,
            df,
            aic,
            aicc,
            bic,
        }
    }
}
