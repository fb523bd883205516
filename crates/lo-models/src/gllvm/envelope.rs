//! Normal Q-Q reference line and its simulated envelope

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use lo_core::data::{DataError, normal_quantile, ppoints, quantiles};

use crate::base::Result;
use crate::error::DiagnosticsError;

/// Lower and upper probabilities of the pointwise envelope
const BAND: [f64; 2] = [0.025, 0.975];

/// Intercept and slope of the line through the first and third quartiles
/// of `residuals` against those of the standard normal
pub fn qq_line(residuals: &[f64]) -> Result<(f64, f64)> {
    let q = quantiles(residuals, &[0.25, 0.75])?;
    let z25 = normal_quantile(0.25)?;
    let z75 = normal_quantile(0.75)?;

    let slope = (q[1] - q[0]) / (z75 - z25);
    let intercept = q[0] - slope * z25;
    Ok((intercept, slope))
}

/// Theoretical normal quantiles for `m` ordered values
pub fn theoretical_quantiles(m: usize) -> Result<Vec<f64>> {
    ppoints(m)
        .into_iter()
        .map(|p| normal_quantile(p).map_err(DiagnosticsError::from))
        .collect()
}

/// Pointwise 95% band of sorted normal samples, indexed like the sorted
/// residuals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqEnvelope {
    pub theoretical: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl QqEnvelope {
    /// Simulate `reps` samples from the normal distribution fitted by
    /// [`qq_line`], each the size of `residuals`, and take the pointwise
    /// 2.5% and 97.5% quantiles of their order statistics
    pub fn simulate<R: Rng + ?Sized>(residuals: &[f64], reps: usize, rng: &mut R) -> Result<Self> {
        let m = residuals.len();
        if m == 0 {
            return Err(DataError::Empty("residuals".to_string()).into());
        }
        if reps == 0 {
            return Err(DiagnosticsError::InvalidOption {
                option: "reps",
                message: "need at least one replication".to_string(),
            });
        }

        let (intercept, slope) = qq_line(residuals)?;
        let normal = Normal::new(intercept, slope).map_err(|e| DiagnosticsError::NumericalError {
            message: e.to_string(),
            operation: "envelope distribution".to_string(),
        })?;
        log::debug!(
            "simulating {} Q-Q envelopes of size {} from N({:.4}, {:.4}²)",
            reps,
            m,
            intercept,
            slope
        );

        // draws[r][i] is the i-th order statistic of replication r
        let draws: Vec<Vec<f64>> = (0..reps)
            .map(|_| {
                let mut sample: Vec<f64> = normal.sample_iter(&mut *rng).take(m).collect();
                sample.sort_by(f64::total_cmp);
                sample
            })
            .collect();

        let mut lower = Vec::with_capacity(m);
        let mut upper = Vec::with_capacity(m);
        let mut column = Vec::with_capacity(reps);
        for i in 0..m {
            column.clear();
            column.extend(draws.iter().map(|d| d[i]));
            let band = quantiles(&column, &BAND)?;
            lower.push(band[0]);
            upper.push(band[1]);
        }

        Ok(Self {
            theoretical: theoretical_quantiles(m)?,
            lower,
            upper,
        })
    }

    /// Closed outline: lower band forwards, upper band backwards
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let forward = self
            .theoretical
            .iter()
            .copied()
            .zip(self.lower.iter().copied());
        let backward = self
            .theoretical
            .iter()
            .copied()
            .zip(self.upper.iter().copied())
            .rev();
        forward.chain(backward).collect()
    }
}
