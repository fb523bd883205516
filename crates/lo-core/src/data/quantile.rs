//! Order statistics used by residual diagnostics

use statrs::distribution::{ContinuousCDF, Normal};

use super::{DataError, Result};

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Type-7 quantile of already sorted data (linear interpolation between
/// order statistics at `(n - 1) * q`).
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let idx = (sorted.len() as f64 - 1.0) * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

fn check_probability(q: f64) -> Result<()> {
    if (0.0..=1.0).contains(&q) {
        Ok(())
    } else {
        Err(DataError::InvalidParameter(format!(
            "probability {} outside [0, 1]",
            q
        )))
    }
}

/// Sample quantile (type 7)
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    Ok(quantiles(data, &[q])?[0])
}

/// Several type-7 quantiles of the same sample, sorting it once
pub fn quantiles(data: &[f64], probs: &[f64]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(DataError::Empty("quantile of an empty sample".to_string()));
    }
    for &q in probs {
        check_probability(q)?;
    }

    let sorted = sorted_copy(data);
    Ok(probs.iter().map(|&q| quantile_sorted(&sorted, q)).collect())
}

/// Tukey's five-number summary: minimum, lower hinge, median, upper hinge,
/// maximum.
pub fn five_number(data: &[f64]) -> Result<[f64; 5]> {
    if data.is_empty() {
        return Err(DataError::Empty("five-number summary of an empty sample".to_string()));
    }

    let sorted = sorted_copy(data);
    let n = sorted.len() as f64;
    let n4 = ((n + 3.0) / 2.0).floor() / 2.0;
    let depths = [1.0, n4, (n + 1.0) / 2.0, n + 1.0 - n4, n];

    let mut out = [0.0; 5];
    for (slot, d) in out.iter_mut().zip(depths) {
        // depths are 1-based
        let lo = sorted[d.floor() as usize - 1];
        let hi = sorted[d.ceil() as usize - 1];
        *slot = 0.5 * (lo + hi);
    }
    Ok(out)
}

/// Extent of the boxplot whiskers: the most extreme observations within
/// 1.5 interquartile ranges of the hinges.
pub fn whisker_range(data: &[f64]) -> Result<(f64, f64)> {
    let stats = five_number(data)?;
    let reach = 1.5 * (stats[3] - stats[1]);
    let (lo_fence, hi_fence) = (stats[1] - reach, stats[3] + reach);

    let inside = data
        .iter()
        .copied()
        .filter(|&v| v >= lo_fence && v <= hi_fence);

    Ok(inside.fold((stats[4], stats[0]), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Minimum and maximum over finite values, `None` when there are none.
pub fn finite_range(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Probability points for a normal Q-Q plot of `m` values.
pub fn ppoints(m: usize) -> Vec<f64> {
    let a = if m <= 10 { 3.0 / 8.0 } else { 0.5 };
    let denom = m as f64 + 1.0 - 2.0 * a;
    (1..=m).map(|i| (i as f64 - a) / denom).collect()
}

/// Standard normal quantile function
pub fn normal_quantile(p: f64) -> Result<f64> {
    check_probability(p)?;
    let std_normal = Normal::new(0.0, 1.0)
        .map_err(|e| DataError::InvalidParameter(format!("standard normal: {}", e)))?;
    Ok(std_normal.inverse_cdf(p))
}
