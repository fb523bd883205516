//! Scatterplot smoothers
//!
//! [`Lowess`] is the robust locally weighted regression of Cleveland
//! (1979). [`LinearSmoother`] is a least-squares line with a pointwise
//! normal-theory band, used for the envelope around the residual trend.

use serde::{Deserialize, Serialize};

use lo_core::data::order_ascending;

use crate::base::Result;
use crate::error::DiagnosticsError;

/// Smoothed curve evaluated at the sorted x values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothCurve {
    pub x: Vec<f64>,
    pub fit: Vec<f64>,
    /// Pointwise (lower, upper) band, when the smoother has one
    pub band: Option<(Vec<f64>, Vec<f64>)>,
}

impl SmoothCurve {
    /// Fitted curve as (x, y) pairs
    pub fn line(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.fit.iter().copied()).collect()
    }

    /// Closed outline of the band: lower edge forwards, upper edge backwards
    pub fn band_polygon(&self) -> Option<Vec<(f64, f64)>> {
        let (lower, upper) = self.band.as_ref()?;
        let forward = self.x.iter().copied().zip(lower.iter().copied());
        let backward = self.x.iter().copied().zip(upper.iter().copied()).rev();
        Some(forward.chain(backward).collect())
    }
}

pub trait Smoother {
    fn smooth(&self, x: &[f64], y: &[f64]) -> Result<SmoothCurve>;
}

/// Finite (x, y) pairs sorted by x
fn sorted_pairs(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(DiagnosticsError::NumericalError {
            message: format!("x has {} values but y has {}", x.len(), y.len()),
            operation: "smooth".to_string(),
        });
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .unzip();
    let order = order_ascending(&xs);
    Ok((
        order.iter().map(|&i| xs[i]).collect(),
        order.iter().map(|&i| ys[i]).collect(),
    ))
}

// ==================== Linear ====================

/// Least-squares line with a ±`z`·se(fit) band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSmoother {
    pub z: f64,
}

impl Default for LinearSmoother {
    fn default() -> Self {
        Self { z: 1.96 }
    }
}

impl Smoother for LinearSmoother {
    fn smooth(&self, x: &[f64], y: &[f64]) -> Result<SmoothCurve> {
        let (x, y) = sorted_pairs(x, y)?;
        let n = x.len();
        if n < 3 {
            return Err(DiagnosticsError::NumericalError {
                message: format!("need at least 3 finite points, got {}", n),
                operation: "linear smooth".to_string(),
            });
        }

        let nf = n as f64;
        let x_mean = x.iter().sum::<f64>() / nf;
        let y_mean = y.iter().sum::<f64>() / nf;
        let sxx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();
        if sxx <= 0.0 {
            return Err(DiagnosticsError::NumericalError {
                message: "x values are all equal".to_string(),
                operation: "linear smooth".to_string(),
            });
        }
        let sxy: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
            .sum();

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let fit: Vec<f64> = x.iter().map(|xi| intercept + slope * xi).collect();

        let rss: f64 = y.iter().zip(fit.iter()).map(|(yi, fi)| (yi - fi).powi(2)).sum();
        let sigma = (rss / (nf - 2.0)).sqrt();

        let (lower, upper) = x
            .iter()
            .zip(fit.iter())
            .map(|(xi, fi)| {
                let se = sigma * (1.0 / nf + (xi - x_mean).powi(2) / sxx).sqrt();
                (fi - self.z * se, fi + self.z * se)
            })
            .unzip();

        Ok(SmoothCurve {
            x,
            fit,
            band: Some((lower, upper)),
        })
    }
}

// ==================== LOWESS ====================

/// Robust locally weighted regression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lowess {
    /// Fraction of points in each local fit
    pub span: f64,
    /// Robustifying iterations
    pub iterations: usize,
}

impl Default for Lowess {
    fn default() -> Self {
        Self {
            span: 2.0 / 3.0,
            iterations: 3,
        }
    }
}

impl Smoother for Lowess {
    fn smooth(&self, x: &[f64], y: &[f64]) -> Result<SmoothCurve> {
        if self.span.is_nan() || self.span <= 0.0 {
            return Err(DiagnosticsError::InvalidOption {
                option: "span",
                message: format!("must be positive, got {}", self.span),
            });
        }
        let (x, y) = sorted_pairs(x, y)?;
        if x.is_empty() {
            return Err(DiagnosticsError::NumericalError {
                message: "no finite points".to_string(),
                operation: "lowess".to_string(),
            });
        }
        let fit = lowess_fit(&x, &y, self.span, self.iterations);
        Ok(SmoothCurve { x, fit, band: None })
    }
}

/// LOWESS on x-sorted data
fn lowess_fit(x: &[f64], y: &[f64], span: f64, iterations: usize) -> Vec<f64> {
    let n = x.len();
    if n < 2 {
        return y.to_vec();
    }

    let delta = 0.01 * (x[n - 1] - x[0]);
    let ns = ((span * n as f64 + 1e-7) as usize).clamp(2, n);

    let mut fitted = vec![0.0; n];
    let mut robustness = vec![1.0; n];
    let mut residuals = vec![0.0; n];

    for iter in 0..=iterations {
        let robust = iter > 0;
        let mut nleft = 0;
        let mut nright = ns - 1;
        let mut last: Option<usize> = None;
        let mut i = 0;

        loop {
            // slide the window while it gets narrower around x[i]
            if nright < n - 1 {
                let d1 = x[i] - x[nleft];
                let d2 = x[nright + 1] - x[i];
                if d1 > d2 {
                    nleft += 1;
                    nright += 1;
                    continue;
                }
            }

            fitted[i] = local_fit(x, y, i, nleft, nright, robust.then_some(&robustness[..]))
                .unwrap_or(y[i]);

            // interpolate the points skipped by `delta`
            if let Some(l) = last {
                if l + 1 < i {
                    let denom = x[i] - x[l];
                    for j in (l + 1)..i {
                        let alpha = (x[j] - x[l]) / denom;
                        fitted[j] = alpha * fitted[i] + (1.0 - alpha) * fitted[l];
                    }
                }
            }
            let mut l = i;
            let cut = x[l] + delta;
            let mut k = l + 1;
            while k < n {
                if x[k] > cut {
                    break;
                }
                if x[k] == x[l] {
                    fitted[k] = fitted[l];
                    l = k;
                }
                k += 1;
            }
            last = Some(l);
            i = (l + 1).max(k - 1);
            if l >= n - 1 {
                break;
            }
        }

        for ((r, yk), fk) in residuals.iter_mut().zip(y).zip(&fitted) {
            *r = yk - fk;
        }
        if iter == iterations {
            break;
        }

        let scale = residuals.iter().map(|r| r.abs()).sum::<f64>() / n as f64;
        let mut abs: Vec<f64> = residuals.iter().map(|r| r.abs()).collect();
        abs.sort_by(f64::total_cmp);
        let m = n / 2;
        let cmad = if n % 2 == 0 {
            3.0 * (abs[m] + abs[m - 1])
        } else {
            6.0 * abs[m]
        };
        if cmad < 1e-7 * scale {
            break;
        }

        let c9 = 0.999 * cmad;
        let c1 = 0.001 * cmad;
        for (w, r) in robustness.iter_mut().zip(residuals.iter()) {
            let r = r.abs();
            *w = if r <= c1 {
                1.0
            } else if r <= c9 {
                (1.0 - (r / cmad).powi(2)).powi(2)
            } else {
                0.0
            };
        }
    }

    fitted
}

/// Weighted local linear fit at `x[i]` over the window `nleft..=nright`
///
/// Returns `None` when every weight is zero.
fn local_fit(
    x: &[f64],
    y: &[f64],
    i: usize,
    nleft: usize,
    nright: usize,
    robustness: Option<&[f64]>,
) -> Option<f64> {
    let n = x.len();
    let xs = x[i];
    let range = x[n - 1] - x[0];
    let h = (xs - x[nleft]).max(x[nright] - xs);
    let h9 = 0.999 * h;
    let h1 = 0.001 * h;

    let mut weights = Vec::new();
    let mut total = 0.0;
    for (j, &xj) in x.iter().enumerate().skip(nleft) {
        let r = (xj - xs).abs();
        if r <= h9 {
            let mut w = if r <= h1 {
                1.0
            } else {
                (1.0 - (r / h).powi(3)).powi(3)
            };
            if let Some(rw) = robustness {
                w *= rw[j];
            }
            total += w;
            weights.push(w);
        } else if xj > xs {
            break;
        } else {
            weights.push(0.0);
        }
    }
    if total <= 0.0 {
        return None;
    }
    for w in weights.iter_mut() {
        *w /= total;
    }

    let window = &x[nleft..nleft + weights.len()];
    if h > 0.0 {
        let a: f64 = weights.iter().zip(window).map(|(w, xj)| w * xj).sum();
        let c: f64 = weights
            .iter()
            .zip(window)
            .map(|(w, xj)| w * (xj - a).powi(2))
            .sum();
        if c.sqrt() > 0.001 * range {
            let b = (xs - a) / c;
            for (w, xj) in weights.iter_mut().zip(window) {
                *w *= b * (xj - a) + 1.0;
            }
        }
    }

    Some(
        weights
            .iter()
            .zip(&y[nleft..nleft + weights.len()])
            .map(|(w, yj)| w * yj)
            .sum(),
    )
}
