//! Response distributions supported by the model record

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Response distribution together with its per-response nuisance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Family {
    Poisson,
    Binomial,
    /// Negative binomial with one dispersion parameter per response
    NegativeBinomial { dispersion: Array1<f64> },
    /// Tweedie with per-response dispersion and a shared power parameter
    Tweedie { dispersion: Array1<f64>, power: f64 },
    /// Zero-inflated Poisson with per-response zero-inflation probabilities
    Zip { zero_inflation: Array1<f64> },
}

impl Family {
    /// Tag of this family
    pub fn kind(&self) -> FamilyKind {
        match self {
            Family::Poisson => FamilyKind::Poisson,
            Family::Binomial => FamilyKind::Binomial,
            Family::NegativeBinomial { .. } => FamilyKind::NegativeBinomial,
            Family::Tweedie { .. } => FamilyKind::Tweedie,
            Family::Zip { .. } => FamilyKind::Zip,
        }
    }

    /// Per-response nuisance parameters, if the family has any
    pub fn nuisance(&self) -> Option<&Array1<f64>> {
        match self {
            Family::Poisson | Family::Binomial => None,
            Family::NegativeBinomial { dispersion } | Family::Tweedie { dispersion, .. } => {
                Some(dispersion)
            }
            Family::Zip { zero_inflation } => Some(zero_inflation),
        }
    }

    pub(crate) fn validate(&self, p: usize) -> Result<(), ModelError> {
        if let Some(values) = self.nuisance() {
            if values.len() != p {
                return Err(ModelError::invalid(
                    "family",
                    format!(
                        "{} needs {} nuisance parameters, got {}",
                        self.kind(),
                        p,
                        values.len()
                    ),
                ));
            }
        }

        match self {
            Family::Tweedie { power, .. } if !(*power > 1.0 && *power < 2.0) => Err(
                ModelError::invalid("family", format!("tweedie power {} outside (1, 2)", power)),
            ),
            Family::Zip { zero_inflation }
                if zero_inflation.iter().any(|p| !(0.0..=1.0).contains(p)) =>
            {
                Err(ModelError::invalid(
                    "family",
                    "zero-inflation probabilities must lie in [0, 1]",
                ))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Family tag without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyKind {
    Poisson,
    Binomial,
    NegativeBinomial,
    Tweedie,
    Zip,
}

impl FamilyKind {
    /// Conventional short name, e.g. `"negative.binomial"`
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyKind::Poisson => "poisson",
            FamilyKind::Binomial => "binomial",
            FamilyKind::NegativeBinomial => "negative.binomial",
            FamilyKind::Tweedie => "tweedie",
            FamilyKind::Zip => "ZIP",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FamilyKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poisson" => Ok(FamilyKind::Poisson),
            "binomial" => Ok(FamilyKind::Binomial),
            "negative.binomial" => Ok(FamilyKind::NegativeBinomial),
            "tweedie" => Ok(FamilyKind::Tweedie),
            "ZIP" => Ok(FamilyKind::Zip),
            other => Err(ModelError::UnknownFamily(other.to_string())),
        }
    }
}
