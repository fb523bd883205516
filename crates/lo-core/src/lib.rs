//! # lo-core
//!
//! Fitted-model records and data helpers for LatentOxide.

pub mod data;
pub mod error;
pub mod model;
pub mod residuals;

pub use error::ModelError;
pub use model::{Covariates, Family, FamilyKind, FittedModel, FittedModelBuilder, RowEffect};
pub use residuals::{ResidualSet, ResidualSource};
