use crate::data::DataError;

/// Errors raised while assembling or reading a fitted-model record
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter { field: &'static str, message: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Unknown family: {0}")]
    UnknownFamily(String),
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}
