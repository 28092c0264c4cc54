use thiserror::Error;

pub type Result<T> = std::result::Result<T, DesignError>;

#[derive(Debug, Error, PartialEq)]
pub enum DesignError {
    #[error("inconsistent design: {quantity} {message}")]
    InconsistentDesign {
        quantity: &'static str,
        message: String,
    },
    #[error("missing parameters: {message}")]
    MissingParameters { message: String },
    #[error("dimension mismatch: {quantity} has length {actual}, expected {expected}")]
    DimensionMismatch {
        quantity: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },
    #[error("invalid column '{column}': {message}")]
    InvalidColumn { column: String, message: String },
}

impl DesignError {
    pub fn missing_parameters(message: impl Into<String>) -> Self {
        Self::MissingParameters {
            message: message.into(),
        }
    }
}
