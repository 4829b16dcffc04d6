//! Error types for parameter validation and projection runs

use crate::scenario::Scenario;

/// Errors raised at the parameter boundary or while projecting
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// A parameter failed boundary validation
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// The projection produced NaN or infinity
    #[error("non-finite {quantity} in scenario {scenario} at year {year}")]
    NonFinite {
        scenario: Scenario,
        year: u32,
        quantity: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ModelError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ModelError::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ModelError>;
