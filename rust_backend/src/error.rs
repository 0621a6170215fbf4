//! Error types for the cleaning pipeline.

use polars::prelude::PolarsError;

/// Result type for cleaning operations
pub type CleaningResult<T> = Result<T, CleaningError>;

/// Error type for cleaning operations
#[derive(Debug, thiserror::Error)]
pub enum CleaningError {
    #[error("Failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Step '{step}' requires column '{column}', which is missing")]
    Schema { step: &'static str, column: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Table operation failed: {0}")]
    Polars(#[from] PolarsError),
}

impl CleaningError {
    pub(crate) fn missing_column(step: &'static str, column: &str) -> Self {
        CleaningError::Schema {
            step,
            column: column.to_string(),
        }
    }
}
