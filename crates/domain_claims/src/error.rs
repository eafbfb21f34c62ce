//! Claims domain errors

use thiserror::Error;

use crate::classifier::ClassifierError;

/// Errors that can occur while encoding or scoring a claim
#[derive(Debug, Error)]
pub enum ClaimError {
    /// A field lies outside its enumerated set or numeric bounds
    #[error("Invalid value for {field}: {value}")]
    Domain { field: &'static str, value: String },

    /// The expected feature schema cannot be used as an encoding target
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The classifier rejected the encoded vector or failed to score it
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}

impl ClaimError {
    pub fn domain(field: &'static str, value: impl ToString) -> Self {
        ClaimError::Domain {
            field,
            value: value.to_string(),
        }
    }

    /// Returns true if the error was caused by caller-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(self, ClaimError::Domain { .. })
    }
}
