//! Model loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON or does not match the artifact layout
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact parsed but is internally inconsistent
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),
}

impl ModelError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ModelError::InvalidArtifact(message.into())
    }

    /// Checks if the artifact is missing or unreadable rather than malformed
    pub fn is_io_error(&self) -> bool {
        matches!(self, ModelError::Io { .. })
    }
}
