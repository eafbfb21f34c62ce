//! Model artifact loading
//!
//! The artifact is read once at start-up and shared read-only afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use domain_claims::canonical_column;

use crate::artifact::ScorecardArtifact;
use crate::error::ModelError;
use crate::scorecard::ScorecardClassifier;

/// Location and expectations of the model artifact
///
/// # Example
///
/// ```rust,ignore
/// use infra_model::{ModelConfig, load_model};
///
/// let config = ModelConfig::new("models/travel_claims_scorecard.json")
///     .require_features(["Agency", "ProductName"]);
/// let classifier = load_model(&config)?;
/// ```
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Path to the JSON artifact
    pub path: PathBuf,
    /// Features the artifact must list for the deployment to make sense.
    /// A dataset-named column satisfies its encoder-named requirement.
    pub required_features: Vec<String>,
}

impl ModelConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required_features: Vec::new(),
        }
    }

    /// Sets features that must be present in the artifact's schema
    pub fn require_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Loads and validates a scorecard classifier
///
/// # Errors
///
/// * [`ModelError::Io`] if the file cannot be read
/// * [`ModelError::Parse`] if it is not a scorecard artifact
/// * [`ModelError::InvalidArtifact`] if validation fails or a required feature is missing
pub fn load_model(config: &ModelConfig) -> Result<ScorecardClassifier, ModelError> {
    info!(path = %config.path.display(), "Loading model artifact");

    let json = read_artifact(&config.path)?;
    let artifact = ScorecardArtifact::from_json(&json)?;

    if let Some(missing) = config
        .required_features
        .iter()
        .find(|required| {
            !artifact
                .feature_names
                .iter()
                .any(|name| same_column(name, required))
        })
    {
        return Err(ModelError::invalid(format!(
            "required feature {missing} is not in the model schema"
        )));
    }

    info!(
        features = artifact.feature_names.len(),
        positive_class = %artifact.positive_class,
        "Model artifact loaded"
    );

    Ok(ScorecardClassifier::new(artifact))
}

fn same_column(a: &str, b: &str) -> bool {
    a == b || canonical_column(a).is_some_and(|column| canonical_column(b) == Some(column))
}

fn read_artifact(path: &Path) -> Result<String, ModelError> {
    fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ModelConfig::new("model.json").require_features(["Agency", "Age"]);
        assert_eq!(config.path, PathBuf::from("model.json"));
        assert_eq!(config.required_features, vec!["Agency", "Age"]);
    }

    #[test]
    fn test_dataset_names_satisfy_requirements() {
        assert!(same_column("Product Name", "ProductName"));
        assert!(same_column("Agency", "Agency"));
        assert!(same_column("Destination", "Destination"));
        assert!(!same_column("Agency Type", "Agency"));
        assert!(!same_column("Gender", "Destination"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let config = ModelConfig::new("/nonexistent/scorecard.json");
        let err = load_model(&config).unwrap_err();
        assert!(err.is_io_error());
        assert!(err.to_string().contains("/nonexistent/scorecard.json"));
    }
}
