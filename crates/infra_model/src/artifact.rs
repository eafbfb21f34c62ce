//! Scorecard model artifact
//!
//! A scorecard is a logistic model stored as JSON:
//!
//! ```json
//! {
//!   "feature_names": ["Agency", "AgencyType", "Age"],
//!   "positive_class": "Yes",
//!   "intercept": -0.4,
//!   "weights": { "AgencyType": 0.8, "Age": -0.01 },
//!   "categorical_weights": { "Agency": { "CBH": 0.3, "EPX": -0.2 } }
//! }
//! ```
//!
//! The probability of the positive class is the logistic of the intercept
//! plus every numeric weight times its column value plus the weight of every
//! categorical token. `positive_class` is the claim label that probability
//! refers to: `"Yes"` (approved, the default) or `"No"` (rejected).

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Claim label of an approved claim
pub const APPROVED_LABEL: &str = "Yes";
/// Claim label of a rejected claim
pub const REJECTED_LABEL: &str = "No";

fn default_positive_class() -> String {
    APPROVED_LABEL.to_string()
}

/// On-disk representation of a scorecard model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardArtifact {
    /// Ordered feature names the model expects
    pub feature_names: Vec<String>,
    /// Label of the class the logistic output is the probability of
    #[serde(default = "default_positive_class")]
    pub positive_class: String,
    pub intercept: f64,
    /// Weights of numeric columns; absent columns weigh zero
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    /// Per-token weights of categorical columns; unknown tokens weigh zero
    #[serde(default)]
    pub categorical_weights: BTreeMap<String, BTreeMap<String, f64>>,
}

impl ScorecardArtifact {
    /// Parses and validates an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ScorecardArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Whether the logistic output is the probability of approval
    pub fn scores_approval(&self) -> bool {
        self.positive_class == APPROVED_LABEL
    }

    /// Checks the artifact for internal consistency
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.is_empty() {
            return Err(ModelError::invalid("feature_names is empty"));
        }

        if self.positive_class != APPROVED_LABEL && self.positive_class != REJECTED_LABEL {
            return Err(ModelError::invalid(format!(
                "positive_class {} is not {APPROVED_LABEL} or {REJECTED_LABEL}",
                self.positive_class
            )));
        }

        let mut known = HashSet::with_capacity(self.feature_names.len());
        for name in &self.feature_names {
            if !known.insert(name.as_str()) {
                return Err(ModelError::invalid(format!("feature {name} is listed twice")));
            }
        }

        if !self.intercept.is_finite() {
            return Err(ModelError::invalid("intercept is not finite"));
        }

        for (column, weight) in &self.weights {
            if !known.contains(column.as_str()) {
                return Err(ModelError::invalid(format!("weight for unknown feature {column}")));
            }
            if !weight.is_finite() {
                return Err(ModelError::invalid(format!("weight for {column} is not finite")));
            }
        }

        for (column, tokens) in &self.categorical_weights {
            if !known.contains(column.as_str()) {
                return Err(ModelError::invalid(format!(
                    "categorical weights for unknown feature {column}"
                )));
            }
            if self.weights.contains_key(column) {
                return Err(ModelError::invalid(format!(
                    "feature {column} has both numeric and categorical weights"
                )));
            }
            if let Some((token, _)) = tokens.iter().find(|(_, w)| !w.is_finite()) {
                return Err(ModelError::invalid(format!(
                    "weight for {column}={token} is not finite"
                )));
            }
        }

        Ok(())
    }
}
