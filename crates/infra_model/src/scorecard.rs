//! Scorecard classifier adapter

use std::collections::BTreeSet;

use tracing::debug;

use domain_claims::classifier::{ClassProbabilities, Classifier, ClassifierError};
use domain_claims::features::{EncodedFeatureVector, FeatureValue};

use crate::artifact::ScorecardArtifact;

/// Logistic scorecard implementing the claims [`Classifier`] port
#[derive(Debug, Clone)]
pub struct ScorecardClassifier {
    artifact: ScorecardArtifact,
}

impl ScorecardClassifier {
    /// Wraps an already validated artifact
    pub fn new(artifact: ScorecardArtifact) -> Self {
        Self { artifact }
    }

    pub fn positive_class(&self) -> &str {
        &self.artifact.positive_class
    }

    fn check_layout(&self, features: &EncodedFeatureVector) -> Result<(), ClassifierError> {
        let matches = features.len() == self.artifact.feature_names.len()
            && features
                .names()
                .zip(&self.artifact.feature_names)
                .all(|(actual, expected)| actual == expected);

        if !matches {
            return Err(ClassifierError::MalformedVector(format!(
                "columns [{}] do not match model features [{}]",
                features.names().collect::<Vec<_>>().join(", "),
                self.artifact.feature_names.join(", ")
            )));
        }
        Ok(())
    }

    fn contribution(
        &self,
        column: &str,
        value: &FeatureValue,
        categorical: &BTreeSet<String>,
    ) -> Result<f64, ClassifierError> {
        if categorical.contains(column) {
            let token = value.as_categorical().ok_or_else(|| {
                ClassifierError::MalformedVector(format!(
                    "categorical column {column} holds numeric value {value}"
                ))
            })?;
            return Ok(self
                .artifact
                .categorical_weights
                .get(column)
                .and_then(|tokens| tokens.get(token))
                .copied()
                .unwrap_or(0.0));
        }

        let x = value.as_numeric().ok_or_else(|| {
            ClassifierError::MalformedVector(format!(
                "numeric column {column} holds token {value}"
            ))
        })?;
        if !x.is_finite() {
            return Err(ClassifierError::MalformedVector(format!(
                "column {column} is not finite"
            )));
        }
        Ok(self.artifact.weights.get(column).copied().unwrap_or(0.0) * x)
    }
}

impl Classifier for ScorecardClassifier {
    fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    fn predict_probabilities(
        &self,
        features: &EncodedFeatureVector,
        categorical: &BTreeSet<String>,
    ) -> Result<ClassProbabilities, ClassifierError> {
        self.check_layout(features)?;

        let mut logit = self.artifact.intercept;
        for (column, value) in features.iter() {
            logit += self.contribution(column, value, categorical)?;
        }

        let p_positive = sigmoid(logit);
        let p_approval = if self.artifact.scores_approval() {
            p_positive
        } else {
            1.0 - p_positive
        };
        debug!(
            logit,
            positive_class = %self.artifact.positive_class,
            p_approval,
            "Scorecard evaluated"
        );

        ClassProbabilities::from_approval(p_approval)
    }
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
