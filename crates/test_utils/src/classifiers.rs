//! Stub Classifiers
//!
//! Classifiers with scripted behaviour for exercising the scoring pipeline
//! without a trained model.

use std::collections::BTreeSet;
use std::sync::Mutex;

use domain_claims::{ClassProbabilities, Classifier, ClassifierError, EncodedFeatureVector};

use crate::fixtures::SchemaFixtures;

/// Returns the same approval probability for every claim and records calls
pub struct FixedClassifier {
    schema: Vec<String>,
    p_approval: f64,
    calls: Mutex<Vec<EncodedFeatureVector>>,
}

impl FixedClassifier {
    /// Uses the sample model schema
    pub fn new(p_approval: f64) -> Self {
        Self::with_schema(SchemaFixtures::model_schema(), p_approval)
    }

    pub fn with_schema(schema: Vec<String>, p_approval: f64) -> Self {
        Self {
            schema,
            p_approval,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Vectors received so far
    pub fn calls(&self) -> Vec<EncodedFeatureVector> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Classifier for FixedClassifier {
    fn feature_names(&self) -> &[String] {
        &self.schema
    }

    fn predict_probabilities(
        &self,
        features: &EncodedFeatureVector,
        _categorical: &BTreeSet<String>,
    ) -> Result<ClassProbabilities, ClassifierError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(features.clone());
        }
        ClassProbabilities::from_approval(self.p_approval)
    }
}

/// Fails every prediction with the configured error message
pub struct FailingClassifier {
    schema: Vec<String>,
    message: String,
}

impl FailingClassifier {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            schema: SchemaFixtures::model_schema(),
            message: message.into(),
        }
    }
}

impl Classifier for FailingClassifier {
    fn feature_names(&self) -> &[String] {
        &self.schema
    }

    fn predict_probabilities(
        &self,
        _features: &EncodedFeatureVector,
        _categorical: &BTreeSet<String>,
    ) -> Result<ClassProbabilities, ClassifierError> {
        Err(ClassifierError::Unavailable(self.message.clone()))
    }
}
