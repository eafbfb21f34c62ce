//! Claim scoring service
//!
//! Composes the encoder, a [`Classifier`] and the decision rule into a single
//! encode-predict cycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use core_kernel::ScoringId;

use crate::adjudication::PredictionResult;
use crate::claim::ClaimInput;
use crate::classifier::Classifier;
use crate::encoder;
use crate::error::ClaimError;
use crate::features::EncodedFeatureVector;

/// Output of one scoring cycle
#[derive(Debug, Clone, Serialize)]
pub struct ScoredClaim {
    pub id: ScoringId,
    pub scored_at: DateTime<Utc>,
    pub features: EncodedFeatureVector,
    pub result: PredictionResult,
}

/// Scores claims against a shared, read-only classifier
#[derive(Clone)]
pub struct ClaimScorer {
    classifier: Arc<dyn Classifier>,
}

impl ClaimScorer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Ordered feature schema of the underlying classifier
    pub fn expected_schema(&self) -> &[String] {
        self.classifier.feature_names()
    }

    /// Encodes a claim against the classifier's schema without scoring it
    pub fn encode(&self, input: &ClaimInput) -> Result<EncodedFeatureVector, ClaimError> {
        encoder::encode(input, self.classifier.feature_names())
    }

    /// Encodes, scores and decides a claim
    ///
    /// # Errors
    ///
    /// Encoding errors are returned before the classifier is called.
    /// Classifier failures are propagated as [`ClaimError::Classifier`].
    pub fn score(&self, input: &ClaimInput) -> Result<ScoredClaim, ClaimError> {
        let id = ScoringId::new_v7();

        let features = self.encode(input).inspect_err(|e| {
            warn!(scoring_id = %id, error = %e, "Claim could not be encoded");
        })?;

        let probabilities = self
            .classifier
            .predict_probabilities(&features, features.categorical_columns())
            .inspect_err(|e| {
                warn!(scoring_id = %id, error = %e, "Classifier failed");
            })?;

        let result = PredictionResult::from_probabilities(probabilities);

        info!(
            scoring_id = %id,
            decision = ?result.decision,
            p_approval = result.p_approval.value(),
            agency = %input.agency,
            product = %input.product_name,
            "Claim scored"
        );

        Ok(ScoredClaim {
            id,
            scored_at: Utc::now(),
            features,
            result,
        })
    }
}

impl std::fmt::Debug for ClaimScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimScorer")
            .field("schema", &self.classifier.feature_names())
            .finish()
    }
}
