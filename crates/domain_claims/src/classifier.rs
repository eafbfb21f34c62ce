//! Classifier port
//!
//! The trained model lives outside this crate. Adapters implement
//! [`Classifier`] over whatever artifact they load; the domain only relies on
//! the schema they expose and the probabilities they return.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use core_kernel::{Probability, ProbabilityError};

use crate::features::EncodedFeatureVector;

/// Errors signalled by a classifier
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The encoded vector does not fit the model
    #[error("Malformed feature vector: {0}")]
    MalformedVector(String),

    /// The model produced probabilities that are out of range or not complementary
    #[error("Invalid probabilities: {0}")]
    InvalidProbabilities(#[from] ProbabilityError),

    /// The model could not be evaluated
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Approval and rejection probabilities for a single claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    p_approval: Probability,
    p_rejection: Probability,
}

impl ClassProbabilities {
    /// Builds the pair, checking that the two probabilities sum to one
    pub fn new(p_approval: f64, p_rejection: f64) -> Result<Self, ClassifierError> {
        let p_approval = Probability::new(p_approval)?;
        let p_rejection = Probability::new(p_rejection)?;
        p_approval.ensure_complementary(&p_rejection)?;
        Ok(Self {
            p_approval,
            p_rejection,
        })
    }

    /// Builds the pair from the approval probability alone
    pub fn from_approval(p_approval: f64) -> Result<Self, ClassifierError> {
        let p_approval = Probability::new(p_approval)?;
        Ok(Self {
            p_approval,
            p_rejection: p_approval.complement(),
        })
    }

    pub fn p_approval(&self) -> Probability {
        self.p_approval
    }

    pub fn p_rejection(&self) -> Probability {
        self.p_rejection
    }
}

/// A loaded, read-only binary claim classifier
pub trait Classifier: Send + Sync {
    /// Ordered feature names the model was trained on
    fn feature_names(&self) -> &[String];

    /// Scores an encoded claim
    ///
    /// `categorical` names the columns that hold raw categorical tokens.
    fn predict_probabilities(
        &self,
        features: &EncodedFeatureVector,
        categorical: &BTreeSet<String>,
    ) -> Result<ClassProbabilities, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_approval_is_complementary() {
        let probs = ClassProbabilities::from_approval(0.8).unwrap();
        assert!((probs.p_rejection().value() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_new_rejects_non_complementary_pair() {
        let result = ClassProbabilities::new(0.6, 0.6);
        assert!(matches!(
            result,
            Err(ClassifierError::InvalidProbabilities(ProbabilityError::NotComplementary(_, _)))
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ClassProbabilities::new(1.2, -0.2).is_err());
        assert!(ClassProbabilities::from_approval(f64::NAN).is_err());
    }
}
