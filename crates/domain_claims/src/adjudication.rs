//! Claim decision rule

use serde::{Deserialize, Serialize};

use core_kernel::Probability;

use crate::classifier::ClassProbabilities;

/// Approval probability at or above which a claim is approved
pub const APPROVAL_THRESHOLD: f64 = 0.5;

/// Outcome of scoring a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// Applies the fixed threshold, inclusive on the approved side
    pub fn from_approval(p_approval: Probability) -> Self {
        if p_approval.value() >= APPROVAL_THRESHOLD {
            Decision::Approved
        } else {
            Decision::Rejected
        }
    }

    /// Message shown to the person who submitted the claim
    pub fn message(&self) -> &'static str {
        match self {
            Decision::Approved => "Claim is likely to be Approved.",
            Decision::Rejected => {
                "Claim is likely to be Rejected - Possible Fraud or Invalid Submission."
            }
        }
    }
}

/// Decision plus the probabilities it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub decision: Decision,
    pub p_approval: Probability,
    pub p_rejection: Probability,
}

impl PredictionResult {
    pub fn from_probabilities(probabilities: ClassProbabilities) -> Self {
        Self {
            decision: Decision::from_approval(probabilities.p_approval()),
            p_approval: probabilities.p_approval(),
            p_rejection: probabilities.p_rejection(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.decision == Decision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: f64) -> Probability {
        Probability::new(value).unwrap()
    }

    #[test]
    fn test_threshold_is_half() {
        assert_eq!(APPROVAL_THRESHOLD, 0.5);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(Decision::from_approval(p(0.5)), Decision::Approved);
        assert_eq!(Decision::from_approval(p(0.4999)), Decision::Rejected);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Decision::from_approval(Probability::ONE), Decision::Approved);
        assert_eq!(Decision::from_approval(Probability::ZERO), Decision::Rejected);
    }

    #[test]
    fn test_result_from_probabilities() {
        let result = PredictionResult::from_probabilities(ClassProbabilities::from_approval(0.25).unwrap());
        assert_eq!(result.decision, Decision::Rejected);
        assert!(!result.is_approved());
        assert!((result.p_approval.value() + result.p_rejection.value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_messages() {
        assert!(Decision::Approved.message().contains("Approved"));
        assert!(Decision::Rejected.message().contains("Possible Fraud"));
    }
}
