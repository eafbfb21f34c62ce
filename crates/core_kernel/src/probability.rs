//! Probability value type
//!
//! Classifier outputs cross crate boundaries as `Probability` so that every
//! consumer can rely on the value being finite and inside `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Tolerance used when checking that complementary probabilities sum to one
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Errors raised when constructing probabilities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbabilityError {
    #[error("Probability must be finite, got {0}")]
    NotFinite(f64),

    #[error("Probability {0} is outside [0, 1]")]
    OutOfRange(f64),

    #[error("Probabilities {0} and {1} do not sum to 1")]
    NotComplementary(f64, f64),
}

/// A probability in the closed interval `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    /// Creates a probability, rejecting NaN, infinities and values outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if !value.is_finite() {
            return Err(ProbabilityError::NotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - p`
    pub fn complement(&self) -> Self {
        Self(1.0 - self.0)
    }

    /// Checks that `self` and `other` sum to one within [`PROBABILITY_EPSILON`]
    pub fn ensure_complementary(&self, other: &Probability) -> Result<(), ProbabilityError> {
        if ((self.0 + other.0) - 1.0).abs() > PROBABILITY_EPSILON {
            return Err(ProbabilityError::NotComplementary(self.0, other.0));
        }
        Ok(())
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_bounds() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(1.0).is_ok());
        assert_eq!(Probability::new(1.01), Err(ProbabilityError::OutOfRange(1.01)));
        assert_eq!(Probability::new(-0.1), Err(ProbabilityError::OutOfRange(-0.1)));
    }

    #[test]
    fn test_probability_rejects_nan() {
        assert!(matches!(Probability::new(f64::NAN), Err(ProbabilityError::NotFinite(_))));
        assert!(matches!(Probability::new(f64::INFINITY), Err(ProbabilityError::NotFinite(_))));
    }

    #[test]
    fn test_complementary_check() {
        let p = Probability::new(0.3).unwrap();
        let q = Probability::new(0.6).unwrap();
        assert!(p.ensure_complementary(&p.complement()).is_ok());
        assert!(matches!(
            p.ensure_complementary(&q),
            Err(ProbabilityError::NotComplementary(_, _))
        ));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Probability>("0.25").is_ok());
        assert!(serde_json::from_str::<Probability>("1.5").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn complement_always_sums_to_one(value in 0.0f64..=1.0f64) {
            let p = Probability::new(value).unwrap();
            prop_assert!(p.ensure_complementary(&p.complement()).is_ok());
        }

        #[test]
        fn complement_stays_in_range(value in 0.0f64..=1.0f64) {
            let c = Probability::new(value).unwrap().complement();
            prop_assert!(Probability::new(c.value()).is_ok());
        }
    }
}
