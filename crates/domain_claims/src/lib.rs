//! Travel Claim Scoring Domain
//!
//! This crate turns the raw attributes of a travel-insurance claim into the
//! feature row a trained classifier expects, and turns the classifier's
//! probabilities into an approval decision.
//!
//! # Scoring Cycle
//!
//! ```text
//! ClaimInput -> encode -> EncodedFeatureVector -> Classifier -> PredictionResult
//! ```

pub mod claim;
pub mod features;
pub mod encoder;
pub mod classifier;
pub mod adjudication;
pub mod scoring;
pub mod error;

pub use claim::{Agency, AgencyType, ClaimInput, DistributionChannel, ProductName, AGE_RANGE, DURATION_RANGE};
pub use features::{
    canonical_column, columns, is_categorical_column, AgeGroup, EncodedFeatureVector, FeatureValue,
    CATEGORICAL_COLUMNS, DATASET_COLUMN_ALIASES,
};
pub use encoder::encode;
pub use classifier::{ClassProbabilities, Classifier, ClassifierError};
pub use adjudication::{Decision, PredictionResult, APPROVAL_THRESHOLD};
pub use scoring::{ClaimScorer, ScoredClaim};
pub use error::ClaimError;
