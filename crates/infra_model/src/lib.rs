//! Model Infrastructure Layer
//!
//! This crate loads the trained claim model from its on-disk artifact and
//! adapts it to the [`domain_claims::Classifier`] port.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::ClaimScorer;
//! use infra_model::{ModelConfig, load_model};
//!
//! let classifier = load_model(&ModelConfig::new("models/travel_claims_scorecard.json"))?;
//! let scorer = ClaimScorer::new(Arc::new(classifier));
//! ```

pub mod artifact;
pub mod scorecard;
pub mod loader;
pub mod error;

pub use artifact::ScorecardArtifact;
pub use scorecard::ScorecardClassifier;
pub use loader::{load_model, ModelConfig};
pub use error::ModelError;
