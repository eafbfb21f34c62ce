//! Core Kernel - Foundational types shared by the claim scoring crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Probability values with enforced bounds
//! - Strongly-typed identifiers for scoring requests

pub mod probability;
pub mod identifiers;

pub use probability::{Probability, ProbabilityError, PROBABILITY_EPSILON};
pub use identifiers::ScoringId;
