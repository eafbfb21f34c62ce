//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim scoring test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims, schemas, and the sample model
//! - `builders`: Builder for claim inputs
//! - `classifiers`: Stub classifiers with fixed or failing behaviour
//! - `assertions`: Custom assertion helpers for encoded vectors and results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod classifiers;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use classifiers::*;
pub use assertions::*;
pub use generators::*;
