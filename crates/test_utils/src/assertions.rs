//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for encoded vectors and prediction
//! results that give more meaningful failure messages than plain asserts.

use domain_claims::{EncodedFeatureVector, FeatureValue, PredictionResult};

/// Asserts that the vector's columns equal the schema, in order
pub fn assert_schema_aligned<S: AsRef<str>>(vector: &EncodedFeatureVector, schema: &[S]) {
    let actual: Vec<&str> = vector.names().collect();
    let expected: Vec<&str> = schema.iter().map(AsRef::as_ref).collect();
    assert_eq!(
        actual, expected,
        "Encoded columns do not match schema: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that a column holds the given numeric value
pub fn assert_numeric_feature(vector: &EncodedFeatureVector, column: &str, expected: f64) {
    match vector.get(column) {
        Some(FeatureValue::Numeric(actual)) => assert!(
            (actual - expected).abs() < 1e-9,
            "Column {} = {}, expected {}",
            column,
            actual,
            expected
        ),
        other => panic!("Expected numeric column {}, got {:?}", column, other),
    }
}

/// Asserts that a column holds the given categorical token
pub fn assert_categorical_feature(vector: &EncodedFeatureVector, column: &str, expected: &str) {
    match vector.get(column) {
        Some(FeatureValue::Categorical(actual)) => assert_eq!(
            actual, expected,
            "Column {} = {:?}, expected {:?}",
            column, actual, expected
        ),
        other => panic!("Expected categorical column {}, got {:?}", column, other),
    }
}

/// Asserts that the result's probabilities sum to one
pub fn assert_probabilities_complementary(result: &PredictionResult) {
    let sum = result.p_approval.value() + result.p_rejection.value();
    assert!(
        (sum - 1.0).abs() < 1e-9,
        "Probabilities do not sum to one: p_approval={}, p_rejection={}",
        result.p_approval,
        result.p_rejection
    );
}
