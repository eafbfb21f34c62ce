//! Feature encoding
//!
//! Turns a [`ClaimInput`] into the exact column layout a classifier expects.
//!
//! # Steps
//!
//! 1. Binary re-mapping of agency type and distribution channel
//! 2. Age bucketing into [`AgeGroup`]
//! 3. One-hot expansion of the age group with `Teen` as reference level
//! 4. Alignment against the expected schema: missing columns are zero-filled,
//!    extra columns are dropped, order follows the schema
//!
//! `Agency` and `ProductName` are passed through as categorical tokens.
//! Schema columns may use the dataset's names (`Product Name`,
//! `Commision (in value)`, ...) as well as the encoder's.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::claim::ClaimInput;
use crate::error::ClaimError;
use crate::features::{
    canonical_column, columns, is_categorical_column, AgeGroup, EncodedFeatureVector, FeatureValue,
};

/// Encodes a claim against an externally supplied, ordered feature schema
///
/// # Errors
///
/// * [`ClaimError::SchemaMismatch`] if the schema is empty or names a column twice
/// * [`ClaimError::Domain`] if a numeric field is out of bounds
pub fn encode<S: AsRef<str>>(
    input: &ClaimInput,
    expected_schema: &[S],
) -> Result<EncodedFeatureVector, ClaimError> {
    check_schema(expected_schema)?;
    input.validate()?;

    let computed = compute_features(input)?;

    let mut categorical = BTreeSet::new();
    let mut zero_filled = Vec::new();
    let aligned = expected_schema
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let value = match canonical_column(name).and_then(|column| computed.get(column)) {
                Some(value) => {
                    if is_categorical_column(name) {
                        categorical.insert(name.to_string());
                    }
                    value.clone()
                }
                None => {
                    zero_filled.push(name);
                    FeatureValue::Numeric(0.0)
                }
            };
            (name.to_string(), value)
        })
        .collect::<Vec<_>>();

    if zero_filled.len() == aligned.len() {
        warn!(
            columns = ?zero_filled,
            "No schema column is produced by the encoder; every feature is zero-filled"
        );
    } else if !zero_filled.is_empty() {
        debug!(columns = ?zero_filled, "Schema columns zero-filled");
    }

    debug!(
        columns = aligned.len(),
        computed = computed.len(),
        categorical = categorical.len(),
        "Encoded claim features"
    );

    Ok(EncodedFeatureVector::new(aligned, categorical))
}

fn check_schema<S: AsRef<str>>(expected_schema: &[S]) -> Result<(), ClaimError> {
    if expected_schema.is_empty() {
        return Err(ClaimError::SchemaMismatch(
            "expected feature schema is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(expected_schema.len());
    for name in expected_schema {
        if !seen.insert(name.as_ref()) {
            return Err(ClaimError::SchemaMismatch(format!(
                "column {} appears more than once",
                name.as_ref()
            )));
        }
    }

    Ok(())
}

/// Builds every column the encoder knows how to produce, keyed by name
fn compute_features(input: &ClaimInput) -> Result<BTreeMap<&'static str, FeatureValue>, ClaimError> {
    let age_group = AgeGroup::from_age(input.age)?;

    let mut features = BTreeMap::new();
    features.insert(columns::AGENCY, FeatureValue::from(input.agency.as_str()));
    features.insert(columns::AGENCY_TYPE, FeatureValue::Numeric(f64::from(input.agency_type.code())));
    features.insert(columns::PRODUCT_NAME, FeatureValue::from(input.product_name.as_str()));
    features.insert(
        columns::DISTRIBUTION_CHANNEL,
        FeatureValue::Numeric(f64::from(input.channel.code())),
    );
    features.insert(columns::DURATION, FeatureValue::Numeric(f64::from(input.duration_days)));
    features.insert(columns::NET_SALES, amount_feature("net_sales", input.net_sales)?);
    features.insert(columns::COMMISSION, amount_feature("commission", input.commission)?);
    features.insert(columns::AGE, FeatureValue::Numeric(f64::from(input.age)));
    features.insert(columns::PROFIT, amount_feature("profit", input.profit)?);

    for group in AgeGroup::ALL {
        if let Some(column) = group.indicator_column() {
            let indicator = if group == age_group { 1.0 } else { 0.0 };
            features.insert(column, FeatureValue::Numeric(indicator));
        }
    }

    Ok(features)
}

fn amount_feature(field: &'static str, amount: Decimal) -> Result<FeatureValue, ClaimError> {
    amount
        .to_f64()
        .map(FeatureValue::Numeric)
        .ok_or_else(|| ClaimError::domain(field, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::{AgencyType, DistributionChannel};

    fn numeric(vector: &EncodedFeatureVector, name: &str) -> f64 {
        vector
            .get(name)
            .and_then(FeatureValue::as_numeric)
            .unwrap_or_else(|| panic!("column {name} missing or not numeric"))
    }

    const INDICATORS: [&str; 4] = [
        columns::AGE_GROUP_ADULT_YOUNG,
        columns::AGE_GROUP_ADULT,
        columns::AGE_GROUP_MID_AGE,
        columns::AGE_GROUP_SENIOR,
    ];

    #[test]
    fn test_empty_schema_is_rejected() {
        let schema: [&str; 0] = [];
        let result = encode(&ClaimInput::default(), &schema);
        assert!(matches!(result, Err(ClaimError::SchemaMismatch(_))));
    }

    #[test]
    fn test_duplicate_schema_column_is_rejected() {
        let result = encode(&ClaimInput::default(), &["Age", "Profit", "Age"]);
        assert!(matches!(result, Err(ClaimError::SchemaMismatch(msg)) if msg.contains("Age")));
    }

    #[test]
    fn test_unknown_columns_are_zero_filled() {
        let vector = encode(&ClaimInput::default(), &["Age", "Gender", "Destination"]).unwrap();
        assert_eq!(numeric(&vector, "Gender"), 0.0);
        assert_eq!(numeric(&vector, "Destination"), 0.0);
        assert_eq!(numeric(&vector, "Age"), 30.0);
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let vector = encode(&ClaimInput::default(), &["Profit"]).unwrap();
        assert_eq!(vector.names().collect::<Vec<_>>(), vec!["Profit"]);
        assert!(vector.categorical_columns().is_empty());
    }

    #[test]
    fn test_teen_has_no_indicator() {
        let input = ClaimInput {
            age: 18,
            ..ClaimInput::default()
        };
        let vector = encode(&input, &INDICATORS).unwrap();
        for column in INDICATORS {
            assert_eq!(numeric(&vector, column), 0.0, "{column}");
        }
    }

    #[test]
    fn test_age_nineteen_is_adult_young() {
        let input = ClaimInput {
            age: 19,
            ..ClaimInput::default()
        };
        let vector = encode(&input, &INDICATORS).unwrap();
        assert_eq!(numeric(&vector, columns::AGE_GROUP_ADULT_YOUNG), 1.0);
        assert_eq!(numeric(&vector, columns::AGE_GROUP_ADULT), 0.0);
    }

    #[test]
    fn test_age_hundred_is_senior() {
        let input = ClaimInput {
            age: 100,
            ..ClaimInput::default()
        };
        let vector = encode(&input, &INDICATORS).unwrap();
        assert_eq!(numeric(&vector, columns::AGE_GROUP_SENIOR), 1.0);
        assert_eq!(numeric(&vector, columns::AGE_GROUP_MID_AGE), 0.0);
    }

    #[test]
    fn test_out_of_range_ages_fail() {
        for age in [0, 101] {
            let input = ClaimInput {
                age,
                ..ClaimInput::default()
            };
            assert!(
                matches!(encode(&input, &INDICATORS), Err(ClaimError::Domain { field: "age", .. })),
                "age {age}"
            );
        }
    }

    #[test]
    fn test_binary_remap() {
        let schema = [columns::AGENCY_TYPE, columns::DISTRIBUTION_CHANNEL];

        let airlines = ClaimInput {
            agency_type: AgencyType::Airlines,
            channel: DistributionChannel::Offline,
            ..ClaimInput::default()
        };
        let vector = encode(&airlines, &schema).unwrap();
        assert_eq!(numeric(&vector, columns::AGENCY_TYPE), 1.0);
        assert_eq!(numeric(&vector, columns::DISTRIBUTION_CHANNEL), 1.0);

        let agency = ClaimInput {
            agency_type: AgencyType::TravelAgency,
            channel: DistributionChannel::Online,
            ..ClaimInput::default()
        };
        let vector = encode(&agency, &schema).unwrap();
        assert_eq!(numeric(&vector, columns::AGENCY_TYPE), 0.0);
        assert_eq!(numeric(&vector, columns::DISTRIBUTION_CHANNEL), 0.0);
    }

    #[test]
    fn test_dataset_column_names_are_encoded() {
        let schema = [
            "Agency",
            "Agency Type",
            "Product Name",
            "Distribution Channel",
            "Net Sales",
            "Commision (in value)",
            "AgeGroup_Young Adult",
            "AgeGroup_Mid-Age",
        ];
        let vector = encode(&ClaimInput::default(), &schema).unwrap();

        assert_eq!(vector.names().collect::<Vec<_>>(), schema.to_vec());
        assert_eq!(numeric(&vector, "Agency Type"), 1.0);
        assert_eq!(numeric(&vector, "Distribution Channel"), 0.0);
        assert_eq!(numeric(&vector, "Net Sales"), 1000.0);
        assert_eq!(numeric(&vector, "Commision (in value)"), 1000.0);
        assert_eq!(numeric(&vector, "AgeGroup_Young Adult"), 1.0);
        assert_eq!(numeric(&vector, "AgeGroup_Mid-Age"), 0.0);
        assert_eq!(
            vector.get("Product Name").and_then(FeatureValue::as_categorical),
            Some("Comprehensive Plan")
        );

        let expected: BTreeSet<String> = ["Agency", "Product Name"].iter().map(|s| s.to_string()).collect();
        assert_eq!(vector.categorical_columns(), &expected);
    }

    #[test]
    fn test_categorical_tokens_are_verbatim() {
        let vector = encode(&ClaimInput::default(), &[columns::PRODUCT_NAME, columns::AGENCY]).unwrap();
        assert_eq!(
            vector.get(columns::PRODUCT_NAME).and_then(FeatureValue::as_categorical),
            Some("Comprehensive Plan")
        );
        assert_eq!(
            vector.get(columns::AGENCY).and_then(FeatureValue::as_categorical),
            Some("CBH")
        );
        assert_eq!(vector.categorical_columns().len(), 2);
    }
}
