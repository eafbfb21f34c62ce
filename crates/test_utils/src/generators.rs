//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims and schemas that
//! respect the domain bounds.

use domain_claims::{
    Agency, AgencyType, ClaimInput, DistributionChannel, ProductName, AGE_RANGE, DURATION_RANGE,
};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use rust_decimal::Decimal;

use crate::fixtures::SchemaFixtures;

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for ages inside the accepted range
pub fn age_strategy() -> impl Strategy<Value = u32> {
    AGE_RANGE
}

/// Strategy for valid claim inputs
pub fn claim_input_strategy() -> impl Strategy<Value = ClaimInput> {
    (
        select(Agency::ALL),
        select(AgencyType::ALL),
        select(ProductName::ALL),
        select(DistributionChannel::ALL),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        age_strategy(),
        DURATION_RANGE,
    )
        .prop_map(
            |(agency, agency_type, product_name, channel, net_sales, commission, profit, age, duration_days)| {
                ClaimInput {
                    agency,
                    agency_type,
                    product_name,
                    channel,
                    net_sales,
                    commission,
                    profit,
                    age,
                    duration_days,
                }
            },
        )
}

/// Strategy for non-empty schemas drawn from the model schema plus unknown columns
pub fn schema_strategy() -> impl Strategy<Value = Vec<String>> {
    let mut pool = SchemaFixtures::model_schema();
    pool.extend(["Gender".to_string(), "Destination".to_string()]);
    let size = pool.len();
    subsequence(pool, 1..=size).prop_shuffle()
}
