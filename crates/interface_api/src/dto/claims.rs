//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_claims::{ClaimError, ClaimInput, Decision, EncodedFeatureVector, ScoredClaim};

fn non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Claim attributes as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClaimRequest {
    #[validate(length(min = 1))]
    pub agency: String,
    #[validate(length(min = 1))]
    pub agency_type: String,
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub channel: String,
    #[validate(custom(function = "non_negative"))]
    pub net_sales: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub commission: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub profit: Decimal,
    #[validate(range(min = 18, max = 100))]
    pub age: u32,
    #[validate(range(min = 1, max = 365))]
    pub duration_days: u32,
}

impl ClaimRequest {
    /// Parses the categorical labels into their catalogues
    pub fn into_claim_input(self) -> Result<ClaimInput, ClaimError> {
        Ok(ClaimInput {
            agency: self.agency.parse()?,
            agency_type: self.agency_type.parse()?,
            product_name: self.product_name.parse()?,
            channel: self.channel.parse()?,
            net_sales: self.net_sales,
            commission: self.commission,
            profit: self.profit,
            age: self.age,
            duration_days: self.duration_days,
        })
    }
}

/// Slider bounds and initial value of a numeric field
#[derive(Debug, Serialize)]
pub struct NumericFieldOptions<T> {
    pub min: T,
    pub max: T,
    pub default: T,
}

/// Bounds of every numeric field
#[derive(Debug, Serialize)]
pub struct NumericOptions {
    pub net_sales: NumericFieldOptions<Decimal>,
    pub commission: NumericFieldOptions<Decimal>,
    pub profit: NumericFieldOptions<Decimal>,
    pub age: NumericFieldOptions<u32>,
    pub duration_days: NumericFieldOptions<u32>,
}

/// Every value a claim form can offer
#[derive(Debug, Serialize)]
pub struct ClaimOptionsResponse {
    pub agencies: Vec<&'static str>,
    pub agency_types: Vec<&'static str>,
    pub products: Vec<&'static str>,
    pub channels: Vec<&'static str>,
    pub numeric: NumericOptions,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub scoring_id: String,
    pub scored_at: DateTime<Utc>,
    pub decision: Decision,
    pub p_approval: f64,
    pub p_rejection: f64,
    pub message: &'static str,
    pub input: EncodedFeatureVector,
}

impl From<ScoredClaim> for PredictionResponse {
    fn from(scored: ScoredClaim) -> Self {
        Self {
            scoring_id: scored.id.to_string(),
            scored_at: scored.scored_at,
            decision: scored.result.decision,
            p_approval: scored.result.p_approval.value(),
            p_rejection: scored.result.p_rejection.value(),
            message: scored.result.decision.message(),
            input: scored.features,
        }
    }
}
