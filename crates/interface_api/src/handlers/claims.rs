//! Claims handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rust_decimal::Decimal;
use tracing::warn;
use validator::Validate;

use domain_claims::{
    Agency, AgencyType, ClaimInput, DistributionChannel, EncodedFeatureVector, ProductName,
    AGE_RANGE, DURATION_RANGE,
};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

const NET_SALES_MAX: i64 = 1_000_000;
const COMMISSION_MAX: i64 = 100_000;
const PROFIT_MAX: i64 = 1_000_000;

fn labels<T>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

/// Lists the values a claim form can offer
pub async fn list_options() -> Json<ClaimOptionsResponse> {
    let defaults = ClaimInput::default();

    Json(ClaimOptionsResponse {
        agencies: labels(Agency::ALL, Agency::as_str),
        agency_types: labels(AgencyType::ALL, AgencyType::as_str),
        products: labels(ProductName::ALL, ProductName::as_str),
        channels: labels(DistributionChannel::ALL, DistributionChannel::as_str),
        numeric: NumericOptions {
            net_sales: NumericFieldOptions {
                min: Decimal::ZERO,
                max: Decimal::from(NET_SALES_MAX),
                default: defaults.net_sales,
            },
            commission: NumericFieldOptions {
                min: Decimal::ZERO,
                max: Decimal::from(COMMISSION_MAX),
                default: defaults.commission,
            },
            profit: NumericFieldOptions {
                min: Decimal::ZERO,
                max: Decimal::from(PROFIT_MAX),
                default: defaults.profit,
            },
            age: NumericFieldOptions {
                min: *AGE_RANGE.start(),
                max: *AGE_RANGE.end(),
                default: defaults.age,
            },
            duration_days: NumericFieldOptions {
                min: *DURATION_RANGE.start(),
                max: *DURATION_RANGE.end(),
                default: defaults.duration_days,
            },
        },
    })
}

fn parse_request(
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Result<ClaimInput, ApiError> {
    let Json(request) = payload.inspect_err(|e| {
        warn!(error = %e, "Claim request body rejected");
    })?;
    request.validate().inspect_err(|e| {
        warn!(errors = %e, "Claim request failed validation");
    })?;
    Ok(request.into_claim_input()?)
}

/// Encodes a claim against the model schema without scoring it
pub async fn encode_claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Result<Json<EncodedFeatureVector>, ApiError> {
    let input = parse_request(payload)?;
    let features = state.scorer.encode(&input)?;
    Ok(Json(features))
}

/// Scores a claim and returns the decision
pub async fn predict_claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let input = parse_request(payload)?;
    let scored = state.scorer.score(&input)?;
    Ok(Json(PredictionResponse::from(scored)))
}
