//! Model handlers

use axum::{extract::State, Json};

use domain_claims::{is_categorical_column, APPROVAL_THRESHOLD};

use crate::dto::model::ModelResponse;
use crate::AppState;

/// Describes the loaded model's feature schema
pub async fn describe_model(State(state): State<AppState>) -> Json<ModelResponse> {
    let feature_names = state.scorer.expected_schema().to_vec();
    let categorical_columns = feature_names
        .iter()
        .filter(|name| is_categorical_column(name))
        .cloned()
        .collect();

    Json(ModelResponse {
        feature_names,
        categorical_columns,
        approval_threshold: APPROVAL_THRESHOLD,
        source: state.config.model_path.clone(),
    })
}
