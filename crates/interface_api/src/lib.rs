//! HTTP API Layer
//!
//! This crate exposes claim scoring over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: option catalogue, encoding preview, prediction, model schema
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(scorer, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimScorer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, model};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: ClaimScorer,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `scorer` - Claim scorer backed by the loaded model
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(scorer: ClaimScorer, config: ApiConfig) -> Router {
    let state = AppState { scorer, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/options", get(claims::list_options))
        .route("/encode", post(claims::encode_claim))
        .route("/predict", post(claims::predict_claim));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/model", get(model::describe_model));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
