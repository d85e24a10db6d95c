//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use crate::service::RuleService;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(service: Arc<RuleService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(health))
        .route("/api/rules", post(create_rule))
        .route("/api/rule", get(list_rules))
        .route("/api/rules/combine", post(combine_rules))
        .route("/api/rules/evaluate", post(evaluate_rules))
        .route("/api/rules/clean", delete(clean_rules))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
