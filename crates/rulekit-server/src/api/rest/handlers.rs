//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use crate::service::EvaluateRequest;
use axum::{extract::State, Json};
use rulekit_core::types::record_from_json;
use rulekit_repository::Rule;
use tracing::info;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServerError>;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create or replace a rule
pub(super) async fn create_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateRuleRequestPayload>,
) -> ApiResult<Rule> {
    let rule = state
        .service
        .create_rule(&payload.id, &payload.expression)
        .await?;
    Ok(Json(ApiResponse::ok(rule)))
}

/// List all rules
pub(super) async fn list_rules(State(state): State<AppState>) -> ApiResult<Vec<Rule>> {
    let rules = state.service.list_rules().await?;
    Ok(Json(ApiResponse::ok(rules)))
}

/// Combine stored rules into one expression
pub(super) async fn combine_rules(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CombineRequestPayload>,
) -> ApiResult<CombineResponsePayload> {
    let combined_expression = state.service.combine_rules(&payload.rule_ids).await?;
    info!(rule_ids = %payload.rule_ids, combined = %combined_expression, "Combined rules");
    Ok(Json(ApiResponse::ok(CombineResponsePayload {
        combined_expression,
    })))
}

/// Evaluate an expression against the query data
#[axum::debug_handler]
pub(super) async fn evaluate_rules(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EvaluateRequestPayload>,
) -> ApiResult<bool> {
    info!(
        "Received evaluation request with {} query fields",
        payload.query_data.len()
    );

    let data = record_from_json(payload.query_data)?;
    let result = state
        .service
        .evaluate(EvaluateRequest {
            expression: payload.expression,
            rule_ids: payload.rule_ids,
            data,
        })
        .await?;

    Ok(Json(ApiResponse::ok(result)))
}

/// Delete every stored rule
pub(super) async fn clean_rules(State(state): State<AppState>) -> ApiResult<String> {
    let removed = state.service.clean().await?;
    info!(removed, "Cleaned rule repository");
    Ok(Json(ApiResponse::ok(format!(
        "Database cleaned successfully, {} rules removed",
        removed
    ))))
}
