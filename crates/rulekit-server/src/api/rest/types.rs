//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::service::RuleService;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RuleService>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Uniform response envelope for every `/api` endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Create rule request payload
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequestPayload {
    pub id: String,
    pub expression: String,
}

/// Combine rules request payload
#[derive(Debug, Deserialize)]
pub struct CombineRequestPayload {
    /// Comma-separated rule ids, e.g. `"adult, us"`
    pub rule_ids: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CombineResponsePayload {
    pub combined_expression: String,
}

/// Evaluate request payload
///
/// `expression` is usually the text returned by the combine endpoint; when it
/// is absent the stored rules named in `rule_ids` are combined on the fly.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequestPayload {
    #[serde(default)]
    pub expression: Option<String>,

    #[serde(default)]
    pub rule_ids: Option<Vec<String>>,

    /// Record to evaluate against; values must be strings or numbers
    #[serde(default)]
    pub query_data: HashMap<String, serde_json::Value>,
}
