//! Server error types
//!
//! Every error renders as an unsuccessful [`ApiResponse`] envelope with
//! HTTP 200; clients branch on `success`, not on the status code.

use crate::api::rest::types::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rulekit_core::CoreError;
use rulekit_parser::ParseError;
use rulekit_repository::RepositoryError;
use rulekit_runtime::EvalError;
use thiserror::Error;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed or incomplete request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Evaluate request with neither an expression nor rule ids
    #[error("Invalid request: either 'expression' or 'rule_ids' is required")]
    MissingExpression,

    /// None of the requested rule ids exist
    #[error("No valid rules found")]
    NoRulesFound,

    /// Rule text that does not parse
    #[error("Invalid rule syntax: {0}")]
    InvalidRule(#[from] ParseError),

    #[error("Error evaluating rule: {0}")]
    Evaluation(#[from] EvalError),

    #[error("Storage error: {0}")]
    Repository(RepositoryError),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    /// Whether the error is caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ServerError::Repository(_) | ServerError::InternalError(_)
        )
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ApiResponse::<()>::failure(self.to_string()));
        (StatusCode::OK, body).into_response()
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidRuleId { .. } => ServerError::InvalidRequest(err.to_string()),
            other => ServerError::Repository(other),
        }
    }
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        ServerError::InvalidRequest(err.to_string())
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
