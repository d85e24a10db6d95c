//! Error types for rulekit Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A JSON value that has no counterpart in [`crate::Value`]
    #[error("Unsupported value for field '{field}': expected string or number, got {kind}")]
    UnsupportedValue { field: String, kind: &'static str },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
