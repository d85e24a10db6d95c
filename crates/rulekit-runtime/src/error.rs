//! Runtime error types

use rulekit_core::Comparator;
use thiserror::Error;

/// Evaluation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The record has no entry for a field the rule compares
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Ordering comparison applied to text
    #[error("Invalid operator {comparator} for strings")]
    InvalidStringOperator { comparator: Comparator },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EvalError::FieldNotFound("age".to_string()).to_string(),
            "Field not found: age"
        );
        assert_eq!(
            EvalError::InvalidStringOperator {
                comparator: Comparator::Gt
            }
            .to_string(),
            "Invalid operator > for strings"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EvalError>();
    }
}
