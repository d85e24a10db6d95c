//! Data models for the repository layer

use chrono::{DateTime, Utc};
use rulekit_core::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named rule expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule identifier
    pub id: String,
    /// Rule text, stored in cleaned form
    pub expression: String,
}

impl Rule {
    pub fn new(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expression: expression.into(),
        }
    }
}

/// Outcome of one evaluation, kept for auditing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: Uuid,
    /// Verdict of the evaluation
    pub result: bool,
    /// Record the expression was evaluated against
    pub data: Record,
    /// Expression text that was evaluated
    pub expression: String,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Create a record stamped with a fresh id and the current time
    pub fn new(result: bool, data: Record, expression: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            result,
            data,
            expression: expression.into(),
            evaluated_at: Utc::now(),
        }
    }
}
