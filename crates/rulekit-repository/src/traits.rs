//! Core trait definitions for the repository pattern
//!
//! - [`RuleRepository`]: create, list, look up and clear rules
//! - [`EvaluationLog`]: append-only record of evaluation outcomes
//!
//! Both traits are object safe; the server holds them as `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::{EvaluationRecord, RepositoryResult, Rule};

/// Rule storage
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Create a rule, or overwrite the rule with the same id
    async fn save_rule(&self, rule: &Rule) -> RepositoryResult<()>;

    /// All stored rules, ordered by id
    async fn list_rules(&self) -> RepositoryResult<Vec<Rule>>;

    /// Rules whose id is in `ids`, ordered by id
    ///
    /// Unknown ids are skipped, duplicates collapse into one rule.
    async fn find_rules(&self, ids: &[String]) -> RepositoryResult<Vec<Rule>>;

    /// Remove every rule, returning how many were removed
    async fn delete_all(&self) -> RepositoryResult<usize>;
}

/// Evaluation audit log
#[async_trait]
pub trait EvaluationLog: Send + Sync {
    /// Append one evaluation outcome
    async fn record(&self, record: &EvaluationRecord) -> RepositoryResult<()>;
}
