//! Rule service
//!
//! Glues the repository to the parser and the evaluator, independent of the
//! transport. Nothing is kept between calls: a combined expression is handed
//! back to the caller, who passes it to [`RuleService::evaluate`] again.

use crate::config::{RepositoryType, ServerConfig};
use crate::error::ServerError;
use rulekit_core::Record;
use rulekit_parser::{clean_expression, combine_expressions, parse_rule};
use rulekit_repository::{
    EvaluationLog, EvaluationRecord, FileSystemRepository, MemoryRepository, Rule,
    RuleRepository,
};
use rulekit_runtime::evaluate_rule;
use std::sync::Arc;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, ServerError>;

/// What to evaluate and against which record
#[derive(Debug, Clone, Default)]
pub struct EvaluateRequest {
    /// Expression text, takes precedence over `rule_ids`
    pub expression: Option<String>,
    /// Stored rules to combine when no expression is given
    pub rule_ids: Option<Vec<String>>,
    pub data: Record,
}

/// Rule management and evaluation
pub struct RuleService {
    rules: Arc<dyn RuleRepository>,
    evaluations: Arc<dyn EvaluationLog>,
    record_evaluations: bool,
}

impl RuleService {
    pub fn new(rules: Arc<dyn RuleRepository>, evaluations: Arc<dyn EvaluationLog>) -> Self {
        Self {
            rules,
            evaluations,
            record_evaluations: true,
        }
    }

    /// Service over a fresh in-memory repository
    pub fn in_memory() -> Self {
        let repo = Arc::new(MemoryRepository::new());
        Self::new(repo.clone(), repo)
    }

    /// Enable or disable persisting evaluation records
    pub fn with_record_evaluations(mut self, enabled: bool) -> Self {
        self.record_evaluations = enabled;
        self
    }

    /// Validate and store a rule, replacing any rule with the same id
    ///
    /// The id is trimmed and the expression is cleaned before storage, so
    /// the returned rule may differ from the input.
    pub async fn create_rule(&self, id: &str, expression: &str) -> Result<Rule> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ServerError::InvalidRequest("rule id must not be empty".to_string()));
        }

        let expression = clean_expression(expression);
        parse_rule(&expression)?;

        let rule = Rule::new(id, expression);
        self.rules.save_rule(&rule).await?;
        info!(id = %rule.id, expression = %rule.expression, "Created rule");
        Ok(rule)
    }

    pub async fn list_rules(&self) -> Result<Vec<Rule>> {
        Ok(self.rules.list_rules().await?)
    }

    /// Combine stored rules named by a comma-separated id list
    pub async fn combine_rules(&self, ids_csv: &str) -> Result<String> {
        self.combine_rule_ids(&split_rule_ids(ids_csv)).await
    }

    /// Combine stored rules with `AND`, in id order
    ///
    /// Unknown ids are skipped; fails only when none of the ids exist.
    pub async fn combine_rule_ids(&self, ids: &[String]) -> Result<String> {
        let ids: Vec<String> = ids
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let rules = self.rules.find_rules(&ids).await?;
        debug!(requested = ?ids, found = rules.len(), "Looked up rules to combine");
        if rules.is_empty() {
            return Err(ServerError::NoRulesFound);
        }

        let expressions: Vec<&str> = rules.iter().map(|r| r.expression.as_str()).collect();
        let combined = combine_expressions(&expressions);
        parse_rule(&combined)?;
        Ok(combined)
    }

    /// Evaluate an expression, or the combination of stored rules, against a record
    pub async fn evaluate(&self, request: EvaluateRequest) -> Result<bool> {
        let explicit = request
            .expression
            .filter(|expression| !expression.trim().is_empty());

        let expression = match (explicit, request.rule_ids) {
            (Some(expression), _) => expression,
            (None, Some(ids)) if ids.iter().any(|id| !id.trim().is_empty()) => {
                self.combine_rule_ids(&ids).await?
            }
            _ => return Err(ServerError::MissingExpression),
        };

        let node = parse_rule(&expression)?;
        let result = evaluate_rule(&node, &request.data)?;
        debug!(expression = %expression, result, "Evaluated rule");

        if self.record_evaluations {
            let record = EvaluationRecord::new(result, request.data, expression);
            if let Err(e) = self.evaluations.record(&record).await {
                warn!(error = %e, "Failed to store evaluation result");
            }
        }

        Ok(result)
    }

    /// Remove every stored rule, returning how many were removed
    pub async fn clean(&self) -> Result<usize> {
        Ok(self.rules.delete_all().await?)
    }
}

/// Split a comma-separated id list, trimming each id and dropping empties
pub fn split_rule_ids(ids_csv: &str) -> Vec<String> {
    ids_csv
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

/// Build the rule service for the configured repository
pub fn init_service(config: &ServerConfig) -> anyhow::Result<RuleService> {
    let service = match &config.repository {
        RepositoryType::Memory => {
            info!("Using in-memory repository");
            RuleService::in_memory()
        }
        RepositoryType::FileSystem { path } => {
            let repo = Arc::new(FileSystemRepository::new(path)?);
            info!(root = %repo.root_path().display(), "Using file system repository");
            RuleService::new(repo.clone(), repo)
        }
    };

    Ok(service.with_record_evaluations(config.record_evaluations))
}
