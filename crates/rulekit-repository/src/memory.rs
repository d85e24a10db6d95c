//! In-memory repository implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use tokio::sync::RwLock;

use crate::{EvaluationLog, EvaluationRecord, RepositoryResult, Rule, RuleRepository};

/// Number of evaluation records kept by [`MemoryRepository::new`]
pub const DEFAULT_EVALUATION_CAPACITY: usize = 10_000;

/// Repository backed by process memory
///
/// Contents live as long as the value does. Rules are kept in a `BTreeMap`
/// so listings come out ordered by id without sorting. The evaluation log
/// keeps only the most recent records, dropping the oldest once full.
#[derive(Debug)]
pub struct MemoryRepository {
    rules: RwLock<BTreeMap<String, Rule>>,
    evaluations: RwLock<VecDeque<EvaluationRecord>>,
    evaluation_capacity: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::with_evaluation_capacity(DEFAULT_EVALUATION_CAPACITY)
    }

    /// Create a repository that keeps at most `capacity` evaluation records
    pub fn with_evaluation_capacity(capacity: usize) -> Self {
        Self {
            rules: RwLock::default(),
            evaluations: RwLock::default(),
            evaluation_capacity: capacity,
        }
    }

    /// Snapshot of the retained evaluations, oldest first
    pub async fn evaluations(&self) -> Vec<EvaluationRecord> {
        self.evaluations.read().await.iter().cloned().collect()
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleRepository for MemoryRepository {
    async fn save_rule(&self, rule: &Rule) -> RepositoryResult<()> {
        let previous = self
            .rules
            .write()
            .await
            .insert(rule.id.clone(), rule.clone());
        tracing::debug!(id = %rule.id, replaced = previous.is_some(), "Saved rule");
        Ok(())
    }

    async fn list_rules(&self) -> RepositoryResult<Vec<Rule>> {
        Ok(self.rules.read().await.values().cloned().collect())
    }

    async fn find_rules(&self, ids: &[String]) -> RepositoryResult<Vec<Rule>> {
        let rules = self.rules.read().await;
        let found: BTreeMap<&str, &Rule> = ids
            .iter()
            .filter_map(|id| rules.get(id).map(|rule| (id.as_str(), rule)))
            .collect();
        Ok(found.into_values().cloned().collect())
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        let mut rules = self.rules.write().await;
        let count = rules.len();
        rules.clear();
        tracing::info!(count, "Deleted all rules");
        Ok(count)
    }
}

#[async_trait]
impl EvaluationLog for MemoryRepository {
    async fn record(&self, record: &EvaluationRecord) -> RepositoryResult<()> {
        if self.evaluation_capacity == 0 {
            return Ok(());
        }

        let mut evaluations = self.evaluations.write().await;
        while evaluations.len() >= self.evaluation_capacity {
            evaluations.pop_front();
        }
        evaluations.push_back(record.clone());
        Ok(())
    }
}
