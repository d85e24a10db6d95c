//! File system based repository implementation
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/rules/<id>.yaml     one rule per file
//! <root>/evaluations.jsonl   one evaluation record per line
//! ```
//!
//! Rule files are written to a hidden temporary file and renamed into place,
//! so readers never see a partially written rule. Files that fail to parse
//! are logged and skipped.

use async_trait::async_trait;
use path_absolutize::Absolutize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use crate::{
    error::RepositoryError, EvaluationLog, EvaluationRecord, RepositoryResult, Rule,
    RuleRepository,
};

const RULES_DIR: &str = "rules";
const EVALUATIONS_FILE: &str = "evaluations.jsonl";

/// File system based repository
///
/// Rule files are read on every call, so edits made on disk are visible
/// without a restart.
pub struct FileSystemRepository {
    /// Root path of the repository
    root_path: PathBuf,
    /// Orders rule writes against listings
    rules_lock: RwLock<()>,
    /// Serializes appends to the evaluation log
    log_lock: Mutex<()>,
}

impl FileSystemRepository {
    /// Open a repository rooted at `root_path`, creating the directory
    /// layout if it does not exist yet
    ///
    /// # Example
    /// ```no_run
    /// use rulekit_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("data").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let abs_path = root_path
            .as_ref()
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        std::fs::create_dir_all(abs_path.join(RULES_DIR))?;
        tracing::info!(root = %abs_path.display(), "Opened file system repository");

        Ok(Self {
            root_path: abs_path,
            rules_lock: RwLock::new(()),
            log_lock: Mutex::new(()),
        })
    }

    /// Root directory of the repository
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn rules_dir(&self) -> PathBuf {
        self.root_path.join(RULES_DIR)
    }

    fn evaluations_path(&self) -> PathBuf {
        self.root_path.join(EVALUATIONS_FILE)
    }

    fn rule_path(&self, id: &str) -> RepositoryResult<PathBuf> {
        if !is_valid_rule_id(id) {
            return Err(RepositoryError::InvalidRuleId { id: id.to_string() });
        }
        Ok(self.rules_dir().join(format!("{}.yaml", id)))
    }

    fn temp_rule_path(&self, id: &str) -> PathBuf {
        self.rules_dir().join(format!(".{}.yaml.tmp", id))
    }

    /// Read one rule file
    ///
    /// Returns `None` if the file does not exist or does not hold a rule.
    async fn read_rule(path: &Path) -> RepositoryResult<Option<Rule>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_yaml::from_str(&content) {
            Ok(rule) => Ok(Some(rule)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable rule file");
                Ok(None)
            }
        }
    }

    /// Paths of every rule file in the rules directory
    async fn rule_files(&self) -> RepositoryResult<Vec<PathBuf>> {
        let mut entries = fs::read_dir(self.rules_dir()).await?;
        let mut paths = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
                paths.push(path);
            }
        }

        Ok(paths)
    }
}

/// A rule id is used as a file name: it must be non-empty, contain no path
/// separators and not start with `.`
fn is_valid_rule_id(id: &str) -> bool {
    !id.is_empty() && !id.starts_with('.') && !id.contains(['/', '\\'])
}

#[async_trait]
impl RuleRepository for FileSystemRepository {
    async fn save_rule(&self, rule: &Rule) -> RepositoryResult<()> {
        let path = self.rule_path(&rule.id)?;
        let content = serde_yaml::to_string(rule)?;

        let temp = self.temp_rule_path(&rule.id);

        let _guard = self.rules_lock.write().await;
        fs::write(&temp, content).await?;
        fs::rename(&temp, &path).await?;
        tracing::debug!(id = %rule.id, path = %path.display(), "Saved rule");
        Ok(())
    }

    async fn list_rules(&self) -> RepositoryResult<Vec<Rule>> {
        let _guard = self.rules_lock.read().await;

        let mut rules = BTreeMap::new();
        for path in self.rule_files().await? {
            if let Some(rule) = Self::read_rule(&path).await? {
                rules.insert(rule.id.clone(), rule);
            }
        }

        Ok(rules.into_values().collect())
    }

    async fn find_rules(&self, ids: &[String]) -> RepositoryResult<Vec<Rule>> {
        let _guard = self.rules_lock.read().await;

        let mut rules = BTreeMap::new();
        for id in ids {
            if rules.contains_key(id) {
                continue;
            }
            let Ok(path) = self.rule_path(id) else {
                tracing::debug!(id = %id, "Skipping invalid rule id");
                continue;
            };
            if let Some(rule) = Self::read_rule(&path).await? {
                rules.insert(id.clone(), rule);
            }
        }

        Ok(rules.into_values().collect())
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        let _guard = self.rules_lock.write().await;

        let mut count = 0;
        for path in self.rule_files().await? {
            fs::remove_file(&path).await?;
            count += 1;
        }

        tracing::info!(count, "Deleted all rules");
        Ok(count)
    }
}

#[async_trait]
impl EvaluationLog for FileSystemRepository {
    async fn record(&self, record: &EvaluationRecord) -> RepositoryResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.log_lock.lock().await;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.evaluations_path())
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
