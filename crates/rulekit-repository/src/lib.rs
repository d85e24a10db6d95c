//! Storage layer for rulekit
//!
//! Rules are stored as `(id, expression)` pairs of rule text; parsing and
//! validation happen above this layer. Two backends implement the same
//! traits:
//!
//! - [`MemoryRepository`]: process-local maps, for tests and throwaway servers
//! - [`FileSystemRepository`]: one YAML file per rule plus a JSON-lines
//!   evaluation log
//!
//! ```no_run
//! use rulekit_repository::{FileSystemRepository, Rule, RuleRepository};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = FileSystemRepository::new("data")?;
//! repo.save_rule(&Rule::new("adult", "age > 18")).await?;
//!
//! let rules = repo.find_rules(&["adult".to_string()]).await?;
//! assert_eq!(rules[0].expression, "age > 18");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file_system;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemRepository;
pub use memory::MemoryRepository;
pub use models::{EvaluationRecord, Rule};
pub use traits::{EvaluationLog, RuleRepository};
