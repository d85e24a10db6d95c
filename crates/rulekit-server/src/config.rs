//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repository backend for rules and evaluation records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RepositoryType {
    /// Process memory, lost on restart
    Memory,
    /// YAML rule files and a JSON-lines evaluation log under `path`
    FileSystem {
        /// Root directory (default: "data")
        #[serde(default = "default_repository_path")]
        path: PathBuf,
    },
}

fn default_repository_path() -> PathBuf {
    PathBuf::from("data")
}

impl Default for RepositoryType {
    fn default() -> Self {
        RepositoryType::FileSystem {
            path: default_repository_path(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Where rules and evaluation records are stored
    pub repository: RepositoryType,

    /// Log level for the rulekit crates, used when `RUST_LOG` is unset
    pub log_level: String,

    pub log_format: LogFormat,

    /// Persist an evaluation record for every successful evaluation
    pub record_evaluations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            repository: RepositoryType::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            record_evaluations: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("RULEKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                // Use default config if the sources cannot be read
                eprintln!("Failed to read configuration ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Tracing filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!(
            "rulekit_server={0},rulekit_runtime={0},rulekit_repository={0},rulekit_parser={0},tower_http=debug",
            self.log_level
        )
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
