//! Configuration for the coordinator.

use serde::{Deserialize, Serialize};

/// Which pipeline a request runs through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Full plan-and-route pipeline
    #[default]
    Multi,
    /// Single-agent chat/math responder
    Simple,
}

/// Main coordinator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Mode used when a request does not specify one
    #[serde(default)]
    pub default_mode: RunMode,

    /// Maximum accepted query length in bytes; longer input is rejected
    /// at the API boundary
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
}

fn default_max_query_len() -> usize {
    4096
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            default_mode: RunMode::Multi,
            max_query_len: default_max_query_len(),
        }
    }
}

impl CoordinatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
