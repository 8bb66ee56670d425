//! User configuration stored in `{data_dir}/config.yaml`
//!
//! Every field is optional; a missing file means all defaults. Command-line
//! flags take precedence over what is configured here.

use std::path::{Path, PathBuf};

use ledgerview_core::categorize::{Categorizer, CategoryRule, FALLBACK_CATEGORY, default_rules};
use serde::{Deserialize, Serialize};

/// Number of transactions the dashboard loads, newest first
pub const DEFAULT_LIMIT: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum number of transactions to aggregate
    pub limit: usize,
    /// Label for transactions no categorizer rule matches
    pub fallback_category: String,
    /// Categorizer rules; the built-in set when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CategoryRule>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            fallback_category: FALLBACK_CATEGORY.to_string(),
            rules: None,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), limit = config.limit, "Loaded config");
        Ok(config)
    }

    pub fn categorizer(&self) -> Categorizer {
        let rules = self.rules.clone().unwrap_or_else(default_rules);
        Categorizer::new(rules, self.fallback_category.clone())
    }
}
