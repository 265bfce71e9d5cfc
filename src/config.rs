use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::time::DEFAULT_QUIET_WINDOW_MS;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "TAPLINE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which categories go through the package filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterScope {
    /// Every processed category is filtered.
    #[default]
    All,
    /// Only debounced categories are filtered; global ones always pass.
    ScopedOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Origin inclusion patterns, optionally `*`-suffixed. Absent means all origins.
    #[serde(alias = "accessibility.includeOnly.packageNames")]
    pub include_only: Option<Vec<String>>,
    pub filter_scope: FilterScope,
    pub scroll_quiet_window_ms: u64,
    /// Reactor input queue depth.
    pub queue_capacity: usize,
    /// Channel kernel buffer depth.
    pub kernel_buffer: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            include_only: None,
            filter_scope: FilterScope::All,
            scroll_quiet_window_ms: DEFAULT_QUIET_WINDOW_MS,
            queue_capacity: 256,
            kernel_buffer: 1024,
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Loads from `TAPLINE_CONFIG` if set, defaults otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid("queue_capacity must be greater than 0".to_string()));
        }
        if self.kernel_buffer == 0 {
            return Err(ConfigError::Invalid("kernel_buffer must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn quiet_window(&self) -> Duration {
        Duration::from_millis(self.scroll_quiet_window_ms)
    }
}
