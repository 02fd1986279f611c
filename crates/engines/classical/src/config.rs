//! Engine settings read from a TOML file.

use std::path::Path;
use std::time::Duration;

use chess_core::{MoveOrdering, SearchLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for the classical engine. Missing keys take their defaults.
///
/// ```toml
/// depth = 4
/// quiescence_budget_ms = 1000
/// use_ordering = true
/// diagnostics = false
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u8,
    /// Total quiescence allowance per search, in milliseconds
    pub quiescence_budget_ms: u64,
    pub use_ordering: bool,
    pub diagnostics: bool,
    /// Filter directive for the log subscriber, e.g. `info` or `classical_engine=debug`
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            quiescence_budget_ms: 1000,
            use_ordering: true,
            diagnostics: false,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_limits(&self) -> SearchLimits {
        let ordering = if self.use_ordering {
            MoveOrdering::Heuristic
        } else {
            MoveOrdering::Shuffle
        };
        SearchLimits::depth(self.depth)
            .with_quiescence(Duration::from_millis(self.quiescence_budget_ms))
            .with_ordering(ordering)
            .with_diagnostics(self.diagnostics)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
