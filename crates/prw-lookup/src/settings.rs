//! Lookup settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Tuning for remote option lookups.
///
/// Stored in TOML alongside the rest of the wizard settings:
///
/// ```toml
/// debounce_ms = 500
/// min_query_len = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Quiet interval in milliseconds.
    ///
    /// A keystroke re-arms the timer; only the last query of a burst is sent.
    pub debounce_ms: u64,

    /// Minimum trimmed query length before a search is dispatched.
    pub min_query_len: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            min_query_len: 0,
        }
    }
}

impl LookupSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Whether `query` is long enough to be sent to the remote source.
    pub fn accepts_query(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_len
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| LookupError::Config { source })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
