//! Lookup error types.
//!
//! Lookup failures never reach the UI as errors: the loaders collapse them into
//! an empty result. These types exist for the collaborator boundary and for
//! settings loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Lookup operation error.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The remote search or cascade call rejected.
    #[error("remote lookup failed: {message}")]
    Remote { message: String },

    /// A debounced lookup was created outside a tokio runtime.
    #[error("debounced lookups require a running tokio runtime")]
    NoRuntime,

    /// Settings file could not be parsed.
    #[error("invalid lookup settings")]
    Config {
        #[source]
        source: toml::de::Error,
    },

    /// Settings file could not be read.
    #[error("failed to read lookup settings: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LookupError {
    /// Wrap a collaborator failure (HTTP status, timeout, decode error).
    pub fn remote(message: impl fmt::Display) -> Self {
        Self::Remote {
            message: message.to_string(),
        }
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
