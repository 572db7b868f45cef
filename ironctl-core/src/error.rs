//! Structured error types for ironctl-core.
//!
//! The dashboard model itself cannot fail; these cover the edges around it
//! (config files, serialization, writing rendered output).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ironctl-core operations
#[derive(Error, Debug)]
pub enum IronError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML or does not match the schema
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration values are inconsistent
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for ironctl-core operations
pub type Result<T> = std::result::Result<T, IronError>;

impl IronError {
    /// Create a TOML parse error for a config file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
