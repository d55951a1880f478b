use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by configuration loading and the terminal runtime.
#[derive(Debug, Error)]
pub enum SnakeError {
    /// A fruit name outside the closed category set.
    #[error("unknown fruit category '{0}'")]
    InvalidCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
