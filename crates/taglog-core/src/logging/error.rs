//! Logging error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a sink or emitting a line
#[derive(Error, Debug)]
pub enum LogError {
    /// Invalid sink arguments or settings (e.g. File sink without a path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The target file could not be opened or created for append
    #[error("Cannot open log file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already established sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be converted for logging
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LogError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a file access error
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
