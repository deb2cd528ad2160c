//! Error types for parameter and document-map files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or querying run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read.
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// A line does not follow the file's format.
    #[error("syntax error in {path} at line {line}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A required parameter is absent.
    #[error("missing required parameter {key}")]
    Missing { key: String },

    /// A parameter is present but its value has the wrong shape.
    #[error("parameter {key} has invalid value {value:?}: expected {expected}")]
    Invalid {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A parameter names a path that does not exist or has the wrong kind.
    #[error("parameter {key} points to {path}, which is not {expected}")]
    BadPath {
        key: String,
        path: PathBuf,
        expected: &'static str,
    },

    /// A directory parameter could not be created.
    #[error("failed to create directory {path} for parameter {key}: {message}")]
    CreateDir {
        key: String,
        path: PathBuf,
        message: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
