//! Error types for rule configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a rule set from being built.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read rule config {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The configuration file is not valid TOML for a rule set.
    #[error("failed to parse rule config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// An ontology referenced by the configuration could not be loaded.
    #[error(transparent)]
    Ontology(#[from] eal_qa::QaError),
}
