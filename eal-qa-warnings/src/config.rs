//! Rule configuration loaded from TOML.
//!
//! ```toml
//! [conjunction]
//! markers = ["and", "or", "&"]
//!
//! [overlap]
//! ignore_same_string = true
//! same_event_type_only = false
//!
//! [conflicting_type]
//! arg_file = "data/2015.arguments.txt"
//! role_file = "data/2015.types.txt"
//! ```
//!
//! Every section is optional. A section with `enabled = false` drops its rule.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::RuleSet;
use crate::errors::RuleConfigError;
use crate::rules::{ConflictingTypeRule, ConjunctionRule, OverlapRule, DEFAULT_CONJUNCTION_MARKERS};

fn enabled() -> bool {
    true
}

fn default_markers() -> Vec<String> {
    DEFAULT_CONJUNCTION_MARKERS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjunctionConfig {
    #[serde(default = "enabled")]
    pub enabled: bool,
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

impl Default for ConjunctionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            markers: default_markers(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapConfig {
    #[serde(default = "enabled")]
    pub enabled: bool,
    #[serde(default = "enabled")]
    pub ignore_same_string: bool,
    #[serde(default)]
    pub same_event_type_only: bool,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_same_string: true,
            same_event_type_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingTypeConfig {
    /// Role to valid argument types.
    pub arg_file: PathBuf,
    /// Event type to valid roles.
    pub role_file: PathBuf,
}

/// Configuration for the whole rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub conjunction: ConjunctionConfig,
    #[serde(default)]
    pub overlap: OverlapConfig,
    #[serde(default)]
    pub conflicting_type: Option<ConflictingTypeConfig>,
}

impl RuleConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, RuleConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| RuleConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| RuleConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Point the conflicting-type rule at the given ontology files.
    pub fn with_conflicting_type(mut self, arg_file: PathBuf, role_file: PathBuf) -> Self {
        self.conflicting_type = Some(ConflictingTypeConfig {
            arg_file,
            role_file,
        });
        self
    }

    /// Build the rules. Ontology load failures are fatal.
    pub fn build(&self) -> Result<RuleSet, RuleConfigError> {
        let mut rules = Vec::new();
        if self.conjunction.enabled {
            rules.push(ConjunctionRule::new(&self.conjunction.markers).into());
        }
        if self.overlap.enabled {
            rules.push(
                OverlapRule {
                    ignore_same_string: self.overlap.ignore_same_string,
                    same_event_type_only: self.overlap.same_event_type_only,
                }
                .into(),
            );
        }
        if let Some(ct) = &self.conflicting_type {
            rules.push(ConflictingTypeRule::load(&ct.arg_file, &ct.role_file)?.into());
        }
        Ok(RuleSet::new(rules))
    }
}
