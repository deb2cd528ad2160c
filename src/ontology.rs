//! Type-to-value-set mappings loaded from plain-text ontology files.
//!
//! The file format is line oriented: the first whitespace-delimited token is
//! the key and the remaining tokens are its values.
//!
//! ```text
//! # event type      valid roles
//! Conflict.Attack   Attacker  Instrument  Target
//! Life.Die          Agent     Instrument  Victim
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Repeated keys merge.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::errors::{QaError, QaResult};

/// A mapping from a type token to the set of strings valid for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, values)` pairs, merging repeated keys.
    pub fn from_pairs<K, V, I>(pairs: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = V>,
    {
        let mut ontology = Self::new();
        for (key, values) in pairs {
            ontology
                .entries
                .entry(key.into())
                .or_default()
                .extend(values.into_iter().map(Into::into));
        }
        ontology
    }

    /// Load an ontology file from disk.
    pub fn load(path: &Path) -> QaResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| QaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse ontology text; `origin` is only used in error messages.
    pub fn parse(origin: &Path, content: &str) -> QaResult<Self> {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut tokens = trimmed.split_whitespace();
            // non-empty after trim, so there is a first token
            let key = tokens.next().unwrap_or_default();
            let values: Vec<&str> = tokens.collect();
            if values.is_empty() {
                return Err(QaError::OntologyParseFailure {
                    path: origin.to_path_buf(),
                    line: line_idx + 1,
                    message: format!("key {:?} has no values", key),
                });
            }
            entries
                .entry(key.to_string())
                .or_default()
                .extend(values.into_iter().map(str::to_string));
        }
        Ok(Self { entries })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Values for `key`, or `None` when the key is unknown.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    /// Whether `value` is listed under `key`.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.entries
            .get(key)
            .map_or(false, |values| values.contains(value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
