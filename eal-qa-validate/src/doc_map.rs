//! Mapping from document IDs to their original text.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eal_qa::{QaError, QaResult};

use crate::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextSource {
    File(PathBuf),
    Inline(String),
}

/// Where to find each document's original text.
///
/// Files are read only when a document's text is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTextMap {
    sources: BTreeMap<String, TextSource>,
}

impl DocumentTextMap {
    /// Load a file of tab-separated `docID<TAB>path` lines.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut sources = BTreeMap::new();
        for (line_idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            match parts.as_slice() {
                [doc_id, file] if !doc_id.trim().is_empty() && !file.trim().is_empty() => {
                    sources.insert(
                        doc_id.trim().to_string(),
                        TextSource::File(PathBuf::from(file.trim())),
                    );
                }
                _ => {
                    return Err(ConfigError::Syntax {
                        path: path.to_path_buf(),
                        line: line_idx + 1,
                        message: "expected docID<TAB>path".to_string(),
                    })
                }
            }
        }
        Ok(Self { sources })
    }

    /// Build from document texts held in memory.
    pub fn from_texts<K: Into<String>, V: Into<String>>(
        texts: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            sources: texts
                .into_iter()
                .map(|(k, v)| (k.into(), TextSource::Inline(v.into())))
                .collect(),
        }
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.sources.contains_key(doc_id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Original text of `doc_id`, read from disk if it is file-backed.
    pub fn text(&self, doc_id: &str) -> QaResult<String> {
        match self.sources.get(doc_id) {
            Some(TextSource::Inline(text)) => Ok(text.clone()),
            Some(TextSource::File(path)) => fs::read_to_string(path).map_err(|e| QaError::Io {
                path: path.clone(),
                source: e,
            }),
            None => Err(QaError::MissingDocumentText {
                doc_id: doc_id.to_string(),
            }),
        }
    }
}
