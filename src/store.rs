//! Read-only access to per-document response sets.
//!
//! Stores are keyed by document ID. [`DirectoryStore`] reads one file per
//! document in the tab-separated response format:
//!
//! ```text
//! id  docID  type  role  CAS  CASOffsets  PJOffsets  BFOffsets  AJOffsets  realis  [confidence]
//! ```
//!
//! Offsets are inclusive `start-end` pairs; justification columns hold
//! comma-separated lists and `NIL` stands for an empty additional-argument list.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{QaError, QaResult};
use crate::response::{AnswerKey, OffsetString, Realis, Response, SystemOutput};
use crate::span::{parse_span_list, CharOffsetSpan};

/// A store of system output, one [`SystemOutput`] per document.
pub trait SystemOutputStore {
    /// Every document ID the store holds.
    fn doc_ids(&self) -> QaResult<BTreeSet<String>>;

    fn read(&self, doc_id: &str) -> QaResult<SystemOutput>;

    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// A store of annotator-produced answer keys.
pub trait AnnotationStore {
    fn doc_ids(&self) -> QaResult<BTreeSet<String>>;

    fn read(&self, doc_id: &str) -> QaResult<AnswerKey>;

    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// Store held entirely in memory, mostly for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: BTreeMap<String, Vec<Response>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; responses must all carry `doc_id`.
    pub fn with_document(mut self, doc_id: impl Into<String>, responses: Vec<Response>) -> Self {
        self.documents.insert(doc_id.into(), responses);
        self
    }

    fn responses(&self, doc_id: &str) -> QaResult<Vec<Response>> {
        self.documents
            .get(doc_id)
            .cloned()
            .ok_or_else(|| QaError::StoreReadFailure {
                doc_id: doc_id.to_string(),
                line: 0,
                message: "no such document in store".to_string(),
            })
    }
}

impl SystemOutputStore for InMemoryStore {
    fn doc_ids(&self) -> QaResult<BTreeSet<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn read(&self, doc_id: &str) -> QaResult<SystemOutput> {
        SystemOutput::new(doc_id, self.responses(doc_id)?)
    }
}

impl AnnotationStore for InMemoryStore {
    fn doc_ids(&self) -> QaResult<BTreeSet<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn read(&self, doc_id: &str) -> QaResult<AnswerKey> {
        AnswerKey::new(doc_id, self.responses(doc_id)?)
    }
}

/// A directory holding one response file per document, named by document ID.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Fails with [`QaError::StoreOpenFailure`] if `root` is not a readable directory.
    pub fn open(root: &Path) -> QaResult<Self> {
        if !root.is_dir() {
            return Err(QaError::StoreOpenFailure {
                path: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }
        debug!(store = %root.display(), "opened directory store");
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn list_doc_ids(&self) -> QaResult<BTreeSet<String>> {
        let open_failure = |e: std::io::Error| QaError::StoreOpenFailure {
            path: self.root.clone(),
            message: e.to_string(),
        };
        let mut doc_ids = BTreeSet::new();
        for entry in fs::read_dir(&self.root).map_err(open_failure)? {
            let entry = entry.map_err(open_failure)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            doc_ids.insert(name.into_owned());
        }
        Ok(doc_ids)
    }

    fn read_responses(&self, doc_id: &str) -> QaResult<Vec<Response>> {
        let path = self.root.join(doc_id);
        let content = fs::read_to_string(&path).map_err(|e| QaError::StoreReadFailure {
            doc_id: doc_id.to_string(),
            line: 0,
            message: format!("{}: {}", path.display(), e),
        })?;
        parse_responses(doc_id, &content)
    }
}

impl SystemOutputStore for DirectoryStore {
    fn doc_ids(&self) -> QaResult<BTreeSet<String>> {
        self.list_doc_ids()
    }

    fn read(&self, doc_id: &str) -> QaResult<SystemOutput> {
        SystemOutput::new(doc_id, self.read_responses(doc_id)?)
    }
}

impl AnnotationStore for DirectoryStore {
    fn doc_ids(&self) -> QaResult<BTreeSet<String>> {
        self.list_doc_ids()
    }

    fn read(&self, doc_id: &str) -> QaResult<AnswerKey> {
        AnswerKey::new(doc_id, self.read_responses(doc_id)?)
    }
}

/// Parse a document's response file. Blank lines and `#` comments are skipped.
pub fn parse_responses(doc_id: &str, content: &str) -> QaResult<Vec<Response>> {
    let mut responses = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let response = parse_response_line(line).map_err(|message| QaError::StoreReadFailure {
            doc_id: doc_id.to_string(),
            line: line_idx + 1,
            message,
        })?;
        responses.push(response);
    }
    Ok(responses)
}

/// Parse one tab-separated response line.
pub fn parse_response_line(line: &str) -> Result<Response, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 10 && fields.len() != 11 {
        return Err(format!(
            "expected 10 or 11 tab-separated fields, found {}",
            fields.len()
        ));
    }
    let span = |s: &str| s.parse::<CharOffsetSpan>().map_err(|e| e.to_string());
    let spans = |s: &str| parse_span_list(s).map_err(|e| e.to_string());

    let predicate_justifications = spans(fields[6])?;
    if predicate_justifications.is_empty() {
        return Err("at least one predicate justification is required".to_string());
    }
    let realis: Realis = fields[9].parse()?;

    Ok(Response::new(
        fields[1],
        fields[2],
        fields[3],
        realis,
        OffsetString::new(fields[4], span(fields[5])?),
        predicate_justifications,
        spans(fields[8])?,
        span(fields[7])?,
    ))
}
