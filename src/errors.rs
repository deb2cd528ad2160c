//! Error types for the response model.
//!
//! Every check in this crate fails locally with a [`QaError`]; callers decide
//! whether a failure aborts a run or is merely recorded.

use std::path::PathBuf;

use thiserror::Error;

use crate::span::CharOffsetSpan;

/// Errors raised while reading, resolving or checking responses.
#[derive(Debug, Error)]
pub enum QaError {
    /// A span does not fit inside its document's text.
    #[error(
        "offsets {span} out of bounds for response in document {doc_id}; document is {doc_len} UTF-16 code units long"
    )]
    OutOfBoundsOffset {
        span: CharOffsetSpan,
        doc_id: String,
        doc_len: usize,
    },

    /// The response's event type is absent from the ontology.
    #[error("invalid event type {event_type} used in document {doc_id}; valid event types are: {}", .valid_types.join(", "))]
    InvalidEventType {
        doc_id: String,
        event_type: String,
        valid_types: Vec<String>,
    },

    /// The response's role is not valid for its event type.
    #[error("invalid role {role} for event type {event_type} used in document {doc_id}; valid roles for this event are {}", .valid_roles.join(", "))]
    InvalidRole {
        doc_id: String,
        event_type: String,
        role: String,
        valid_roles: Vec<String>,
    },

    /// The store could not be opened or could not list its documents.
    #[error("failed to open store {path}: {message}")]
    StoreOpenFailure { path: PathBuf, message: String },

    /// A single document in an open store could not be read.
    #[error("failed to read document {doc_id} (line {line}): {message}")]
    StoreReadFailure {
        doc_id: String,
        line: usize,
        message: String,
    },

    /// An ontology file is not a line-oriented key to value-set mapping.
    #[error("failed to parse ontology {path} at line {line}: {message}")]
    OntologyParseFailure {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Responses from different documents were grouped into one document's set.
    #[error("response for document {found} found in output for document {expected}")]
    MixedDocuments { expected: String, found: String },

    /// A scoring identity was constructed with an empty within-type ID.
    #[error("within-type ID for {entity_type} scoring identity may not be empty")]
    EmptyWithinTypeId { entity_type: String },

    /// A string could not be parsed as a scoring global ID.
    #[error("malformed scoring global ID: {0:?}")]
    MalformedGlobalId(String),

    /// No original text is mapped for a document that must be resolved.
    #[error("no original text found for document ID {doc_id} in supplied mapping")]
    MissingDocumentText { doc_id: String },

    /// Underlying I/O failure with the file that caused it.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for response-model operations.
pub type QaResult<T> = Result<T, QaError>;
