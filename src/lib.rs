//! Response model and ontology checks for event-argument extraction output.
//!
//! This crate holds the pieces shared by the QA tools:
//!
//! - [`response`] - responses, answer keys and system output for one document
//! - [`span`] - inclusive character-offset spans
//! - [`offsets`] - resolving spans against original document text
//! - [`ontology`] - type to value-set mappings loaded from ontology files
//! - [`role_validator`] - event type and role conformance checks
//! - [`scoring`] - global identities for coreference-scoring participants
//! - [`store`] - read-only per-document stores
//! - [`errors`] - the shared error type
//!
//! ## Example
//!
//! ```
//! use eal_qa::{CharOffsetSpan, OffsetResolver};
//!
//! let resolver = OffsetResolver::new("doc1", "The rebels attacked.");
//! let cas = resolver.resolve(CharOffsetSpan::from_inclusive(4, 9)).unwrap();
//! assert_eq!(cas, "rebels");
//! ```

pub mod errors;
pub mod offsets;
pub mod ontology;
pub mod response;
pub mod role_validator;
pub mod scoring;
pub mod span;
pub mod store;

pub use errors::{QaError, QaResult};
pub use offsets::{resolve, OffsetResolver};
pub use ontology::Ontology;
pub use response::{AnswerKey, OffsetString, Realis, Response, SystemOutput};
pub use role_validator::{is_always_valid_role, validate_response, ALWAYS_VALID_ROLES};
pub use scoring::{global_id, ScoringCorefId, ScoringEntityType};
pub use span::CharOffsetSpan;
pub use store::{AnnotationStore, DirectoryStore, InMemoryStore, SystemOutputStore};
