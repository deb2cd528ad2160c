//! Event-argument responses and per-document response sets.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::{QaError, QaResult};
use crate::span::CharOffsetSpan;

/// Whether an event mention denotes an actual occurrence, a generic reference or something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Realis {
    Actual,
    Generic,
    Other,
}

impl Realis {
    pub fn name(&self) -> &'static str {
        match self {
            Realis::Actual => "Actual",
            Realis::Generic => "Generic",
            Realis::Other => "Other",
        }
    }
}

impl fmt::Display for Realis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Realis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Actual" => Ok(Realis::Actual),
            "Generic" => Ok(Realis::Generic),
            "Other" => Ok(Realis::Other),
            other => Err(format!("unknown realis {:?}", other)),
        }
    }
}

/// A string paired with the span it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OffsetString {
    pub string: String,
    pub span: CharOffsetSpan,
}

impl OffsetString {
    pub fn new(string: impl Into<String>, span: CharOffsetSpan) -> Self {
        Self {
            string: string.into(),
            span,
        }
    }
}

/// One extracted event-argument annotation.
///
/// Responses are built once when read from a store and never mutated; the
/// derived ordering and hash make them usable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Response {
    doc_id: String,
    event_type: String,
    role: String,
    realis: Realis,
    canonical_argument: OffsetString,
    predicate_justifications: Vec<CharOffsetSpan>,
    additional_argument_justifications: Vec<CharOffsetSpan>,
    base_filler: CharOffsetSpan,
}

impl Response {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        doc_id: impl Into<String>,
        event_type: impl Into<String>,
        role: impl Into<String>,
        realis: Realis,
        canonical_argument: OffsetString,
        predicate_justifications: Vec<CharOffsetSpan>,
        additional_argument_justifications: Vec<CharOffsetSpan>,
        base_filler: CharOffsetSpan,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            event_type: event_type.into(),
            role: role.into(),
            realis,
            canonical_argument,
            predicate_justifications,
            additional_argument_justifications,
            base_filler,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn realis(&self) -> Realis {
        self.realis
    }

    pub fn canonical_argument(&self) -> &OffsetString {
        &self.canonical_argument
    }

    pub fn predicate_justifications(&self) -> &[CharOffsetSpan] {
        &self.predicate_justifications
    }

    pub fn additional_argument_justifications(&self) -> &[CharOffsetSpan] {
        &self.additional_argument_justifications
    }

    pub fn base_filler(&self) -> CharOffsetSpan {
        self.base_filler
    }

    /// A copy of this response with a different realis.
    pub fn with_realis(&self, realis: Realis) -> Self {
        Self {
            realis,
            ..self.clone()
        }
    }

    /// `type-role:realis - CAS`, the one-line form used in reports.
    pub fn readable_trfr(&self) -> String {
        format!(
            "{}-{}:{} - {}",
            self.event_type,
            self.role,
            self.realis.name(),
            self.canonical_argument.string
        )
    }

    /// Report ordering: event type, role, base filler, then CAS string.
    pub fn report_order(a: &Response, b: &Response) -> Ordering {
        a.event_type
            .cmp(&b.event_type)
            .then_with(|| a.role.cmp(&b.role))
            .then_with(|| a.base_filler.cmp(&b.base_filler))
            .then_with(|| a.canonical_argument.string.cmp(&b.canonical_argument.string))
            .then_with(|| a.cmp(b))
    }
}

fn check_same_document(doc_id: &str, responses: &[Response]) -> QaResult<()> {
    match responses.iter().find(|r| r.doc_id != doc_id) {
        Some(stray) => Err(QaError::MixedDocuments {
            expected: doc_id.to_string(),
            found: stray.doc_id.clone(),
        }),
        None => Ok(()),
    }
}

/// A system's responses for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemOutput {
    doc_id: String,
    responses: Vec<Response>,
}

impl SystemOutput {
    /// Fails with [`QaError::MixedDocuments`] if any response belongs to another document.
    pub fn new(doc_id: impl Into<String>, responses: Vec<Response>) -> QaResult<Self> {
        let doc_id = doc_id.into();
        check_same_document(&doc_id, &responses)?;
        Ok(Self { doc_id, responses })
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// The reference annotation set for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    doc_id: String,
    responses: Vec<Response>,
}

impl AnswerKey {
    pub fn new(doc_id: impl Into<String>, responses: Vec<Response>) -> QaResult<Self> {
        let doc_id = doc_id.into();
        check_same_document(&doc_id, &responses)?;
        Ok(Self { doc_id, responses })
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Normalizes every response's realis to [`Realis::Actual`].
    ///
    /// Responses that collapse onto each other after normalization are kept once.
    pub fn with_all_realis_actual(&self) -> AnswerKey {
        let mut responses: Vec<Response> = self
            .responses
            .iter()
            .map(|r| r.with_realis(Realis::Actual))
            .collect();
        responses.sort();
        responses.dedup();
        AnswerKey {
            doc_id: self.doc_id.clone(),
            responses,
        }
    }
}
