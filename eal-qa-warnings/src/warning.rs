//! Warnings and the response-to-warnings mapping.

use eal_qa::Response;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which rule produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// The CAS looks like two entities joined by a conjunction.
    Conjunction,
    /// The CAS partially overlaps another response's CAS.
    Overlap,
    /// Two responses share a CAS but their types or roles disagree.
    ConflictingType,
}

impl WarningKind {
    pub fn name(&self) -> &'static str {
        match self {
            WarningKind::Conjunction => "Conjunction",
            WarningKind::Overlap => "Overlap",
            WarningKind::ConflictingType => "ConflictingType",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A flagged anomaly attached to one response.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Human-readable explanation.
    pub explanation: String,
}

impl Warning {
    pub fn new(kind: WarningKind, explanation: impl Into<String>) -> Self {
        Self {
            kind,
            explanation: explanation.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.explanation)
    }
}

/// Response to set-of-warnings mapping.
///
/// Ordered maps and sets keep iteration, equality and rendering independent
/// of the order in which warnings were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningMap {
    entries: BTreeMap<Response, BTreeSet<Warning>>,
}

impl WarningMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, response: &Response, warning: Warning) {
        self.entries
            .entry(response.clone())
            .or_default()
            .insert(warning);
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: WarningMap) {
        for (response, warnings) in other.entries {
            self.entries.entry(response).or_default().extend(warnings);
        }
    }

    /// Warnings for `response`; empty when it has none.
    pub fn get(&self, response: &Response) -> impl Iterator<Item = &Warning> {
        self.entries.get(response).into_iter().flatten()
    }

    pub fn contains(&self, response: &Response) -> bool {
        self.entries.contains_key(response)
    }

    /// Number of responses carrying at least one warning.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of warnings across all responses.
    pub fn warning_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Response, &BTreeSet<Warning>)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eal_qa::{CharOffsetSpan, OffsetString, Realis};

    fn response(cas: &str) -> Response {
        let span = CharOffsetSpan::from_inclusive(0, cas.encode_utf16().count() - 1);
        Response::new(
            "doc1",
            "Life.Die",
            "Victim",
            Realis::Actual,
            OffsetString::new(cas, span),
            vec![span],
            vec![],
            span,
        )
    }

    #[test]
    fn merge_unions_per_response() {
        let r = response("the mayor");
        let mut a = WarningMap::new();
        a.add(&r, Warning::new(WarningKind::Overlap, "x"));
        let mut b = WarningMap::new();
        b.add(&r, Warning::new(WarningKind::Conjunction, "y"));
        b.add(&r, Warning::new(WarningKind::Overlap, "x"));

        a.merge(b);
        assert_eq!(a.len(), 1);
        assert_eq!(a.warning_count(), 2);
        let kinds: Vec<_> = a.get(&r).map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::Conjunction, WarningKind::Overlap]);
    }

    #[test]
    fn missing_response_has_no_warnings() {
        let map = WarningMap::new();
        assert_eq!(map.get(&response("nobody")).count(), 0);
    }
}
