//! Inclusive character-offset spans.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A span of UTF-16 code units in a document, both ends inclusive.
///
/// Construction does not check `start <= end`; a reversed span is representable
/// so that resolution can report it instead of failing earlier with less context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharOffsetSpan {
    start_inclusive: usize,
    end_inclusive: usize,
}

impl CharOffsetSpan {
    pub fn from_inclusive(start_inclusive: usize, end_inclusive: usize) -> Self {
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    pub fn start_inclusive(&self) -> usize {
        self.start_inclusive
    }

    pub fn end_inclusive(&self) -> usize {
        self.end_inclusive
    }

    /// Whether the span runs forwards (`start <= end`).
    pub fn is_well_formed(&self) -> bool {
        self.start_inclusive <= self.end_inclusive
    }

    /// True when both spans share at least one character.
    pub fn overlaps(&self, other: &CharOffsetSpan) -> bool {
        self.is_well_formed()
            && other.is_well_formed()
            && self.start_inclusive <= other.end_inclusive
            && other.start_inclusive <= self.end_inclusive
    }
}

impl fmt::Display for CharOffsetSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.start_inclusive, self.end_inclusive)
    }
}

/// Error from parsing a `start-end` offset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanParseError(pub String);

impl fmt::Display for SpanParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid offset span {:?}: expected start-end", self.0)
    }
}

impl std::error::Error for SpanParseError {}

impl FromStr for CharOffsetSpan {
    type Err = SpanParseError;

    /// Parses the store notation `start-end`, e.g. `12-20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SpanParseError(s.to_string()))?;
        let start = start
            .trim()
            .parse()
            .map_err(|_| SpanParseError(s.to_string()))?;
        let end = end
            .trim()
            .parse()
            .map_err(|_| SpanParseError(s.to_string()))?;
        Ok(Self::from_inclusive(start, end))
    }
}

/// Parses a comma-separated list of spans. `NIL` and the empty string mean no spans.
pub fn parse_span_list(s: &str) -> Result<Vec<CharOffsetSpan>, SpanParseError> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("NIL") {
        return Ok(Vec::new());
    }
    s.split(',').map(str::parse).collect()
}
