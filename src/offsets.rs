//! Resolving character-offset spans against a document's original text.
//!
//! Offsets index UTF-16 code units, the unit annotation tools and system
//! output count in. Text in the Basic Multilingual Plane has one unit per
//! character; a character outside it (most emoji, rare CJK) takes two.

use std::borrow::Cow;

use crate::errors::{QaError, QaResult};
use crate::span::CharOffsetSpan;

/// Resolves inclusive UTF-16 offset spans against one document's text.
///
/// The unit-to-byte table is built once so a document's spans can be resolved
/// without rescanning.
#[derive(Debug, Clone)]
pub struct OffsetResolver<'a> {
    doc_id: &'a str,
    text: &'a str,
    /// Byte offset at every UTF-16 unit index, plus `text.len()` as a
    /// sentinel. `None` marks the second unit of a surrogate pair.
    unit_starts: Vec<Option<usize>>,
}

impl<'a> OffsetResolver<'a> {
    pub fn new(doc_id: &'a str, text: &'a str) -> Self {
        let mut unit_starts = Vec::with_capacity(text.len() + 1);
        for (i, c) in text.char_indices() {
            unit_starts.push(Some(i));
            if c.len_utf16() == 2 {
                unit_starts.push(None);
            }
        }
        unit_starts.push(Some(text.len()));
        Self {
            doc_id,
            text,
            unit_starts,
        }
    }

    pub fn doc_id(&self) -> &str {
        self.doc_id
    }

    /// Length of the document in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.unit_starts.len() - 1
    }

    /// Returns units `start..=end` of the text.
    ///
    /// Fails with [`QaError::OutOfBoundsOffset`] when `end` is past the last
    /// unit or the span runs backwards. A span that cuts a surrogate pair is
    /// decoded lossily, so the cut half becomes U+FFFD.
    pub fn resolve(&self, span: CharOffsetSpan) -> QaResult<Cow<'a, str>> {
        let start = span.start_inclusive();
        let end = span.end_inclusive();
        if !span.is_well_formed() || end >= self.len_utf16() {
            return Err(QaError::OutOfBoundsOffset {
                span,
                doc_id: self.doc_id.to_string(),
                doc_len: self.len_utf16(),
            });
        }
        match (self.unit_starts[start], self.unit_starts[end + 1]) {
            (Some(from), Some(to)) => Ok(Cow::Borrowed(&self.text[from..to])),
            _ => {
                let units: Vec<u16> = self
                    .text
                    .encode_utf16()
                    .skip(start)
                    .take(end - start + 1)
                    .collect();
                Ok(Cow::Owned(String::from_utf16_lossy(&units)))
            }
        }
    }
}

/// One-shot form of [`OffsetResolver::resolve`].
pub fn resolve(span: CharOffsetSpan, doc_id: &str, text: &str) -> QaResult<String> {
    OffsetResolver::new(doc_id, text)
        .resolve(span)
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_inclusive_span() {
        let resolver = OffsetResolver::new("doc1", "The rebels attacked.");
        let span = CharOffsetSpan::from_inclusive(4, 9);
        assert_eq!(resolver.resolve(span).unwrap(), "rebels");
    }

    #[test]
    fn counts_utf16_units_not_bytes() {
        let text = "Café Zoë burned";
        let resolver = OffsetResolver::new("doc1", text);
        assert_eq!(resolver.len_utf16(), 15);
        assert_eq!(
            resolver
                .resolve(CharOffsetSpan::from_inclusive(5, 7))
                .unwrap(),
            "Zoë"
        );
    }

    #[test]
    fn characters_outside_the_bmp_take_two_units() {
        let resolver = OffsetResolver::new("doc1", "😀 rebels");
        assert_eq!(resolver.len_utf16(), 9);
        assert_eq!(
            resolver
                .resolve(CharOffsetSpan::from_inclusive(3, 8))
                .unwrap(),
            "rebels"
        );
        assert_eq!(
            resolver
                .resolve(CharOffsetSpan::from_inclusive(0, 1))
                .unwrap(),
            "😀"
        );
        match resolver.resolve(CharOffsetSpan::from_inclusive(3, 9)) {
            Err(QaError::OutOfBoundsOffset { doc_len, .. }) => assert_eq!(doc_len, 9),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn cutting_a_surrogate_pair_decodes_lossily() {
        let resolver = OffsetResolver::new("doc1", "a😀b");
        let resolved = resolver
            .resolve(CharOffsetSpan::from_inclusive(2, 3))
            .unwrap();
        assert_eq!(resolved, "\u{FFFD}b");
    }

    #[test]
    fn reports_span_document_and_length() {
        let resolver = OffsetResolver::new("doc7", "short");
        let err = resolver
            .resolve(CharOffsetSpan::from_inclusive(2, 5))
            .unwrap_err();
        match err {
            QaError::OutOfBoundsOffset {
                span,
                doc_id,
                doc_len,
            } => {
                assert_eq!(span, CharOffsetSpan::from_inclusive(2, 5));
                assert_eq!(doc_id, "doc7");
                assert_eq!(doc_len, 5);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_reversed_span() {
        let resolver = OffsetResolver::new("doc1", "some text");
        assert!(matches!(
            resolver.resolve(CharOffsetSpan::from_inclusive(4, 2)),
            Err(QaError::OutOfBoundsOffset { .. })
        ));
    }

    #[test]
    fn empty_text_has_no_valid_spans() {
        let resolver = OffsetResolver::new("doc1", "");
        assert!(resolver
            .resolve(CharOffsetSpan::from_inclusive(0, 0))
            .is_err());
    }

    proptest! {
        #[test]
        fn each_character_resolves_from_its_utf16_range(text in "\\PC{1,40}", pick in 0usize..40) {
            let chars: Vec<char> = text.chars().collect();
            let i = pick % chars.len();
            let start: usize = chars[..i].iter().map(|c| c.len_utf16()).sum();
            let end = start + chars[i].len_utf16() - 1;
            let resolved = resolve(CharOffsetSpan::from_inclusive(start, end), "doc", &text);
            prop_assert_eq!(resolved.unwrap(), chars[i].to_string());
        }

        #[test]
        fn spans_past_the_end_fail(text in "\\PC{0,40}", extra in 0usize..10) {
            let len = text.encode_utf16().count();
            let span = CharOffsetSpan::from_inclusive(0, len + extra);
            let is_out_of_bounds = matches!(
                resolve(span, "doc", &text),
                Err(QaError::OutOfBoundsOffset { .. })
            );
            prop_assert!(is_out_of_bounds);
        }

        #[test]
        fn reversed_spans_always_fail(text in "\\PC{1,40}", a in 0usize..40, b in 0usize..40) {
            prop_assume!(a != b);
            let span = CharOffsetSpan::from_inclusive(a.max(b), a.min(b));
            let is_out_of_bounds = matches!(
                resolve(span, "doc", &text),
                Err(QaError::OutOfBoundsOffset { .. })
            );
            prop_assert!(is_out_of_bounds);
        }
    }
}
