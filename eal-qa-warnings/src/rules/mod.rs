//! The closed set of warning rules.
//!
//! Each rule is a pure function of an [`AnswerKey`]; none holds per-document
//! state, so one instance serves every document.

mod conflicting_type;
mod conjunction;
mod overlap;

pub use conflicting_type::ConflictingTypeRule;
pub use conjunction::{ConjunctionRule, DEFAULT_CONJUNCTION_MARKERS};
pub use overlap::OverlapRule;

use eal_qa::AnswerKey;

use crate::warning::{WarningKind, WarningMap};

/// A configured warning rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningRule {
    Conjunction(ConjunctionRule),
    Overlap(OverlapRule),
    ConflictingType(ConflictingTypeRule),
}

impl WarningRule {
    /// The kind of warning this rule emits.
    pub fn kind(&self) -> WarningKind {
        match self {
            WarningRule::Conjunction(_) => WarningKind::Conjunction,
            WarningRule::Overlap(_) => WarningKind::Overlap,
            WarningRule::ConflictingType(_) => WarningKind::ConflictingType,
        }
    }

    pub fn apply_warning(&self, answer_key: &AnswerKey) -> WarningMap {
        match self {
            WarningRule::Conjunction(rule) => rule.apply_warning(answer_key),
            WarningRule::Overlap(rule) => rule.apply_warning(answer_key),
            WarningRule::ConflictingType(rule) => rule.apply_warning(answer_key),
        }
    }
}

impl From<ConjunctionRule> for WarningRule {
    fn from(rule: ConjunctionRule) -> Self {
        WarningRule::Conjunction(rule)
    }
}

impl From<OverlapRule> for WarningRule {
    fn from(rule: OverlapRule) -> Self {
        WarningRule::Overlap(rule)
    }
}

impl From<ConflictingTypeRule> for WarningRule {
    fn from(rule: ConflictingTypeRule) -> Self {
        WarningRule::ConflictingType(rule)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use eal_qa::{CharOffsetSpan, OffsetString, Realis, Response};

    pub(crate) fn response(
        event_type: &str,
        role: &str,
        cas: &str,
        start: usize,
        end: usize,
    ) -> Response {
        let span = CharOffsetSpan::from_inclusive(start, end);
        Response::new(
            "doc1",
            event_type,
            role,
            Realis::Actual,
            OffsetString::new(cas, span),
            vec![span],
            vec![],
            span,
        )
    }

    pub(crate) fn answer_key(responses: Vec<Response>) -> AnswerKey {
        AnswerKey::new("doc1", responses).unwrap()
    }

    #[test]
    fn dispatch_matches_kind() {
        let rules: Vec<WarningRule> = vec![
            ConjunctionRule::default().into(),
            OverlapRule::default().into(),
        ];
        let key = answer_key(vec![
            response("Life.Die", "Victim", "the mayor and his aide", 0, 21),
            response("Life.Die", "Place", "aide", 18, 21),
        ]);
        for rule in &rules {
            let warnings = rule.apply_warning(&key);
            assert!(!warnings.is_empty());
            assert!(warnings
                .iter()
                .flat_map(|(_, ws)| ws)
                .all(|w| w.kind == rule.kind()));
        }
    }

    #[test]
    fn rules_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WarningRule>();
    }
}
