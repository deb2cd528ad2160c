//! Flags pairs of responses whose CAS spans partially overlap.
//!
//! Two spans overlap when they share at least one character. Identical spans
//! are not flagged. A pair is also skipped when the two responses are declared
//! equivalent: with `ignore_same_string` their CAS strings match after case
//! folding and whitespace collapsing, i.e. the same filler written twice.

use eal_qa::{AnswerKey, Response};

use crate::warning::{Warning, WarningKind, WarningMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapRule {
    /// Treat responses with the same normalized CAS string as equivalent.
    pub ignore_same_string: bool,
    /// Only compare responses of the same event type.
    pub same_event_type_only: bool,
}

impl Default for OverlapRule {
    fn default() -> Self {
        Self {
            ignore_same_string: true,
            same_event_type_only: false,
        }
    }
}

fn normalize(cas: &str) -> String {
    cas.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl OverlapRule {
    fn declared_equivalent(&self, a: &Response, b: &Response) -> bool {
        self.ignore_same_string
            && normalize(&a.canonical_argument().string) == normalize(&b.canonical_argument().string)
    }

    /// Whether `a` and `b` should be flagged against each other.
    pub fn conflicts(&self, a: &Response, b: &Response) -> bool {
        let span_a = a.canonical_argument().span;
        let span_b = b.canonical_argument().span;
        if span_a == span_b || !span_a.overlaps(&span_b) {
            return false;
        }
        if self.same_event_type_only && a.event_type() != b.event_type() {
            return false;
        }
        !self.declared_equivalent(a, b)
    }

    pub fn apply_warning(&self, answer_key: &AnswerKey) -> WarningMap {
        let mut warnings = WarningMap::new();
        let responses = answer_key.responses();
        for (i, a) in responses.iter().enumerate() {
            for b in &responses[i + 1..] {
                if !self.conflicts(a, b) {
                    continue;
                }
                warnings.add(a, overlap_warning(b));
                warnings.add(b, overlap_warning(a));
            }
        }
        warnings
    }
}

fn overlap_warning(other: &Response) -> Warning {
    let cas = other.canonical_argument();
    Warning::new(
        WarningKind::Overlap,
        format!(
            "CAS partially overlaps \"{}\" {} of {}-{}",
            cas.string,
            cas.span,
            other.event_type(),
            other.role()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tests::{answer_key, response};

    #[test]
    fn partial_overlap_warns_on_both() {
        let a = response("Life.Die", "Victim", "the mayor", 0, 8);
        let b = response("Life.Die", "Place", "mayor of Boston", 4, 18);
        let c = response("Life.Die", "Time", "Tuesday", 30, 36);
        let warnings = OverlapRule::default().apply_warning(&answer_key(vec![a.clone(), b.clone(), c.clone()]));

        assert_eq!(warnings.len(), 2);
        let on_a: Vec<_> = warnings.get(&a).collect();
        assert_eq!(
            on_a[0].explanation,
            "CAS partially overlaps \"mayor of Boston\" [4-18] of Life.Die-Place"
        );
        assert!(warnings.contains(&b));
        assert!(!warnings.contains(&c));
    }

    #[test]
    fn identical_spans_are_not_overlaps() {
        let a = response("Life.Die", "Victim", "the mayor", 0, 8);
        let b = response("Conflict.Attack", "Target", "the mayor", 0, 8);
        let warnings = OverlapRule::default().apply_warning(&answer_key(vec![a, b]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn adjacent_spans_do_not_overlap() {
        let a = response("Life.Die", "Victim", "the", 0, 2);
        let b = response("Life.Die", "Place", "mayor", 3, 7);
        assert!(OverlapRule::default()
            .apply_warning(&answer_key(vec![a, b]))
            .is_empty());
    }

    #[test]
    fn same_string_is_declared_equivalent_unless_disabled() {
        let a = response("Life.Die", "Victim", "The  Mayor", 0, 9);
        let b = response("Life.Die", "Victim", "the mayor", 1, 9);

        assert!(!OverlapRule::default().conflicts(&a, &b));
        let strict = OverlapRule {
            ignore_same_string: false,
            ..OverlapRule::default()
        };
        assert!(strict.conflicts(&a, &b));
    }

    #[test]
    fn event_type_restriction() {
        let a = response("Life.Die", "Victim", "the mayor", 0, 8);
        let b = response("Conflict.Attack", "Target", "mayor of Boston", 4, 18);
        let rule = OverlapRule {
            same_event_type_only: true,
            ..OverlapRule::default()
        };
        assert!(!rule.conflicts(&a, &b));
        assert!(OverlapRule::default().conflicts(&a, &b));
    }
}
