//! Running every configured rule over one answer key.

use eal_qa::AnswerKey;
use tracing::debug;

use crate::rules::{ConflictingTypeRule, ConjunctionRule, OverlapRule, WarningRule};
use crate::warning::WarningMap;

/// Union of every rule's warnings for `answer_key`.
///
/// Each rule sees the same immutable answer key and the per-response sets are
/// unioned, so the result does not depend on the order of `rules`.
pub fn aggregate(answer_key: &AnswerKey, rules: &[WarningRule]) -> WarningMap {
    let mut warnings = WarningMap::new();
    for rule in rules {
        let produced = rule.apply_warning(answer_key);
        debug!(
            doc_id = answer_key.doc_id(),
            rule = %rule.kind(),
            flagged = produced.len(),
            "applied warning rule"
        );
        warnings.merge(produced);
    }
    warnings
}

/// A fixed list of rules built once at startup and reused for every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<WarningRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<WarningRule>) -> Self {
        Self { rules }
    }

    /// Conjunction and overlap with defaults, plus the given conflicting-type rule.
    pub fn standard(conflicting_type: ConflictingTypeRule) -> Self {
        Self::new(vec![
            ConjunctionRule::default().into(),
            OverlapRule::default().into(),
            conflicting_type.into(),
        ])
    }

    pub fn rules(&self) -> &[WarningRule] {
        &self.rules
    }

    pub fn generate_warnings(&self, answer_key: &AnswerKey) -> WarningMap {
        aggregate(answer_key, &self.rules)
    }
}
