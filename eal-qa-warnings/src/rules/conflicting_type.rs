//! Flags responses that share a CAS span but cannot agree on what it is.
//!
//! Two ontologies drive the check. The role ontology maps an event type to its
//! valid roles; the argument ontology maps a role to the argument types that
//! may fill it (`Attacker PER ORG GPE`). A response whose event type is
//! unknown, or whose role is not valid for its event type, admits no argument
//! type at all. A response whose role is
//! valid but absent from the argument ontology is unconstrained. Two responses
//! with an identical CAS span conflict when both are constrained and their
//! admitted argument types are disjoint.

use std::collections::BTreeSet;
use std::path::Path;

use eal_qa::{is_always_valid_role, AnswerKey, Ontology, QaResult, Response};
use tracing::debug;

use crate::warning::{Warning, WarningKind, WarningMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingTypeRule {
    argument_types: Ontology,
    valid_roles: Ontology,
}

impl ConflictingTypeRule {
    pub fn new(argument_types: Ontology, valid_roles: Ontology) -> Self {
        Self {
            argument_types,
            valid_roles,
        }
    }

    /// Load both ontologies, failing if either cannot be parsed.
    pub fn load(arg_file: &Path, role_file: &Path) -> QaResult<Self> {
        let argument_types = Ontology::load(arg_file)?;
        let valid_roles = Ontology::load(role_file)?;
        debug!(
            arg_file = %arg_file.display(),
            role_file = %role_file.display(),
            roles = argument_types.len(),
            event_types = valid_roles.len(),
            "loaded conflicting-type ontologies"
        );
        Ok(Self::new(argument_types, valid_roles))
    }

    /// Argument types `response` admits; `None` when unconstrained.
    pub fn admitted_types(&self, response: &Response) -> Option<BTreeSet<&str>> {
        let role_valid = self.valid_roles.contains_key(response.event_type())
            && (is_always_valid_role(response.role())
                || self
                    .valid_roles
                    .contains(response.event_type(), response.role()));
        if !role_valid {
            return Some(BTreeSet::new());
        }
        self.argument_types
            .get(response.role())
            .map(|types| types.iter().map(String::as_str).collect())
    }

    /// Whether two responses cannot both describe the same filler.
    pub fn conflicts(&self, a: &Response, b: &Response) -> bool {
        match (self.admitted_types(a), self.admitted_types(b)) {
            (Some(types_a), Some(types_b)) => types_a.is_disjoint(&types_b),
            _ => false,
        }
    }

    pub fn apply_warning(&self, answer_key: &AnswerKey) -> WarningMap {
        let mut warnings = WarningMap::new();
        let responses = answer_key.responses();
        for (i, a) in responses.iter().enumerate() {
            for b in &responses[i + 1..] {
                if a.canonical_argument().span != b.canonical_argument().span {
                    continue;
                }
                if !self.conflicts(a, b) {
                    continue;
                }
                warnings.add(a, self.conflict_warning(a, b));
                warnings.add(b, self.conflict_warning(b, a));
            }
        }
        warnings
    }

    fn conflict_warning(&self, this: &Response, other: &Response) -> Warning {
        let describe = |r: &Response| match self.admitted_types(r) {
            Some(types) if types.is_empty() => format!(
                "{}-{} (role not valid for event type)",
                r.event_type(),
                r.role()
            ),
            Some(types) => format!(
                "{}-{} ({})",
                r.event_type(),
                r.role(),
                types.into_iter().collect::<Vec<_>>().join(" ")
            ),
            None => format!("{}-{}", r.event_type(), r.role()),
        };
        Warning::new(
            WarningKind::ConflictingType,
            format!(
                "{} shares CAS {} with {} but they admit no common argument type",
                describe(this),
                this.canonical_argument().span,
                describe(other)
            ),
        )
    }
}
