//! Heuristic warning rules for event-argument answer keys.
//!
//! Rules inspect a document's whole annotation set and attach [`Warning`]s to
//! suspicious responses. The rule set is closed: [`WarningRule`] is an enum
//! over the conjunction, overlap and conflicting-type heuristics, each holding
//! its own immutable configuration.
//!
//! ## Modules
//!
//! - [`rules`] - the individual rules
//! - [`aggregate`] - running all rules and unioning their warnings
//! - [`config`] - TOML rule configuration
//! - [`report`] - plain-text per-document QA report
//! - [`warning`] - warning values and the response-to-warnings map
//!
//! ## Example
//!
//! ```
//! use eal_qa::{AnswerKey, CharOffsetSpan, OffsetString, Realis, Response};
//! use eal_qa_warnings::{ConjunctionRule, RuleSet};
//!
//! let span = CharOffsetSpan::from_inclusive(0, 18);
//! let response = Response::new(
//!     "doc1", "Conflict.Attack", "Attacker", Realis::Actual,
//!     OffsetString::new("rebels and soldiers", span), vec![span], vec![], span,
//! );
//! let key = AnswerKey::new("doc1", vec![response.clone()]).unwrap();
//! let warnings = RuleSet::new(vec![ConjunctionRule::default().into()]).generate_warnings(&key);
//! assert_eq!(warnings.get(&response).count(), 1);
//! ```

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod report;
pub mod rules;
pub mod warning;

pub use aggregate::{aggregate, RuleSet};
pub use config::{ConflictingTypeConfig, ConjunctionConfig, OverlapConfig, RuleConfig};
pub use errors::RuleConfigError;
pub use report::{render_document, render_summary};
pub use rules::{
    ConflictingTypeRule, ConjunctionRule, OverlapRule, WarningRule, DEFAULT_CONJUNCTION_MARKERS,
};
pub use warning::{Warning, WarningKind, WarningMap};
