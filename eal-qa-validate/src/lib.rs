//! Store-wide validation of event-argument system output.
//!
//! [`SystemOutputValidator`] walks every document of a
//! [`SystemOutputStore`](eal_qa::SystemOutputStore), checks each response's
//! event type and role against a valid-roles ontology and collects every
//! failure into a [`ValidationOutcome`]. Optionally each document is rendered
//! against its original text so reviewers can see what the offsets point at.
//!
//! Run configuration comes from Serif-style [`Parameters`] files and a
//! [`DocumentTextMap`] of original texts.

pub mod doc_map;
pub mod dump;
pub mod errors;
pub mod orchestrator;
pub mod params;

pub use doc_map::DocumentTextMap;
pub use dump::{check_cas, dump_responses, render_response, CasCheck, DocumentDump};
pub use errors::{ConfigError, ConfigResult};
pub use orchestrator::{SystemOutputValidator, ValidationOutcome};
pub use params::Parameters;
