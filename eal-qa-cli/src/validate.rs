//! `validate-system-output`: check a system output store against the valid roles.

use anyhow::{bail, Result};
use eal_qa::{DirectoryStore, Ontology};
use eal_qa_validate::{DocumentTextMap, Parameters, SystemOutputValidator, ValidationOutcome};
use tracing::info;

/// Run validation as configured by `params` and return what it found.
///
/// Recognized parameters: `systemOutputStore`, `validRoles`, `dump`
/// (default false), `docIDMap` (required when dumping) and `maxErrors`
/// (default unlimited).
pub fn validate_system_output(params: &Parameters) -> Result<ValidationOutcome> {
    let store_path = params.get_existing_file_or_directory("systemOutputStore")?;
    let valid_roles = Ontology::load(&params.get_existing_file("validRoles")?)?;
    let doc_texts = if params.get_optional_bool("dump")?.unwrap_or(false) {
        Some(DocumentTextMap::load(&params.get_existing_file("docIDMap")?)?)
    } else {
        None
    };
    let max_errors = params.get_optional_usize("maxErrors")?.unwrap_or(usize::MAX);

    let validator = SystemOutputValidator::new(valid_roles);
    Ok(validator.validate(
        || DirectoryStore::open(&store_path),
        max_errors,
        doc_texts.as_ref(),
    ))
}

/// Binary entry point; any validation error fails the run.
pub fn run(params: &Parameters) -> Result<()> {
    let outcome = validate_system_output(params)?;
    if !outcome.is_valid() {
        bail!(
            "system output failed validation with {} error(s) across {} document(s) checked",
            outcome.errors.len(),
            outcome.documents_checked
        );
    }
    info!(
        documents = outcome.documents_checked,
        dumped = outcome.dumps.len(),
        "system output is valid"
    );
    Ok(())
}
