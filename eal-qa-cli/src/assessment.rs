//! `assessment-qa`: warnings report for every answer key in an annotation store.

use std::fs;

use anyhow::{Context, Result};
use eal_qa::{AnnotationStore, DirectoryStore};
use eal_qa_validate::Parameters;
use eal_qa_warnings::{render_document, render_summary, RuleConfig};
use tracing::{debug, info};

/// Totals over one QA run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QaSummary {
    pub documents: usize,
    pub responses: usize,
    pub flagged: usize,
    pub warnings: usize,
}

/// Write `<output>/<docID>.txt` for every document of the annotation store.
///
/// Recognized parameters: `annotationStore`, `argFile`, `roleFile`, `output`
/// and an optional TOML `ruleConfig`. Realis is normalized to Actual before
/// the rules run.
pub fn assessment_qa(params: &Parameters) -> Result<QaSummary> {
    let store_path = params.get_existing_directory("annotationStore")?;
    let arg_file = params.get_existing_file("argFile")?;
    let role_file = params.get_existing_file("roleFile")?;
    let output_dir = params.get_creatable_directory("output")?;
    let config = match params.get_optional_existing_file("ruleConfig")? {
        Some(path) => RuleConfig::load(&path)?,
        None => RuleConfig::default(),
    };
    let rules = config.with_conflicting_type(arg_file, role_file).build()?;

    let store = DirectoryStore::open(&store_path)?;
    let mut summary = QaSummary::default();
    for doc_id in AnnotationStore::doc_ids(&store)? {
        let answer_key = AnnotationStore::read(&store, &doc_id)?.with_all_realis_actual();
        let warnings = rules.generate_warnings(&answer_key);
        debug!(doc_id = %doc_id, warnings = warnings.warning_count(), "generated warnings");

        let report_path = output_dir.join(format!("{}.txt", doc_id));
        fs::write(&report_path, render_document(&answer_key, &warnings))
            .with_context(|| format!("writing {}", report_path.display()))?;

        summary.documents += 1;
        summary.responses += answer_key.len();
        summary.flagged += warnings.len();
        summary.warnings += warnings.warning_count();
    }
    AnnotationStore::close(store);

    info!(
        "{}",
        render_summary(
            summary.documents,
            summary.responses,
            summary.flagged,
            summary.warnings
        )
    );
    Ok(summary)
}

/// Binary entry point.
pub fn run(params: &Parameters) -> Result<()> {
    assessment_qa(params).map(|_| ())
}
