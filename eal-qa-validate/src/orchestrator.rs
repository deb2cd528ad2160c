//! Store-wide validation of system output against an event-type ontology.

use eal_qa::{validate_response, Ontology, QaError, QaResult, SystemOutputStore};
use tracing::{error, info, warn};

use crate::doc_map::DocumentTextMap;
use crate::dump::{dump_responses, DocumentDump};

/// Everything a validation run found.
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    /// Errors in the order they were encountered; empty means the store is valid.
    pub errors: Vec<QaError>,
    /// Dumps of documents that were rendered against their original text.
    pub dumps: Vec<DocumentDump>,
    /// Documents whose output was read, including the one that tripped the budget.
    pub documents_checked: usize,
    /// Whether the error budget stopped the run before every document was checked.
    pub halted_early: bool,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error; returns true once the budget is exceeded.
    fn record(&mut self, err: QaError, max_errors: usize) -> bool {
        error!("{}", err);
        self.errors.push(err);
        self.errors.len() > max_errors
    }
}

/// Validates system output stores against a preloaded valid-roles ontology.
#[derive(Debug, Clone)]
pub struct SystemOutputValidator {
    valid_roles: Ontology,
}

impl SystemOutputValidator {
    pub fn new(valid_roles: Ontology) -> Self {
        Self { valid_roles }
    }

    pub fn valid_roles(&self) -> &Ontology {
        &self.valid_roles
    }

    /// Validate every document of the store produced by `open_store`.
    ///
    /// Each ontology violation, unreadable document, or dump failure is
    /// recorded. Reading stops as soon as more than `max_errors` errors have
    /// been recorded, so `max_errors = 0` reports exactly one. A store that
    /// cannot be opened or listed yields that single error.
    ///
    /// When `doc_texts` is given, every non-empty document that passed the
    /// ontology checks is also dumped with its spans resolved against the
    /// original text.
    pub fn validate<S, F>(
        &self,
        open_store: F,
        max_errors: usize,
        doc_texts: Option<&DocumentTextMap>,
    ) -> ValidationOutcome
    where
        S: SystemOutputStore,
        F: FnOnce() -> QaResult<S>,
    {
        let mut outcome = ValidationOutcome::default();

        let opened = open_store().and_then(|store| {
            let doc_ids = store.doc_ids()?;
            Ok((store, doc_ids))
        });
        let (store, doc_ids) = match opened {
            Ok(opened) => opened,
            Err(err) => {
                outcome.record(err, max_errors);
                return outcome;
            }
        };
        info!(documents = doc_ids.len(), "validating system output store");

        'documents: for doc_id in &doc_ids {
            outcome.documents_checked += 1;
            let output = match store.read(doc_id) {
                Ok(output) => output,
                Err(err) => {
                    if outcome.record(err, max_errors) {
                        outcome.halted_early = true;
                        break 'documents;
                    }
                    continue;
                }
            };
            info!(doc_id = %doc_id, responses = output.len(), "read document");

            let mut document_valid = true;
            for response in output.responses() {
                if let Err(err) = validate_response(response, &self.valid_roles) {
                    document_valid = false;
                    if outcome.record(err, max_errors) {
                        outcome.halted_early = true;
                        break 'documents;
                    }
                }
            }

            if let Some(doc_texts) = doc_texts {
                if output.is_empty() || !document_valid {
                    continue;
                }
                let dumped = doc_texts
                    .text(doc_id)
                    .and_then(|text| dump_responses(&output, &text));
                match dumped {
                    Ok(dump) => {
                        info!("{}", dump.text);
                        outcome.dumps.push(dump);
                    }
                    Err(err) => {
                        if outcome.record(err, max_errors) {
                            outcome.halted_early = true;
                            break 'documents;
                        }
                    }
                }
            }
        }

        if outcome.halted_early {
            warn!(
                errors = outcome.errors.len(),
                max_errors,
                checked = outcome.documents_checked,
                total = doc_ids.len(),
                "error budget exceeded; remaining documents skipped"
            );
        }
        store.close();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eal_qa::{CharOffsetSpan, InMemoryStore, OffsetString, Realis, Response};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn ontology() -> Ontology {
        Ontology::from_pairs([
            ("Conflict.Attack", vec!["Attacker", "Target"]),
            ("Life.Die", vec!["Victim"]),
        ])
    }

    fn response(doc_id: &str, event_type: &str, role: &str) -> Response {
        let span = CharOffsetSpan::from_inclusive(0, 5);
        Response::new(
            doc_id,
            event_type,
            role,
            Realis::Actual,
            OffsetString::new("Rebels", span),
            vec![span],
            vec![],
            span,
        )
    }

    /// Records which documents were read.
    struct TrackingStore {
        inner: InMemoryStore,
        reads: Rc<RefCell<Vec<String>>>,
    }

    impl SystemOutputStore for TrackingStore {
        fn doc_ids(&self) -> QaResult<BTreeSet<String>> {
            SystemOutputStore::doc_ids(&self.inner)
        }

        fn read(&self, doc_id: &str) -> QaResult<eal_qa::SystemOutput> {
            self.reads.borrow_mut().push(doc_id.to_string());
            SystemOutputStore::read(&self.inner, doc_id)
        }
    }

    fn three_documents() -> InMemoryStore {
        InMemoryStore::new()
            .with_document("doc1", vec![response("doc1", "Conflict.Attack", "Attacker")])
            .with_document("doc2", vec![response("doc2", "Conflict.Attack", "Victim")])
            .with_document("doc3", vec![response("doc3", "Life.Die", "Attacker")])
    }

    #[test]
    fn zero_budget_stops_after_first_error() {
        let reads = Rc::new(RefCell::new(Vec::new()));
        let store = TrackingStore {
            inner: three_documents(),
            reads: Rc::clone(&reads),
        };
        let validator = SystemOutputValidator::new(ontology());
        let outcome = validator.validate(|| Ok(store), 0, None);

        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            &outcome.errors[0],
            QaError::InvalidRole { doc_id, .. } if doc_id == "doc2"
        ));
        assert!(outcome.halted_early);
        assert_eq!(*reads.borrow(), vec!["doc1", "doc2"]);
    }

    #[test]
    fn budget_of_n_permits_n_plus_one_errors() {
        let validator = SystemOutputValidator::new(ontology());
        let store = InMemoryStore::new().with_document(
            "doc1",
            vec![
                response("doc1", "Life.Die", "Target"),
                response("doc1", "Movement.Transport", "Agent"),
                response("doc1", "Life.Die", "Attacker"),
                response("doc1", "Life.Die", "Instrument"),
            ],
        );
        let outcome = validator.validate(|| Ok(store), 2, None);
        assert_eq!(outcome.errors.len(), 3);
        assert!(matches!(outcome.errors[1], QaError::InvalidEventType { .. }));
        assert!(outcome.halted_early);
    }

    #[test]
    fn unlimited_budget_collects_every_error() {
        let validator = SystemOutputValidator::new(ontology());
        let outcome = validator.validate(|| Ok(three_documents()), usize::MAX, None);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.documents_checked, 3);
        assert!(!outcome.halted_early);
    }

    #[test]
    fn valid_store_has_no_errors() {
        let store = InMemoryStore::new()
            .with_document("doc1", vec![response("doc1", "Conflict.Attack", "Time")])
            .with_document("doc2", vec![response("doc2", "Life.Die", "Victim")])
            .with_document("doc3", vec![]);
        let validator = SystemOutputValidator::new(ontology());
        for max_errors in [0, 1, usize::MAX] {
            let outcome = validator.validate(|| Ok(store.clone()), max_errors, None);
            assert!(outcome.is_valid());
            assert_eq!(outcome.documents_checked, 3);
        }
    }

    #[test]
    fn store_open_failure_is_the_only_error() {
        let validator = SystemOutputValidator::new(ontology());
        let outcome = validator.validate(
            || -> QaResult<InMemoryStore> {
                Err(QaError::StoreOpenFailure {
                    path: PathBuf::from("/missing"),
                    message: "not a directory".to_string(),
                })
            },
            usize::MAX,
            None,
        );
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], QaError::StoreOpenFailure { .. }));
        assert_eq!(outcome.documents_checked, 0);
    }

    #[test]
    fn dumps_non_empty_documents_and_records_missing_text() {
        let store = InMemoryStore::new()
            .with_document("doc1", vec![response("doc1", "Conflict.Attack", "Attacker")])
            .with_document("doc2", vec![])
            .with_document("doc3", vec![response("doc3", "Life.Die", "Victim")]);
        let texts = DocumentTextMap::from_texts([("doc1", "Rebels attacked.")]);
        let validator = SystemOutputValidator::new(ontology());

        let outcome = validator.validate(|| Ok(store), usize::MAX, Some(&texts));
        assert_eq!(outcome.dumps.len(), 1);
        assert_eq!(outcome.dumps[0].doc_id, "doc1");
        assert!(outcome.dumps[0]
            .text
            .contains("CAS: Rebels [EXACT MATCH WITH TEXT FROM OFFSETS]"));
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            &outcome.errors[0],
            QaError::MissingDocumentText { doc_id } if doc_id == "doc3"
        ));
    }

    #[test]
    fn documents_with_ontology_errors_are_not_dumped() {
        let store = InMemoryStore::new()
            .with_document("doc1", vec![response("doc1", "Life.Die", "Attacker")])
            .with_document("doc2", vec![response("doc2", "Life.Die", "Victim")]);
        let texts = DocumentTextMap::from_texts([
            ("doc1", "Rebels attacked."),
            ("doc2", "Rebels died."),
        ]);
        let validator = SystemOutputValidator::new(ontology());

        let outcome = validator.validate(|| Ok(store), usize::MAX, Some(&texts));
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], QaError::InvalidRole { .. }));
        let dumped: Vec<_> = outcome.dumps.iter().map(|d| d.doc_id.as_str()).collect();
        assert_eq!(dumped, vec!["doc2"]);
    }
}
