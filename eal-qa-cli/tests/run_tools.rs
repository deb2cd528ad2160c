use std::fs;
use std::path::Path;

use eal_qa::QaError;
use eal_qa_cli::assessment::{assessment_qa, QaSummary};
use eal_qa_cli::validate::{self, validate_system_output};
use eal_qa_validate::Parameters;

const ROLES: &str = "\
Conflict.Attack Attacker Target
Life.Die Victim
";

const ARGS: &str = "\
Attacker PER ORG GPE
Target FAC VEH
Victim PER
";

fn params<P: AsRef<Path>>(pairs: &[(&str, P)]) -> Parameters {
    Parameters::from_pairs(
        pairs
            .iter()
            .map(|(k, v)| (*k, v.as_ref().display().to_string())),
    )
}

fn write_annotation_store(root: &Path) {
    fs::create_dir(root).unwrap();
    fs::write(
        root.join("doc1"),
        "1\tdoc1\tConflict.Attack\tAttacker\trebels and soldiers\t0-18\t20-27\t0-18\tNIL\tActual\n\
         2\tdoc1\tLife.Die\tVictim\tthe mayor\t40-48\t30-35\t40-48\tNIL\tGeneric\n\
         3\tdoc1\tConflict.Attack\tTarget\tthe mayor\t40-48\t20-27\t40-48\tNIL\tActual\n",
    )
    .unwrap();
    fs::write(root.join("doc2"), "").unwrap();
}

#[test]
fn assessment_writes_one_report_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("annotation");
    write_annotation_store(&store);
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, ROLES).unwrap();
    let arg_file = dir.path().join("args.txt");
    fs::write(&arg_file, ARGS).unwrap();
    let output = dir.path().join("reports");

    let summary = assessment_qa(&params(&[
        ("annotationStore", &store),
        ("argFile", &arg_file),
        ("roleFile", &role_file),
        ("output", &output),
    ]))
    .unwrap();

    assert_eq!(
        summary,
        QaSummary {
            documents: 2,
            responses: 3,
            flagged: 3,
            warnings: 3,
        }
    );
    let doc1 = fs::read_to_string(output.join("doc1.txt")).unwrap();
    assert!(doc1.starts_with("Document doc1: 3 responses, 3 with warnings\n"));
    assert!(doc1.contains("    ! Conjunction: "));
    assert_eq!(doc1.matches("    ! ConflictingType: ").count(), 2);
    // realis is normalized before reporting
    assert!(!doc1.contains(":Generic"));
    assert_eq!(
        fs::read_to_string(output.join("doc2.txt")).unwrap(),
        "Document doc2: 0 responses, 0 with warnings\n"
    );
}

#[test]
fn rule_config_can_disable_rules() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("annotation");
    write_annotation_store(&store);
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, ROLES).unwrap();
    let arg_file = dir.path().join("args.txt");
    fs::write(&arg_file, ARGS).unwrap();
    let rule_config = dir.path().join("rules.toml");
    fs::write(&rule_config, "[conjunction]\nenabled = false\n").unwrap();
    let output = dir.path().join("reports");

    let summary = assessment_qa(&params(&[
        ("annotationStore", &store),
        ("argFile", &arg_file),
        ("roleFile", &role_file),
        ("output", &output),
        ("ruleConfig", &rule_config),
    ]))
    .unwrap();
    assert_eq!(summary.warnings, 2);
}

#[test]
fn broken_ontology_is_fatal_for_assessment() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("annotation");
    write_annotation_store(&store);
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, "Conflict.Attack\n").unwrap();
    let arg_file = dir.path().join("args.txt");
    fs::write(&arg_file, ARGS).unwrap();

    let err = assessment_qa(&params(&[
        ("annotationStore", &store),
        ("argFile", &arg_file),
        ("roleFile", &role_file),
        ("output", &dir.path().join("reports")),
    ]))
    .unwrap_err();
    assert!(format!("{:#}", err).contains("line 1"));
}

#[test]
fn validation_errors_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("system");
    fs::create_dir(&store).unwrap();
    fs::write(
        store.join("doc1"),
        "1\tdoc1\tLife.Die\tAttacker\tgunmen\t0-5\t7-12\t0-5\tNIL\tActual\n",
    )
    .unwrap();
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, ROLES).unwrap();
    let params = params(&[("systemOutputStore", &store), ("validRoles", &role_file)]);

    let outcome = validate_system_output(&params).unwrap();
    assert_eq!(outcome.errors.len(), 1);
    assert!(matches!(outcome.errors[0], QaError::InvalidRole { .. }));
    assert!(validate::run(&params).is_err());
}

#[test]
fn dump_requires_a_doc_id_map() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("system");
    fs::create_dir(&store).unwrap();
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, ROLES).unwrap();
    let mut pairs: Vec<(String, String)> = vec![
        ("systemOutputStore".into(), store.display().to_string()),
        ("validRoles".into(), role_file.display().to_string()),
        ("dump".into(), "true".into()),
    ];
    assert!(validate_system_output(&Parameters::from_pairs(pairs.clone())).is_err());

    pairs[2].1 = "false".into();
    let outcome = validate_system_output(&Parameters::from_pairs(pairs)).unwrap();
    assert!(outcome.is_valid());
    assert_eq!(outcome.documents_checked, 0);
}

#[test]
fn missing_system_output_store_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let role_file = dir.path().join("roles.txt");
    fs::write(&role_file, ROLES).unwrap();
    let missing = dir.path().join("no-such-store");

    let err = validate_system_output(&params(&[
        ("systemOutputStore", &missing),
        ("validRoles", &role_file),
    ]))
    .unwrap_err();
    assert!(format!("{:#}", err).contains("an existing file or directory"));
}
