use std::path::{Path, PathBuf};

use jsonvet::ErrorKind;
use jsonvet::suite::{SuiteError, SuiteOptions, run_file};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_options() -> SuiteOptions {
    SuiteOptions {
        resource_root: fixtures_root(),
    }
}

fn run_fixture_suite(name: &str) -> Result<jsonvet::ValidationResult, SuiteError> {
    run_file(&fixtures_root().join(name), &fixture_options())
}

#[test]
fn structure_types_and_values_suites_pass() {
    for suite in ["structure_suite.yml", "types_suite.yml", "values_suite.yml"] {
        let result = run_fixture_suite(suite).expect("suite result");
        assert!(result.valid, "suite {suite} failed: {}", result.summary());
    }
}

#[test]
fn mixed_mode_suite_passes() {
    let result = run_fixture_suite("all_suite.yml").expect("suite result");
    assert!(result.valid);
}

#[test]
fn failing_suite_aggregates_across_cases_in_declaration_order() {
    let result = run_fixture_suite("failing_suite.yml").expect("suite result");
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].kind, ErrorKind::Missing);
    assert_eq!(result.errors[0].path, "hobbies");
    assert_eq!(result.errors[1].kind, ErrorKind::ValueMismatch);
    assert_eq!(result.errors[1].path, "age");
}

#[test]
fn file_sources_load_without_a_resource_root() {
    let payload = fixtures_root().join("person.json");
    let yaml = format!(
        "tests:\n  - mode: structure\n    data:\n      file: {}\n    expects:\n      - name\n",
        payload.display()
    );
    let result = jsonvet::suite::run_str(&yaml, &SuiteOptions::default()).expect("suite result");
    assert!(result.valid);
}

#[test]
fn broken_fixture_invalidates_the_whole_run() {
    let yaml = "tests:\n  - mode: structure\n    data:\n      resource: /person.json\n    expects:\n      - name\n  - mode: structure\n    data:\n      resource: /absent.json\n    expects:\n      - name\n";
    let error = jsonvet::suite::run_str(
        yaml,
        &SuiteOptions {
            resource_root: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("tests/fixtures"),
        },
    )
    .expect_err("must abort");
    assert!(matches!(error, SuiteError::Load(_)));
}
