use std::fs;
use std::path::{Path, PathBuf};

use jsonvet::{
    AssertError, ErrorKind, FieldSpec, Predicate, TerminalType, TypeFieldSpec, ValueFieldSpec,
    assert_structure, assert_values, validate_structure, validate_types, validate_values,
};
use serde_json::Value;

fn fixture(relative: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative);
    load_json(&path)
}

fn load_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read fixture");
    jsonvet::io::parse_json(&text).expect("parse fixture")
}

#[test]
fn structure_surface_accepts_the_person_document() {
    let document = fixture("person.json");
    assert_structure(
        &document,
        &[
            FieldSpec::name("name"),
            FieldSpec::name("age"),
            FieldSpec::nested("job", [FieldSpec::name("id"), FieldSpec::name("title")]),
        ],
    )
    .expect("document conforms");
}

#[test]
fn type_surface_reports_every_mismatch_at_once() {
    let document = fixture("person.json");
    let result = validate_types(
        &document,
        &[
            TypeFieldSpec::typed("name", TerminalType::Integer),
            TypeFieldSpec::typed("age", TerminalType::String),
            TypeFieldSpec::nullable("nickname", TerminalType::String),
            TypeFieldSpec::typed("long_number", TerminalType::Long),
        ],
    )
    .expect("validation result");

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].path, "name");
    assert_eq!(result.errors[1].path, "age");
    assert!(result.errors.iter().all(|e| e.kind == ErrorKind::TypeMismatch));
}

#[test]
fn value_surface_walks_arrays_of_objects() {
    let document = fixture("people.json");
    let result = validate_values(
        &document,
        &[ValueFieldSpec::nested(
            "people",
            [ValueFieldSpec::literal("favorite_language", "rust")],
        )],
    )
    .expect("validation result");
    assert!(result.valid);
}

#[test]
fn predicate_expectations_plug_into_the_value_surface() {
    struct InRange(i64, i64);
    impl Predicate for InRange {
        fn matches(&self, value: Option<&Value>) -> bool {
            value
                .and_then(Value::as_i64)
                .is_some_and(|n| n >= self.0 && n <= self.1)
        }
        fn describe(&self) -> String {
            format!("integer in [{}, {}]", self.0, self.1)
        }
    }

    let document = fixture("person.json");
    assert_values(&document, &[ValueFieldSpec::predicate("age", InRange(0, 150))])
        .expect("age in range");

    let error = assert_values(&document, &[ValueFieldSpec::predicate("age", InRange(0, 10))])
        .expect_err("age out of range");
    let AssertError::Mismatch(message) = error else {
        panic!("unexpected error: {error:?}");
    };
    assert!(message.contains("integer in [0, 10]"));
}

#[test]
fn validating_the_same_pair_twice_is_idempotent() {
    let document = fixture("person.json");
    let specs = [FieldSpec::name("name"), FieldSpec::name("hobbies")];
    let first = validate_structure(&document, &specs).expect("validation result");
    let second = validate_structure(&document, &specs).expect("validation result");
    assert_eq!(first, second);
}
