//! Declarative JSON assertion engine.
//!
//! Three recursive validators check a parsed document against a
//! specification of expected fields ([`validate_structure`]), field types
//! ([`validate_types`]), or field values ([`validate_values`]), collecting
//! every discrepancy instead of stopping at the first. The same
//! specifications can be written as YAML test suites and run as a batch
//! through [`suite::run_str`], with payloads loaded from resources, files,
//! or HTTP responses.
//!
//! The `validate_*` functions hand back a [`ValidationResult`]; the
//! `assert_*` variants fail with one aggregated multi-line message, for
//! embedding in a host test framework.

pub mod adapters;
pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod suite;

use serde_json::Value;

pub use domain::error::{AssertError, ErrorKind, SpecError, ValidationError, ValidationResult};
pub use domain::spec::{
    FieldSpec, Predicate, TerminalType, TypeExpect, TypeFieldSpec, ValueExpect, ValueFieldSpec,
};
pub use engine::values::{NestedArrayPolicy, ValueOptions};

/// Checks that every field named by `specs` is present in `json`.
pub fn validate_structure(
    json: &Value,
    specs: &[FieldSpec],
) -> Result<ValidationResult, SpecError> {
    engine::structure::validate(json, specs)
}

/// Checks field presence and type conformance.
pub fn validate_types(
    json: &Value,
    specs: &[TypeFieldSpec],
) -> Result<ValidationResult, SpecError> {
    engine::types::validate(json, specs)
}

/// Checks field presence and value equality.
pub fn validate_values(
    json: &Value,
    specs: &[ValueFieldSpec],
) -> Result<ValidationResult, SpecError> {
    engine::values::validate(json, specs)
}

/// [`validate_values`] with explicit array semantics for nested
/// expectations.
pub fn validate_values_with(
    json: &Value,
    specs: &[ValueFieldSpec],
    options: ValueOptions,
) -> Result<ValidationResult, SpecError> {
    engine::values::validate_with(json, specs, options)
}

pub fn assert_structure(json: &Value, specs: &[FieldSpec]) -> Result<(), AssertError> {
    into_assert(validate_structure(json, specs)?)
}

pub fn assert_types(json: &Value, specs: &[TypeFieldSpec]) -> Result<(), AssertError> {
    into_assert(validate_types(json, specs)?)
}

pub fn assert_values(json: &Value, specs: &[ValueFieldSpec]) -> Result<(), AssertError> {
    into_assert(validate_values(json, specs)?)
}

fn into_assert(result: ValidationResult) -> Result<(), AssertError> {
    if result.valid {
        Ok(())
    } else {
        Err(AssertError::Mismatch(result.summary()))
    }
}
