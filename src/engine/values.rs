use serde_json::{Number, Value};

use crate::domain::error::{SpecError, ValidationError, ValidationResult};
use crate::domain::path;
use crate::domain::spec::{ValueExpect, ValueFieldSpec};
use crate::engine::{check_field_name, field, node_kind_name};

/// How a nested value expectation treats an array node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedArrayPolicy {
    /// Apply the nested expectations to every element, asserting that the
    /// declared subset of fields holds for each item in the collection.
    #[default]
    WalkElements,
    /// Nested expectations target objects only; an array node is an
    /// input-contract violation.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueOptions {
    pub nested_array: NestedArrayPolicy,
}

/// Checks that every field named by `specs` is present and carries the
/// expected value, with [`ValueOptions::default`] semantics for arrays.
pub fn validate(root: &Value, specs: &[ValueFieldSpec]) -> Result<ValidationResult, SpecError> {
    validate_with(root, specs, ValueOptions::default())
}

pub fn validate_with(
    root: &Value,
    specs: &[ValueFieldSpec],
    options: ValueOptions,
) -> Result<ValidationResult, SpecError> {
    let mut errors = Vec::new();
    walk(root, specs, "", options, &mut errors)?;
    Ok(ValidationResult::from_errors(errors))
}

fn walk(
    node: &Value,
    specs: &[ValueFieldSpec],
    parent: &str,
    options: ValueOptions,
    errors: &mut Vec<ValidationError>,
) -> Result<(), SpecError> {
    for spec in specs {
        check_field_name(&spec.name)?;
        let Some(child) = field(node, &spec.name) else {
            errors.push(ValidationError::missing(path::join(parent, &spec.name)));
            continue;
        };
        let child_path = path::join(parent, &spec.name);

        match &spec.expect {
            ValueExpect::Nested(children) => match child {
                Value::Array(items) => match options.nested_array {
                    NestedArrayPolicy::WalkElements => {
                        for item in items {
                            walk(item, children, &child_path, options, errors)?;
                        }
                    }
                    NestedArrayPolicy::Reject => {
                        return Err(SpecError::InvalidInput(format!(
                            "nested value expectations target objects, but `{child_path}` is an array"
                        )));
                    }
                },
                other => walk(other, children, &child_path, options, errors)?,
            },
            ValueExpect::Literal(expected) => {
                if !literal_matches(child, expected)? {
                    errors.push(ValidationError::value_mismatch(
                        child_path,
                        format!("expected [{expected}], found [{child}]"),
                    ));
                }
            }
            ValueExpect::Predicate(predicate) => {
                let scalar = extract_scalar(child, &child_path)?;
                if !predicate.matches(scalar) {
                    errors.push(ValidationError::value_mismatch(
                        child_path,
                        format!("did not satisfy {}, found [{child}]", predicate.describe()),
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Deep equality between a document node and an expected literal.
///
/// Arrays compare element-wise in order with no coercion. Numbers compare in
/// the node's own representation: an integral node never equals a fractional
/// literal. Object nodes are not value-comparable; use nested expectations.
fn literal_matches(node: &Value, expected: &Value) -> Result<bool, SpecError> {
    match node {
        Value::Array(items) => {
            let Value::Array(wanted) = expected else {
                return Ok(false);
            };
            if items.len() != wanted.len() {
                return Ok(false);
            }
            for (item, want) in items.iter().zip(wanted) {
                if !literal_matches(item, want)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Value::Bool(actual) => Ok(expected.as_bool() == Some(*actual)),
        Value::Number(actual) => Ok(number_equals(actual, expected)),
        Value::String(actual) => Ok(expected.as_str() == Some(actual.as_str())),
        Value::Object(_) => Err(SpecError::InvalidInput(
            "cannot test equality for json objects; use a nested expectation instead".to_string(),
        )),
        Value::Null => Err(SpecError::Internal(
            "null node must be intercepted before value matching".to_string(),
        )),
    }
}

fn number_equals(actual: &Number, expected: &Value) -> bool {
    let Value::Number(expected) = expected else {
        return false;
    };
    if let (Some(a), Some(e)) = (actual.as_i64(), expected.as_i64()) {
        return a == e;
    }
    if let (Some(a), Some(e)) = (actual.as_u64(), expected.as_u64()) {
        return a == e;
    }
    // an integral node never equals a fractional literal, and vice versa
    if actual.is_f64() != expected.is_f64() {
        return false;
    }
    match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(e)) => a == e,
        _ => false,
    }
}

/// Extracts the scalar handed to a predicate: `None` for JSON null,
/// otherwise the string/number/boolean node itself.
fn extract_scalar<'a>(node: &'a Value, path: &str) -> Result<Option<&'a Value>, SpecError> {
    match node {
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(SpecError::InvalidInput(format!(
            "cannot apply a predicate to composite nodes; `{path}` is {}",
            node_kind_name(node)
        ))),
        scalar => Ok(Some(scalar)),
    }
}
