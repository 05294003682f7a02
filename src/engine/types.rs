use serde_json::{Number, Value};

use crate::domain::error::{SpecError, ValidationError, ValidationResult};
use crate::domain::path;
use crate::domain::spec::{TerminalType, TypeExpect, TypeFieldSpec};
use crate::engine::{check_field_name, field, node_kind_name};

/// Checks that every field named by `specs` is present and that its JSON
/// kind satisfies the declared type, recursing through nested specs and
/// every element of nested arrays.
pub fn validate(root: &Value, specs: &[TypeFieldSpec]) -> Result<ValidationResult, SpecError> {
    let mut errors = Vec::new();
    walk(root, specs, "", &mut errors)?;
    Ok(ValidationResult::from_errors(errors))
}

fn walk(
    node: &Value,
    specs: &[TypeFieldSpec],
    parent: &str,
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
            TypeExpect::Type(terminal) => {
                // null never satisfies a non-nullable terminal
                if child.is_null() {
                    errors.push(ValidationError::type_mismatch(
                        child_path,
                        format!("is null, expected `{terminal}`"),
                    ));
                    continue;
                }
                if !kind_matches(child, *terminal)? {
                    errors.push(ValidationError::type_mismatch(
                        child_path,
                        format!(
                            "expected `{terminal}`, found `{}`",
                            node_kind_name(child)
                        ),
                    ));
                }
            }
            TypeExpect::Nullable(terminal) => {
                if !child.is_null() && !kind_matches(child, *terminal)? {
                    errors.push(ValidationError::type_mismatch(
                        child_path,
                        format!(
                            "expected `{terminal}` or null, found `{}`",
                            node_kind_name(child)
                        ),
                    ));
                }
            }
            TypeExpect::Nested(children) => match child {
                Value::Array(items) => {
                    for item in items {
                        walk(item, children, &child_path, errors)?;
                    }
                }
                other => walk(other, children, &child_path, errors)?,
            },
        }
    }
    Ok(())
}

/// Whether a non-null node's JSON kind satisfies `terminal`.
///
/// Callers intercept null before delegating; a null node reaching this
/// function is an internal invariant violation.
pub(crate) fn kind_matches(node: &Value, terminal: TerminalType) -> Result<bool, SpecError> {
    match node {
        Value::Array(_) => Ok(terminal == TerminalType::Array),
        Value::Bool(_) => Ok(terminal == TerminalType::Boolean),
        Value::Number(number) => Ok(number_matches(number, terminal)),
        Value::Object(_) => Ok(terminal == TerminalType::Object),
        Value::String(_) => Ok(terminal == TerminalType::String),
        Value::Null => Err(SpecError::Internal(
            "null node must be intercepted before type matching".to_string(),
        )),
    }
}

fn number_matches(number: &Number, terminal: TerminalType) -> bool {
    if terminal == TerminalType::Number {
        return true;
    }
    if number.is_i64() || number.is_u64() {
        let fits_i32 = number
            .as_i64()
            .is_some_and(|integral| i32::try_from(integral).is_ok());
        return if fits_i32 {
            terminal == TerminalType::Integer
        } else {
            terminal == TerminalType::Long
        };
    }
    // A parsed fractional literal's precision class is not recoverable, so
    // float and double are interchangeable here.
    matches!(terminal, TerminalType::Float | TerminalType::Double)
}
