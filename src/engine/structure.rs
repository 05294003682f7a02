use serde_json::Value;

use crate::domain::error::{SpecError, ValidationError, ValidationResult};
use crate::domain::path;
use crate::domain::spec::FieldSpec;
use crate::engine::{check_field_name, field};

/// Checks that every field named by `specs` is present in `root`, recursing
/// into nested objects and into every element of nested arrays.
///
/// Errors from different elements of the same array share one path; the
/// element index is not part of the reported path.
pub fn validate(root: &Value, specs: &[FieldSpec]) -> Result<ValidationResult, SpecError> {
    let mut errors = Vec::new();
    walk(root, specs, "", &mut errors)?;
    Ok(ValidationResult::from_errors(errors))
}

fn walk(
    node: &Value,
    specs: &[FieldSpec],
    parent: &str,
    errors: &mut Vec<ValidationError>,
) -> Result<(), SpecError> {
    for spec in specs {
        check_field_name(spec.field_name())?;
        match spec {
            FieldSpec::Name(name) => {
                if field(node, name).is_none() {
                    errors.push(ValidationError::missing(path::join(parent, name)));
                }
            }
            FieldSpec::Nested { name, children } => {
                let Some(child) = field(node, name) else {
                    errors.push(ValidationError::missing(path::join(parent, name)));
                    continue;
                };
                let child_path = path::join(parent, name);
                match child {
                    Value::Array(items) => {
                        for item in items {
                            walk(item, children, &child_path, errors)?;
                        }
                    }
                    other => walk(other, children, &child_path, errors)?,
                }
            }
        }
    }
    Ok(())
}
