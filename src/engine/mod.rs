pub mod structure;
pub mod types;
pub mod values;

use serde_json::Value;

use crate::domain::error::SpecError;

/// Lowercase name of a node's JSON kind, for error messages.
pub(crate) fn node_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Looks up `field` on an object node. Non-object nodes have no fields.
pub(crate) fn field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.as_object().and_then(|map| map.get(name))
}

/// Field names in a specification must be non-empty; an empty name is a
/// misuse of the API, not a property of the document.
pub(crate) fn check_field_name(name: &str) -> Result<(), SpecError> {
    if name.is_empty() {
        return Err(SpecError::InvalidInput(
            "specification field names must not be empty".to_string(),
        ));
    }
    Ok(())
}
