//! Transforms the suite's `expects` lists into the spec unions the
//! validators consume. The YAML-friendly shape (flat names, field-to-token
//! maps, field-to-nested-map maps) differs per mode.

use serde_json::{Map, Value};

use crate::domain::error::SpecError;
use crate::domain::spec::{FieldSpec, TerminalType, TypeFieldSpec, ValueFieldSpec};

/// Structure mode: a list of field names and/or `name -> [children]` maps.
pub fn parse_structure(items: &[Value]) -> Result<Vec<FieldSpec>, SpecError> {
    let mut specs = Vec::new();
    for item in items {
        match item {
            Value::String(name) => specs.push(FieldSpec::name(name)),
            Value::Object(map) => {
                for (name, children) in map {
                    let Some(children) = children.as_array() else {
                        return Err(SpecError::InvalidInput(format!(
                            "nested structure expectation `{name}` must map to a list of fields"
                        )));
                    };
                    specs.push(FieldSpec::nested(name, parse_structure(children)?));
                }
            }
            other => {
                return Err(SpecError::InvalidInput(format!(
                    "structure expectation must be a field name or a nested map, found [{other}]"
                )));
            }
        }
    }
    Ok(specs)
}

/// Type mode: a list of maps from field name to a type token or a nested map.
pub fn parse_types(items: &[Value]) -> Result<Vec<TypeFieldSpec>, SpecError> {
    let mut specs = Vec::new();
    for item in items {
        let Some(map) = item.as_object() else {
            return Err(SpecError::InvalidInput(format!(
                "type expectation must be a map of field to type, found [{item}]"
            )));
        };
        specs.extend(parse_type_map(map)?);
    }
    Ok(specs)
}

fn parse_type_map(map: &Map<String, Value>) -> Result<Vec<TypeFieldSpec>, SpecError> {
    let mut specs = Vec::new();
    for (name, value) in map {
        match value {
            Value::Object(nested) => {
                specs.push(TypeFieldSpec::nested(name, parse_type_map(nested)?));
            }
            Value::String(token) => {
                specs.push(TypeFieldSpec::typed(name, TerminalType::from_token(token)?));
            }
            other => {
                return Err(SpecError::InvalidInput(format!(
                    "type expectation for `{name}` must be a type token or a nested map, found [{other}]"
                )));
            }
        }
    }
    Ok(specs)
}

/// Value mode: a list of maps from field name to an expected literal or a
/// nested map. Literals pass through unchanged.
pub fn parse_values(items: &[Value]) -> Result<Vec<ValueFieldSpec>, SpecError> {
    let mut specs = Vec::new();
    for item in items {
        let Some(map) = item.as_object() else {
            return Err(SpecError::InvalidInput(format!(
                "value expectation must be a map of field to expected value, found [{item}]"
            )));
        };
        specs.extend(parse_value_map(map));
    }
    Ok(specs)
}

fn parse_value_map(map: &Map<String, Value>) -> Vec<ValueFieldSpec> {
    map.iter()
        .map(|(name, value)| match value {
            Value::Object(nested) => ValueFieldSpec::nested(name, parse_value_map(nested)),
            literal => ValueFieldSpec::literal(name, literal.clone()),
        })
        .collect()
}
