pub mod error;
pub mod loader;

use serde_json::Value;

pub use error::LoadError;

/// Parses JSON text into a tree. The validators themselves never touch raw
/// text; callers go through here (or their own parser) first.
pub fn parse_json(text: &str) -> Result<Value, LoadError> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_json_bytes(bytes: &[u8]) -> Result<Value, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parses YAML text into a generic JSON tree, bridging through
/// `serde_json::Value` so suite descriptions and payloads share one node
/// representation.
pub fn parse_yaml_value(text: &str) -> Result<Value, LoadError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    let value = serde_json::to_value(yaml)?;
    Ok(value)
}
