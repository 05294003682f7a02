pub mod expects;
pub mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::domain::error::{SpecError, ValidationResult};
use crate::domain::spec::{FieldSpec, TypeFieldSpec, ValueFieldSpec};
use crate::engine;
use crate::io::loader::{self, PayloadSource};
use crate::io::{self, LoadError};

/// Which validator a test case dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Structure,
    Type,
    Value,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Type => "type",
            Self::Value => "value",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, SpecError> {
        match token {
            "structure" => Ok(Self::Structure),
            "type" => Ok(Self::Type),
            "value" => Ok(Self::Value),
            other => Err(SpecError::InvalidInput(format!(
                "invalid mode `{other}`; possible values: structure, type, value"
            ))),
        }
    }
}

/// Suite-wide configuration, read-only after parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteConfig {
    pub base_url: String,
    /// Zero means no port suffix on built URLs.
    pub port: u16,
}

/// Parsed expectations, carrying the mode in the variant.
#[derive(Debug, Clone)]
pub enum Expects {
    Structure(Vec<FieldSpec>),
    Type(Vec<TypeFieldSpec>),
    Value(Vec<ValueFieldSpec>),
}

/// One declarative test case: where the payload comes from and what must
/// hold for it. Constructed by the parser, consumed exactly once by the
/// runner.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub source: PayloadSource,
    pub expects: Expects,
}

impl TestCase {
    pub fn mode(&self) -> Mode {
        match self.expects {
            Expects::Structure(_) => Mode::Structure,
            Expects::Type(_) => Mode::Type,
            Expects::Value(_) => Mode::Value,
        }
    }
}

/// Runner options that are not part of the suite text itself.
#[derive(Debug, Clone)]
pub struct SuiteOptions {
    /// Directory that `resource` payload paths resolve against.
    pub resource_root: PathBuf,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from("."),
        }
    }
}

/// Unrecoverable suite failures: either the suite description itself is
/// malformed, or a payload could not be loaded. A broken fixture invalidates
/// the whole run rather than being skipped.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Input(#[from] SpecError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Parses and runs a YAML suite, aggregating data-validation errors from
/// every test case in declaration order. One failing case never stops the
/// others; a loader failure aborts the whole run.
pub fn run_str(yaml: &str, options: &SuiteOptions) -> Result<ValidationResult, SuiteError> {
    let model = io::parse_yaml_value(yaml)?;
    run_model(&model, options)
}

pub fn run_file(path: &Path, options: &SuiteOptions) -> Result<ValidationResult, SuiteError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    run_str(&text, options)
}

fn run_model(model: &Value, options: &SuiteOptions) -> Result<ValidationResult, SuiteError> {
    let config = parser::parse_config(model)?;
    let tests = parser::parse_tests(model)?;

    let mut errors = Vec::new();
    for test in &tests {
        let payload = loader::load(&test.source, &config, &options.resource_root)?;
        let result = match &test.expects {
            Expects::Structure(specs) => engine::structure::validate(&payload, specs)?,
            Expects::Type(specs) => engine::types::validate(&payload, specs)?,
            Expects::Value(specs) => engine::values::validate(&payload, specs)?,
        };
        errors.extend(result.errors);
    }
    Ok(ValidationResult::from_errors(errors))
}
