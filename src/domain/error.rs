use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Classification of a single data-validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The expected field is absent from the document.
    Missing,
    /// The field is present but its JSON kind does not satisfy the declared type.
    TypeMismatch,
    /// The field is present but its value does not equal the expected value.
    ValueMismatch,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::TypeMismatch => "type_mismatch",
            Self::ValueMismatch => "value_mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding produced while checking a document against a specification.
///
/// `path` is the slash-joined chain of field names from the document root,
/// with no leading slash. Findings are accumulated, never thrown
/// mid-traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Missing,
            path: path.into(),
            message: "field is missing".to_string(),
        }
    }

    pub fn type_mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn value_mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ValueMismatch,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.kind, self.path, self.message)
    }
}

/// Outcome of one validation call. `valid` holds iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Newline-joined rendering of every finding, one `kind: path message`
    /// line each.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ValidationError::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Input-contract violations, disjoint from data-validation findings.
///
/// These indicate misuse of the API or a malformed suite, abort the current
/// call immediately, and are never collected into a [`ValidationResult`].
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Internal(String),
}

/// Failure channel for the `assert_*` entry points.
#[derive(Debug, Error)]
pub enum AssertError {
    #[error(transparent)]
    Input(#[from] SpecError),
    /// Aggregated multi-line summary of every data-validation finding.
    #[error("{0}")]
    Mismatch(String),
}
