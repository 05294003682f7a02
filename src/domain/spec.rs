use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::error::SpecError;

/// Structure-mode expectation: a field that must be present, optionally with
/// nested expectations applied to its value (or to every element when the
/// value is an array).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    Name(String),
    Nested {
        name: String,
        children: Vec<FieldSpec>,
    },
}

impl FieldSpec {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn nested(name: impl Into<String>, children: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self::Nested {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn field_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Nested { name, .. } => name,
        }
    }
}

/// Leaf type descriptor for type-mode expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalType {
    String,
    Integer,
    Long,
    Float,
    Double,
    Number,
    Boolean,
    Object,
    Array,
}

impl TerminalType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Number => "number",
            Self::Boolean => "bool",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Maps a suite-format type token. `array` is intentionally absent from
    /// the textual format; array-typed fields are declared programmatically.
    pub fn from_token(token: &str) -> Result<Self, SpecError> {
        match token {
            "string" => Ok(Self::String),
            "int" => Ok(Self::Integer),
            "long" => Ok(Self::Long),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "number" => Ok(Self::Number),
            "bool" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            other => Err(SpecError::InvalidInput(format!(
                "invalid type token `{other}`; must be one of string, int, long, float, double, number, bool, object"
            ))),
        }
    }
}

impl fmt::Display for TerminalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a type-mode entry declares about its field.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpect {
    Type(TerminalType),
    /// The field may be JSON null; otherwise it must match the wrapped type.
    Nullable(TerminalType),
    Nested(Vec<TypeFieldSpec>),
}

/// Type-mode expectation for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeFieldSpec {
    pub name: String,
    pub expect: TypeExpect,
}

impl TypeFieldSpec {
    pub fn typed(name: impl Into<String>, terminal: TerminalType) -> Self {
        Self {
            name: name.into(),
            expect: TypeExpect::Type(terminal),
        }
    }

    pub fn nullable(name: impl Into<String>, terminal: TerminalType) -> Self {
        Self {
            name: name.into(),
            expect: TypeExpect::Nullable(terminal),
        }
    }

    pub fn nested(
        name: impl Into<String>,
        children: impl IntoIterator<Item = TypeFieldSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            expect: TypeExpect::Nested(children.into_iter().collect()),
        }
    }
}

/// Host-supplied comparison capability for value-mode expectations.
///
/// The matcher receives the extracted scalar, or `None` when the field is
/// JSON null.
pub trait Predicate: Send + Sync {
    fn matches(&self, value: Option<&Value>) -> bool;

    fn describe(&self) -> String {
        "<predicate>".to_string()
    }
}

/// What a value-mode entry expects of its field.
#[derive(Clone)]
pub enum ValueExpect {
    /// A JSON-comparable scalar, or a homogeneous array of scalars.
    Literal(Value),
    Predicate(Arc<dyn Predicate>),
    Nested(Vec<ValueFieldSpec>),
}

impl fmt::Debug for ValueExpect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Predicate(predicate) => {
                f.debug_tuple("Predicate").field(&predicate.describe()).finish()
            }
            Self::Nested(children) => f.debug_tuple("Nested").field(children).finish(),
        }
    }
}

/// Value-mode expectation for one field.
#[derive(Debug, Clone)]
pub struct ValueFieldSpec {
    pub name: String,
    pub expect: ValueExpect,
}

impl ValueFieldSpec {
    pub fn literal(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            expect: ValueExpect::Literal(value.into()),
        }
    }

    pub fn predicate(name: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        Self {
            name: name.into(),
            expect: ValueExpect::Predicate(Arc::new(predicate)),
        }
    }

    pub fn nested(
        name: impl Into<String>,
        children: impl IntoIterator<Item = ValueFieldSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            expect: ValueExpect::Nested(children.into_iter().collect()),
        }
    }
}
