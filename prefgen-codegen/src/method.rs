//! Language-neutral method specifications.

use prefgen_schema::ValueType;
use std::fmt;

/// One generated accessor method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Parameters in order.
    pub parameters: Vec<Parameter>,
    /// Declared return type.
    pub return_type: ReturnType,
    /// Body statements, without terminators.
    pub body: Vec<String>,
    /// Doc comment text, one line per `\n`.
    pub doc: Option<String>,
}

impl MethodSpec {
    /// Creates a method with no parameters, body or doc comment.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: ReturnType) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            body: Vec::new(),
            doc: None,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty,
        });
        self
    }

    /// Appends a body statement.
    #[must_use]
    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.body.push(statement.into());
        self
    }

    /// Sets the doc comment.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns true if the method takes no parameters.
    #[must_use]
    pub fn is_nullary(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: ValueType,
}

/// Return type of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// No return value.
    Void,
    /// A catalog value type.
    Value(ValueType),
    /// A named type, such as an editor handle.
    Named(String),
}

impl ReturnType {
    /// Returns true if the method returns nothing.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Value(value_type) => write!(f, "{value_type}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
