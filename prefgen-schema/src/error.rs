//! Error types for declaration parsing and resolution.

use std::fmt;
use thiserror::Error;

/// Error type for declaration parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid document structure.
    #[error("invalid declaration structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// A problem with a single declaration, found during batch resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// Field name camel-cases to an empty or non-identifier accessor name.
    #[error("field '{field}' produces invalid accessor name '{accessor}'")]
    InvalidFieldName {
        /// Declared field name.
        field: String,
        /// Camel-cased accessor name.
        accessor: String,
    },

    /// Two entries camel-case to the same accessor name.
    #[error("fields '{first}' and '{second}' both produce accessor name '{accessor}'")]
    DuplicateAccessorName {
        /// Colliding accessor name.
        accessor: String,
        /// Field declared first.
        first: String,
        /// Field declared later.
        second: String,
    },

    /// Type name outside the supported catalog.
    #[error("unsupported type '{type_name}' for field '{field}'")]
    UnsupportedType {
        /// Declared field name.
        field: String,
        /// Unrecognized type name.
        type_name: String,
    },
}

/// All declaration problems found in one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    /// Group name.
    pub group: String,
    /// Problems in the order they were found.
    pub errors: Vec<DeclarationError>,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invalid declaration(s) in group '{}'",
            self.errors.len(),
            self.group
        )?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveError {}
