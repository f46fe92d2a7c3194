//! Value type catalog and editor modes.
//!
//! The catalog is the closed set of types a preference can hold, each with the
//! type name used in generated signatures and the suffix of the backend
//! accessor methods (`getBoolean`, `putStringSet`, ...).

use std::fmt;

/// Supported preference value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Boolean flag.
    Boolean,
    /// 32-bit floating point.
    Float,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Text value.
    String,
    /// Unordered set of text values.
    StringSet,
}

impl ValueType {
    /// All catalog entries, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Boolean,
        Self::Float,
        Self::Integer,
        Self::Long,
        Self::String,
        Self::StringSet,
    ];

    /// Returns the type name used in generated signatures.
    #[must_use]
    pub const fn return_type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Integer => "int",
            Self::Long => "long",
            Self::String => "string",
            Self::StringSet => "set-of-string",
        }
    }

    /// Returns the suffix of the backend get/put methods.
    #[must_use]
    pub const fn method_suffix(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Integer => "Int",
            Self::Long => "Long",
            Self::String => "String",
            Self::StringSet => "StringSet",
        }
    }

    /// Returns the canonical declaration spelling.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::String => "string",
            Self::StringSet => "string_set",
        }
    }

    /// Parses a value type from a declaration spelling (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Some(Self::Boolean),
            "float" => Some(Self::Float),
            "integer" | "int" => Some(Self::Integer),
            "long" => Some(Self::Long),
            "string" => Some(Self::String),
            "string_set" | "stringset" | "set-of-string" => Some(Self::StringSet),
            _ => None,
        }
    }

    /// Returns true for the boolean type, whose getters use a configurable prefix.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.return_type_name())
    }
}

/// How generated setters write to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    /// Each setter opens an editor, writes, and applies immediately.
    #[default]
    Immediate,
    /// Setters write through a held editor handle and return it for chaining.
    Chained {
        /// Type name of the editor handle returned by setters.
        editor_type: String,
    },
}

impl EditorMode {
    /// Default editor type for chained mode.
    pub const DEFAULT_EDITOR_TYPE: &'static str = "Editor";

    /// Creates a chained mode returning the given editor type.
    #[must_use]
    pub fn chained(editor_type: impl Into<String>) -> Self {
        Self::Chained {
            editor_type: editor_type.into(),
        }
    }

    /// Returns the editor type for chained mode.
    #[must_use]
    pub fn editor_type(&self) -> Option<&str> {
        match self {
            Self::Immediate => None,
            Self::Chained { editor_type } => Some(editor_type),
        }
    }

    /// Returns true if setters chain through an editor handle.
    #[must_use]
    pub const fn is_chained(&self) -> bool {
        matches!(self, Self::Chained { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_type_names() {
        assert_eq!(ValueType::Boolean.return_type_name(), "boolean");
        assert_eq!(ValueType::Float.return_type_name(), "float");
        assert_eq!(ValueType::Integer.return_type_name(), "int");
        assert_eq!(ValueType::Long.return_type_name(), "long");
        assert_eq!(ValueType::String.return_type_name(), "string");
        assert_eq!(ValueType::StringSet.return_type_name(), "set-of-string");
    }

    #[test]
    fn test_method_suffixes() {
        assert_eq!(ValueType::Boolean.method_suffix(), "Boolean");
        assert_eq!(ValueType::Float.method_suffix(), "Float");
        assert_eq!(ValueType::Integer.method_suffix(), "Int");
        assert_eq!(ValueType::Long.method_suffix(), "Long");
        assert_eq!(ValueType::String.method_suffix(), "String");
        assert_eq!(ValueType::StringSet.method_suffix(), "StringSet");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ValueType::from_name("BOOLEAN"), Some(ValueType::Boolean));
        assert_eq!(ValueType::from_name("int"), Some(ValueType::Integer));
        assert_eq!(ValueType::from_name("integer"), Some(ValueType::Integer));
        assert_eq!(ValueType::from_name("stringSet"), Some(ValueType::StringSet));
        assert_eq!(ValueType::from_name("STRING_SET"), Some(ValueType::StringSet));
        assert_eq!(ValueType::from_name("double"), None);
        assert_eq!(ValueType::from_name(""), None);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for value_type in ValueType::ALL {
            assert_eq!(ValueType::from_name(value_type.name()), Some(value_type));
        }
    }

    #[test]
    fn test_editor_mode() {
        assert_eq!(EditorMode::default(), EditorMode::Immediate);
        assert!(!EditorMode::Immediate.is_chained());
        assert_eq!(EditorMode::Immediate.editor_type(), None);

        let chained = EditorMode::chained("Editor");
        assert!(chained.is_chained());
        assert_eq!(chained.editor_type(), Some("Editor"));
    }
}
