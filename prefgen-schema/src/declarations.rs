//! Preference declaration records.
//!
//! `GroupDef` and `EntryDef` hold declarations as written, with type names
//! still unchecked. `RawEntry` is the typed, unresolved input to resolution.

use crate::types::{EditorMode, ValueType};

/// A declaration group: one generated wrapper class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDef {
    /// Group name, used as the generated class name.
    pub name: String,
    /// Target package.
    pub package: Option<String>,
    /// Default type for entries without an explicit type.
    pub default_type_name: Option<String>,
    /// Setter style for the whole group.
    pub editor_mode: EditorMode,
    /// Description.
    pub description: Option<String>,
    /// Entries in declaration order.
    pub entries: Vec<EntryDef>,
}

impl GroupDef {
    /// Creates a new empty group with immediate setters.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            package: None,
            default_type_name: None,
            editor_mode: EditorMode::Immediate,
            description: None,
            entries: Vec::new(),
        }
    }

    /// Adds an entry to the group.
    pub fn add_entry(&mut self, entry: EntryDef) {
        self.entries.push(entry);
    }

    /// Looks up an entry by its declared name.
    #[must_use]
    pub fn get_entry(&self, name: &str) -> Option<&EntryDef> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// A declared entry as written in the declaration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDef {
    /// Declared field name.
    pub name: String,
    /// Declared type name (unchecked).
    pub type_name: Option<String>,
    /// Default value literal.
    pub default_value: Option<String>,
    /// Getter prefix for boolean entries.
    pub boolean_prefix: Option<String>,
    /// Storage key override.
    pub key: Option<String>,
    /// Description.
    pub description: Option<String>,
}

impl EntryDef {
    /// Creates a new entry with only a name.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            type_name: None,
            default_value: None,
            boolean_prefix: None,
            key: None,
            description: None,
        }
    }
}

/// Unresolved input for a single preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Declared field name.
    pub field_name: String,
    /// Explicit per-entry type.
    pub explicit_type: Option<ValueType>,
    /// Explicit default literal, passed through verbatim.
    pub explicit_default: Option<String>,
    /// Getter prefix override, only used for boolean entries.
    pub boolean_prefix: Option<String>,
}

impl RawEntry {
    /// Creates a raw entry with no type, default or prefix.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            explicit_type: None,
            explicit_default: None,
            boolean_prefix: None,
        }
    }

    /// Sets the explicit type.
    #[must_use]
    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.explicit_type = Some(value_type);
        self
    }

    /// Sets the default literal.
    #[must_use]
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.explicit_default = Some(literal.into());
        self
    }

    /// Sets the boolean getter prefix.
    #[must_use]
    pub fn with_boolean_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.boolean_prefix = Some(prefix.into());
        self
    }
}
