//! Resolved representation for code generation.
//!
//! A `Preference` is the fully-resolved descriptor of one declared entry:
//! storage key, accessor name, value type, default literal and boolean getter
//! prefix are all fixed when it is created. `GroupIr` resolves and validates a
//! whole declaration group at once.

use crate::declarations::{GroupDef, RawEntry};
use crate::error::{DeclarationError, ResolveError};
use crate::types::{EditorMode, ValueType};
use crate::validation::validate_preferences;

/// Getter prefix for boolean entries without an override.
pub const DEFAULT_BOOLEAN_PREFIX: &str = "is";

/// Field name reported when the group default type is unsupported.
pub const GROUP_DEFAULT_FIELD: &str = "<group default>";

/// Fully-resolved descriptor of one preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    field_name: String,
    storage_key: String,
    accessor_name: String,
    value_type: ValueType,
    default_value: Option<String>,
    boolean_prefix: Option<String>,
    description: Option<String>,
}

impl Preference {
    /// Resolves a raw entry against the group context.
    ///
    /// # Arguments
    /// * `entry` - The unresolved declaration
    /// * `group_default_type` - Type for entries without an explicit type
    /// * `preference_id` - Storage key override; the field name is used otherwise
    #[must_use]
    pub fn resolve(
        entry: &RawEntry,
        group_default_type: Option<ValueType>,
        preference_id: Option<&str>,
    ) -> Self {
        let value_type = entry
            .explicit_type
            .or(group_default_type)
            .unwrap_or(ValueType::String);

        let boolean_prefix = value_type.is_boolean().then(|| {
            entry
                .boolean_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_BOOLEAN_PREFIX.to_string())
        });

        let pref = Self {
            field_name: entry.field_name.clone(),
            storage_key: preference_id.unwrap_or(&entry.field_name).to_string(),
            accessor_name: camel_case(&entry.field_name),
            value_type,
            default_value: entry.explicit_default.clone(),
            boolean_prefix,
            description: None,
        };

        tracing::debug!(
            field = %pref.field_name,
            key = %pref.storage_key,
            value_type = %pref.value_type,
            "resolved preference"
        );

        pref
    }

    pub(crate) fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Declared field name.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Key used against the backing store.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Camel-cased accessor name.
    #[must_use]
    pub fn accessor_name(&self) -> &str {
        &self.accessor_name
    }

    /// Resolved value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns true if a default literal was declared.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Declared default literal, verbatim.
    #[must_use]
    pub fn default_value_literal(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Getter prefix; only set for boolean preferences.
    #[must_use]
    pub fn boolean_prefix(&self) -> Option<&str> {
        self.boolean_prefix.as_deref()
    }

    /// Declared description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Prefix of the getter name: the boolean prefix or `get`.
    #[must_use]
    pub fn getter_prefix(&self) -> &str {
        self.boolean_prefix.as_deref().unwrap_or("get")
    }

    /// Accessor name with its first character upper-cased.
    #[must_use]
    pub fn accessor_name_upper_first(&self) -> String {
        capitalize(&self.accessor_name)
    }
}

/// A resolved and validated declaration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIr {
    /// Group name.
    pub name: String,
    /// Target package.
    pub package: Option<String>,
    /// Resolved group default type.
    pub default_type: Option<ValueType>,
    /// Setter style.
    pub editor_mode: EditorMode,
    /// Description.
    pub description: Option<String>,
    /// Preferences in declaration order.
    pub preferences: Vec<Preference>,
}

impl GroupIr {
    /// Resolves every entry of a group and validates the batch.
    ///
    /// All problems are collected before returning, so one bad declaration
    /// never hides another.
    ///
    /// # Errors
    /// Returns `ResolveError` listing every invalid declaration.
    pub fn resolve(group: &GroupDef) -> Result<Self, ResolveError> {
        let mut errors = Vec::new();

        let default_type = group.default_type_name.as_deref().and_then(|name| {
            let resolved = ValueType::from_name(name);
            if resolved.is_none() {
                errors.push(DeclarationError::UnsupportedType {
                    field: GROUP_DEFAULT_FIELD.to_string(),
                    type_name: name.to_string(),
                });
            }
            resolved
        });

        let mut preferences = Vec::with_capacity(group.entries.len());
        for entry in &group.entries {
            let explicit_type = match entry.type_name.as_deref() {
                Some(name) => match ValueType::from_name(name) {
                    Some(value_type) => Some(value_type),
                    None => {
                        errors.push(DeclarationError::UnsupportedType {
                            field: entry.name.clone(),
                            type_name: name.to_string(),
                        });
                        continue;
                    }
                },
                None => None,
            };

            let raw = RawEntry {
                field_name: entry.name.clone(),
                explicit_type,
                explicit_default: entry.default_value.clone(),
                boolean_prefix: entry.boolean_prefix.clone(),
            };

            preferences.push(
                Preference::resolve(&raw, default_type, entry.key.as_deref())
                    .with_description(entry.description.clone()),
            );
        }

        errors.extend(validate_preferences(&preferences));

        if !errors.is_empty() {
            return Err(ResolveError {
                group: group.name.clone(),
                errors,
            });
        }

        tracing::debug!(
            group = %group.name,
            preferences = preferences.len(),
            "resolved declaration group"
        );

        Ok(Self {
            name: group.name.clone(),
            package: group.package.clone(),
            default_type,
            editor_mode: group.editor_mode.clone(),
            description: group.description.clone(),
            preferences,
        })
    }

    /// Returns true if any preference holds the given type.
    #[must_use]
    pub fn uses_type(&self, value_type: ValueType) -> bool {
        self.preferences
            .iter()
            .any(|p| p.value_type() == value_type)
    }
}

/// Converts an underscore-separated name to camelCase.
///
/// The whole name is lower-cased first, so `MAX_RETRY_COUNT` becomes
/// `maxRetryCount`. Empty segments contribute nothing.
#[must_use]
pub fn camel_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut segments = lower.split('_');
    let mut result = String::with_capacity(lower.len());

    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for segment in segments {
        result.push_str(&capitalize(segment));
    }

    result
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::EntryDef;

    fn group_with(entries: Vec<EntryDef>) -> GroupDef {
        let mut group = GroupDef::new("Settings".to_string());
        group.entries = entries;
        group
    }

    fn entry(name: &str) -> EntryDef {
        EntryDef::new(name.to_string())
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("MAX_RETRY_COUNT"), "maxRetryCount");
        assert_eq!(camel_case("count"), "count");
        assert_eq!(camel_case("A_B"), "aB");
        assert_eq!(camel_case("dark_mode"), "darkMode");
        assert_eq!(camel_case("userName"), "username");
    }

    #[test]
    fn test_camel_case_degenerate_names() {
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("a__b"), "aB");
        assert_eq!(camel_case("trailing_"), "trailing");
        assert_eq!(camel_case("_leading"), "Leading");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("darkMode"), "DarkMode");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_resolve_type_falls_back_to_group_default() {
        let raw = RawEntry::new("volume");
        let pref = Preference::resolve(&raw, Some(ValueType::Float), None);
        assert_eq!(pref.value_type(), ValueType::Float);

        let pref = Preference::resolve(&raw, None, None);
        assert_eq!(pref.value_type(), ValueType::String);
    }

    #[test]
    fn test_resolve_explicit_type_wins() {
        let raw = RawEntry::new("volume").with_type(ValueType::Integer);
        let pref = Preference::resolve(&raw, Some(ValueType::Float), None);
        assert_eq!(pref.value_type(), ValueType::Integer);
    }

    #[test]
    fn test_resolve_storage_key() {
        let raw = RawEntry::new("MAX_RETRY_COUNT");
        let pref = Preference::resolve(&raw, None, None);
        assert_eq!(pref.storage_key(), "MAX_RETRY_COUNT");
        assert_eq!(pref.accessor_name(), "maxRetryCount");

        let pref = Preference::resolve(&raw, None, Some("retries"));
        assert_eq!(pref.storage_key(), "retries");
        assert_eq!(pref.accessor_name(), "maxRetryCount");
    }

    #[test]
    fn test_resolve_default_literal_is_verbatim() {
        let raw = RawEntry::new("greeting").with_default("\"hello\" + suffix");
        let pref = Preference::resolve(&raw, None, None);
        assert!(pref.has_default());
        assert_eq!(pref.default_value_literal(), Some("\"hello\" + suffix"));

        let pref = Preference::resolve(&RawEntry::new("greeting"), None, None);
        assert!(!pref.has_default());
        assert_eq!(pref.default_value_literal(), None);
    }

    #[test]
    fn test_resolve_boolean_prefix() {
        let raw = RawEntry::new("dark_mode").with_type(ValueType::Boolean);
        let pref = Preference::resolve(&raw, None, None);
        assert_eq!(pref.boolean_prefix(), Some("is"));
        assert_eq!(pref.getter_prefix(), "is");

        let raw = raw.with_boolean_prefix("has");
        let pref = Preference::resolve(&raw, None, None);
        assert_eq!(pref.getter_prefix(), "has");

        let raw = RawEntry::new("name").with_boolean_prefix("has");
        let pref = Preference::resolve(&raw, None, None);
        assert_eq!(pref.boolean_prefix(), None);
        assert_eq!(pref.getter_prefix(), "get");
    }

    #[test]
    fn test_resolve_empty_field_name_is_total() {
        let pref = Preference::resolve(&RawEntry::new(""), None, None);
        assert_eq!(pref.accessor_name(), "");
        assert_eq!(pref.accessor_name_upper_first(), "");
    }

    #[test]
    fn test_group_ir_resolve() {
        let mut dark_mode = entry("dark_mode");
        dark_mode.type_name = Some("boolean".to_string());
        dark_mode.default_value = Some("false".to_string());
        let mut username = entry("username");
        username.key = Some("pref_username".to_string());
        username.description = Some("Signed-in user.".to_string());

        let mut group = group_with(vec![dark_mode, username]);
        group.default_type_name = Some("string".to_string());
        group.editor_mode = EditorMode::chained("Editor");

        let ir = GroupIr::resolve(&group).expect("Failed to resolve");
        assert_eq!(ir.name, "Settings");
        assert_eq!(ir.default_type, Some(ValueType::String));
        assert!(ir.editor_mode.is_chained());
        assert_eq!(ir.preferences.len(), 2);
        assert_eq!(ir.preferences[0].accessor_name(), "darkMode");
        assert_eq!(ir.preferences[1].storage_key(), "pref_username");
        assert_eq!(ir.preferences[1].description(), Some("Signed-in user."));
        assert!(ir.uses_type(ValueType::Boolean));
        assert!(!ir.uses_type(ValueType::StringSet));
    }

    #[test]
    fn test_group_ir_collects_all_errors() {
        let mut ratio = entry("ratio");
        ratio.type_name = Some("double".to_string());

        let mut group = group_with(vec![
            entry(""),
            ratio,
            entry("DARK_MODE"),
            entry("dark_mode"),
        ]);
        group.default_type_name = Some("object".to_string());

        let err = GroupIr::resolve(&group).expect_err("Expected errors");
        assert_eq!(err.group, "Settings");
        assert_eq!(err.errors.len(), 4);
        assert!(err.errors.contains(&DeclarationError::UnsupportedType {
            field: GROUP_DEFAULT_FIELD.to_string(),
            type_name: "object".to_string(),
        }));
        assert!(err.errors.contains(&DeclarationError::UnsupportedType {
            field: "ratio".to_string(),
            type_name: "double".to_string(),
        }));
        assert!(err.errors.contains(&DeclarationError::InvalidFieldName {
            field: String::new(),
            accessor: String::new(),
        }));
        assert!(err.errors.contains(&DeclarationError::DuplicateAccessorName {
            accessor: "darkMode".to_string(),
            first: "DARK_MODE".to_string(),
            second: "dark_mode".to_string(),
        }));
    }

    #[test]
    fn test_group_ir_preserves_declaration_order() {
        let group = group_with(vec![entry("zeta"), entry("alpha"), entry("mid")]);
        let ir = GroupIr::resolve(&group).expect("Failed to resolve");
        let names: Vec<_> = ir.preferences.iter().map(Preference::field_name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
