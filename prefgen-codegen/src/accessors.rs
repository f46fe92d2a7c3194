//! Accessor method generation.
//!
//! Each `Preference` renders to, in order: a zero-argument getter (only when a
//! default literal was declared), a getter taking an explicit default, and one
//! setter whose shape depends on the group's editor mode.

use crate::method::{MethodSpec, ReturnType};
use prefgen_schema::{EditorMode, GroupIr, Preference};

/// Parameter name of the explicit-default getter.
pub const PARAM_DEFAULT_VALUE: &str = "defaultValue";

/// Parameter name of setters.
pub const PARAM_VALUE: &str = "value";

/// Generator for preference getters and setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorGenerator {
    backend: String,
    editor: String,
}

impl AccessorGenerator {
    /// Creates a generator reading from `backend` and chaining through `editor`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: "backend".to_string(),
            editor: "editor".to_string(),
        }
    }

    /// Sets the expression of the backing store.
    #[must_use]
    pub fn backend(mut self, expr: impl Into<String>) -> Self {
        self.backend = expr.into();
        self
    }

    /// Sets the expression of the held editor handle.
    #[must_use]
    pub fn editor(mut self, expr: impl Into<String>) -> Self {
        self.editor = expr.into();
        self
    }

    /// Renders every preference of a group, in declaration order.
    #[must_use]
    pub fn render_group(&self, ir: &GroupIr) -> Vec<MethodSpec> {
        ir.preferences
            .iter()
            .flat_map(|pref| self.render(pref, &ir.editor_mode))
            .collect()
    }

    /// Renders the accessors of one preference.
    #[must_use]
    pub fn render(&self, pref: &Preference, mode: &EditorMode) -> Vec<MethodSpec> {
        let mut methods = Vec::with_capacity(3);

        if let Some(default_literal) = pref.default_value_literal() {
            methods.push(self.default_getter(pref, default_literal));
        }
        methods.push(self.getter(pref));
        methods.push(match mode {
            EditorMode::Immediate => self.immediate_setter(pref),
            EditorMode::Chained { editor_type } => self.chained_setter(pref, editor_type),
        });

        methods
    }

    /// Zero-argument getter falling back to the declared default.
    fn default_getter(&self, pref: &Preference, default_literal: &str) -> MethodSpec {
        let key = pref.storage_key();

        MethodSpec::new(getter_name(pref), ReturnType::Value(pref.value_type()))
            .statement(format!(
                "return {}.get{}({}, {})",
                self.backend,
                pref.value_type().method_suffix(),
                string_literal(key),
                default_literal
            ))
            .doc(with_description(
                pref,
                format!("gets '{key}' from the preferences, <b>{default_literal}</b> if not yet set."),
            ))
    }

    /// Getter taking the fallback value as a parameter.
    fn getter(&self, pref: &Preference) -> MethodSpec {
        let key = pref.storage_key();

        MethodSpec::new(getter_name(pref), ReturnType::Value(pref.value_type()))
            .param(PARAM_DEFAULT_VALUE, pref.value_type())
            .statement(format!(
                "return {}.get{}({}, {})",
                self.backend,
                pref.value_type().method_suffix(),
                string_literal(key),
                PARAM_DEFAULT_VALUE
            ))
            .doc(with_description(
                pref,
                format!(
                    "gets '{key}' from the preferences.\n@param {PARAM_DEFAULT_VALUE} the default value to use"
                ),
            ))
    }

    /// Setter that writes and applies in one call.
    fn immediate_setter(&self, pref: &Preference) -> MethodSpec {
        MethodSpec::new(setter_name(pref), ReturnType::Void)
            .param(PARAM_VALUE, pref.value_type())
            .statement(format!(
                "{}.edit().put{}({}, {}).apply()",
                self.backend,
                pref.value_type().method_suffix(),
                string_literal(pref.storage_key()),
                PARAM_VALUE
            ))
            .doc(setter_doc(pref))
    }

    /// Setter that writes through the held editor and returns it.
    fn chained_setter(&self, pref: &Preference, editor_type: &str) -> MethodSpec {
        MethodSpec::new(setter_name(pref), ReturnType::Named(editor_type.to_string()))
            .param(PARAM_VALUE, pref.value_type())
            .statement(format!(
                "{}.put{}({}, {})",
                self.editor,
                pref.value_type().method_suffix(),
                string_literal(pref.storage_key()),
                PARAM_VALUE
            ))
            .statement(format!("return {}", self.editor))
            .doc(setter_doc(pref))
    }
}

impl Default for AccessorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Getter name: boolean prefix or `get`, then the capitalized accessor name.
#[must_use]
pub fn getter_name(pref: &Preference) -> String {
    format!("{}{}", pref.getter_prefix(), pref.accessor_name_upper_first())
}

/// Setter name: `set` followed by the capitalized accessor name.
#[must_use]
pub fn setter_name(pref: &Preference) -> String {
    format!("set{}", pref.accessor_name_upper_first())
}

/// Quotes a storage key as a string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

fn setter_doc(pref: &Preference) -> String {
    let key = pref.storage_key();
    with_description(
        pref,
        format!("sets '{key}' in the preferences.\n@param {PARAM_VALUE} the new value for {key}"),
    )
}

fn with_description(pref: &Preference, doc: String) -> String {
    match pref.description() {
        Some(description) => format!("{description}\n{doc}"),
        None => doc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefgen_schema::{RawEntry, ValueType};

    fn resolve(entry: RawEntry, group_default: Option<ValueType>) -> Preference {
        Preference::resolve(&entry, group_default, None)
    }

    #[test]
    fn test_dark_mode_immediate() {
        let pref = resolve(
            RawEntry::new("dark_mode")
                .with_type(ValueType::Boolean)
                .with_default("false"),
            Some(ValueType::String),
        );
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::Immediate);

        assert_eq!(methods.len(), 3);

        assert_eq!(methods[0].name, "isDarkMode");
        assert!(methods[0].is_nullary());
        assert_eq!(methods[0].return_type, ReturnType::Value(ValueType::Boolean));
        assert_eq!(
            methods[0].body,
            ["return backend.getBoolean(\"dark_mode\", false)"]
        );

        assert_eq!(methods[1].name, "isDarkMode");
        assert_eq!(methods[1].parameters.len(), 1);
        assert_eq!(methods[1].parameters[0].name, "defaultValue");
        assert_eq!(methods[1].parameters[0].ty, ValueType::Boolean);
        assert_eq!(
            methods[1].body,
            ["return backend.getBoolean(\"dark_mode\", defaultValue)"]
        );

        assert_eq!(methods[2].name, "setDarkMode");
        assert_eq!(methods[2].parameters[0].name, "value");
        assert_eq!(methods[2].parameters[0].ty, ValueType::Boolean);
        assert!(methods[2].return_type.is_void());
        assert_eq!(
            methods[2].body,
            ["backend.edit().putBoolean(\"dark_mode\", value).apply()"]
        );
    }

    #[test]
    fn test_username_chained() {
        let pref = resolve(RawEntry::new("username"), Some(ValueType::String));
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::chained("Editor"));

        assert_eq!(methods.len(), 2);

        assert_eq!(methods[0].name, "getUsername");
        assert_eq!(methods[0].parameters[0].ty, ValueType::String);
        assert_eq!(methods[0].return_type, ReturnType::Value(ValueType::String));

        assert_eq!(methods[1].name, "setUsername");
        assert_eq!(methods[1].parameters[0].ty, ValueType::String);
        assert_eq!(methods[1].return_type, ReturnType::Named("Editor".to_string()));
        assert_eq!(
            methods[1].body,
            ["editor.putString(\"username\", value)", "return editor"]
        );
    }

    #[test]
    fn test_getter_count_follows_default() {
        let generator = AccessorGenerator::new();
        for value_type in ValueType::ALL {
            let with_default = resolve(
                RawEntry::new("x")
                    .with_type(value_type)
                    .with_default("d"),
                None,
            );
            let without_default = resolve(RawEntry::new("x").with_type(value_type), None);

            let getters = |methods: Vec<MethodSpec>| {
                methods
                    .iter()
                    .filter(|m| !m.name.starts_with("set"))
                    .count()
            };
            assert_eq!(getters(generator.render(&with_default, &EditorMode::Immediate)), 2);
            assert_eq!(getters(generator.render(&without_default, &EditorMode::Immediate)), 1);
        }
    }

    #[test]
    fn test_boolean_prefix_override() {
        let pref = resolve(
            RawEntry::new("notifications")
                .with_type(ValueType::Boolean)
                .with_boolean_prefix("has"),
            None,
        );
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::Immediate);
        assert_eq!(methods[0].name, "hasNotifications");
    }

    #[test]
    fn test_non_boolean_getters_use_get() {
        let pref = resolve(RawEntry::new("MAX_RETRY_COUNT").with_type(ValueType::Integer), None);
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::Immediate);
        assert_eq!(methods[0].name, "getMaxRetryCount");
        assert_eq!(
            methods[0].body,
            ["return backend.getInt(\"MAX_RETRY_COUNT\", defaultValue)"]
        );
        assert_eq!(methods[1].name, "setMaxRetryCount");
    }

    #[test]
    fn test_storage_key_override_is_used_everywhere() {
        let entry = RawEntry::new("username").with_default("\"guest\"");
        let pref = Preference::resolve(&entry, None, Some("pref_user"));
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::Immediate);

        assert!(methods.iter().all(|m| m.body[0].contains("\"pref_user\"")));
        assert_eq!(methods[0].body, ["return backend.getString(\"pref_user\", \"guest\")"]);
    }

    #[test]
    fn test_custom_receivers() {
        let pref = resolve(RawEntry::new("volume").with_type(ValueType::Float), None);
        let generator = AccessorGenerator::new().backend("prefs").editor("this.edits");

        let immediate = generator.render(&pref, &EditorMode::Immediate);
        assert_eq!(immediate[0].body, ["return prefs.getFloat(\"volume\", defaultValue)"]);
        assert_eq!(immediate[1].body, ["prefs.edit().putFloat(\"volume\", value).apply()"]);

        let chained = generator.render(&pref, &EditorMode::chained("Editor"));
        assert_eq!(
            chained[1].body,
            ["this.edits.putFloat(\"volume\", value)", "return this.edits"]
        );
    }

    #[test]
    fn test_doc_comments() {
        let entry = RawEntry::new("dark_mode")
            .with_type(ValueType::Boolean)
            .with_default("false");
        let pref = Preference::resolve(&entry, None, None);
        let methods = AccessorGenerator::new().render(&pref, &EditorMode::Immediate);

        assert_eq!(
            methods[0].doc.as_deref(),
            Some("gets 'dark_mode' from the preferences, <b>false</b> if not yet set.")
        );
        assert_eq!(
            methods[1].doc.as_deref(),
            Some("gets 'dark_mode' from the preferences.\n@param defaultValue the default value to use")
        );
        assert_eq!(
            methods[2].doc.as_deref(),
            Some("sets 'dark_mode' in the preferences.\n@param value the new value for dark_mode")
        );
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(string_literal("c:\\tmp"), "\"c:\\\\tmp\"");
    }
}
