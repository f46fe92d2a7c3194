//! Generator configuration.

/// Settings for emitted wrapper classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package override; the group's own package is used otherwise.
    pub package: Option<String>,
    /// Type of the backing store field.
    pub backend_type: String,
    /// Name of the backing store field.
    pub backend_field: String,
    /// Name of the editor field in chained mode.
    pub editor_field: String,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Extra imports emitted in every class.
    pub imports: Vec<String>,
    /// Whether to emit the generated-file header comment.
    pub header: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package: None,
            backend_type: "SharedPreferences".to_string(),
            backend_field: "backend".to_string(),
            editor_field: "editor".to_string(),
            indent: 4,
            imports: Vec::new(),
            header: true,
        }
    }

    /// Sets the package for all generated classes.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Sets the backing store type.
    #[must_use]
    pub fn backend_type(mut self, backend_type: impl Into<String>) -> Self {
        self.backend_type = backend_type.into();
        self
    }

    /// Sets the backing store field name.
    #[must_use]
    pub fn backend_field(mut self, name: impl Into<String>) -> Self {
        self.backend_field = name.into();
        self
    }

    /// Sets the editor field name.
    #[must_use]
    pub fn editor_field(mut self, name: impl Into<String>) -> Self {
        self.editor_field = name.into();
        self
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Adds an import to every generated class.
    #[must_use]
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Enables or disables the header comment.
    #[must_use]
    pub fn header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package, None);
        assert_eq!(config.backend_type, "SharedPreferences");
        assert_eq!(config.backend_field, "backend");
        assert_eq!(config.editor_field, "editor");
        assert_eq!(config.indent, 4);
        assert!(config.imports.is_empty());
        assert!(config.header);
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .package("com.example")
            .backend_type("Prefs")
            .backend_field("prefs")
            .editor_field("edits")
            .indent(2)
            .import("android.content.SharedPreferences")
            .header(false);

        assert_eq!(config.package.as_deref(), Some("com.example"));
        assert_eq!(config.backend_type, "Prefs");
        assert_eq!(config.backend_field, "prefs");
        assert_eq!(config.editor_field, "edits");
        assert_eq!(config.indent, 2);
        assert_eq!(config.imports, ["android.content.SharedPreferences"]);
        assert!(!config.header);
    }
}
