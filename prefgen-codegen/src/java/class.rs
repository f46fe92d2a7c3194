//! Wrapper class generation.

use super::{JavaWriter, SET_IMPORT};
use crate::accessors::AccessorGenerator;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use prefgen_schema::validation::is_identifier;
use prefgen_schema::{GroupIr, ValueType};
use std::collections::BTreeSet;

/// Header comment of generated files.
pub const GENERATED_HEADER: &str = "// Generated by prefgen. Do not edit.";

/// Generator for one wrapper class per declaration group.
pub struct ClassGenerator<'a> {
    ir: &'a GroupIr,
    config: &'a GeneratorConfig,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(ir: &'a GroupIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete class source.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the group name is not a valid
    /// class name.
    pub fn generate(&self) -> Result<String, CodegenError> {
        if !is_identifier(&self.ir.name) {
            return Err(CodegenError::generation(format!(
                "group name '{}' is not a valid class name",
                self.ir.name
            )));
        }

        let mut writer = JavaWriter::new(self.config.indent);

        if self.config.header {
            writer.emit_line(GENERATED_HEADER);
        }
        if let Some(package) = self.package() {
            writer.emit_statement(&format!("package {package}"));
            writer.emit_empty_line();
        }

        let imports = self.imports();
        for import in &imports {
            writer.emit_statement(&format!("import {import}"));
        }
        if !imports.is_empty() {
            writer.emit_empty_line();
        }

        if let Some(description) = &self.ir.description {
            writer.emit_javadoc(description);
        }
        writer.begin_block(&format!("public class {}", self.ir.name));

        self.generate_fields(&mut writer);
        writer.emit_empty_line();
        self.generate_constructor(&mut writer);

        let accessors = AccessorGenerator::new()
            .backend(&self.config.backend_field)
            .editor(&self.config.editor_field);
        for method in accessors.render_group(self.ir) {
            writer.emit_empty_line();
            writer.emit_method(&method);
        }

        writer.end_block();
        Ok(writer.finish())
    }

    /// Package of the class: the configured override, else the group's own.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.config
            .package
            .as_deref()
            .or(self.ir.package.as_deref())
    }

    /// Sorted, de-duplicated imports.
    #[must_use]
    pub fn imports(&self) -> BTreeSet<&str> {
        let mut imports: BTreeSet<&str> = self.config.imports.iter().map(String::as_str).collect();
        if self.ir.uses_type(ValueType::StringSet) {
            imports.insert(SET_IMPORT);
        }
        imports
    }

    /// Emits the backend field and, in chained mode, the editor field.
    fn generate_fields(&self, writer: &mut JavaWriter) {
        writer.emit_statement(&format!(
            "private final {} {}",
            self.config.backend_type, self.config.backend_field
        ));
        if let Some(editor_type) = self.ir.editor_mode.editor_type() {
            writer.emit_statement(&format!(
                "private final {} {}",
                editor_type, self.config.editor_field
            ));
        }
    }

    /// Emits a constructor assigning every field.
    fn generate_constructor(&self, writer: &mut JavaWriter) {
        let backend = &self.config.backend_field;
        let editor = &self.config.editor_field;

        let mut parameters = vec![format!("{} {}", self.config.backend_type, backend)];
        if let Some(editor_type) = self.ir.editor_mode.editor_type() {
            parameters.push(format!("{editor_type} {editor}"));
        }

        writer.begin_block(&format!("public {}({})", self.ir.name, parameters.join(", ")));
        writer.emit_statement(&format!("this.{backend} = {backend}"));
        if self.ir.editor_mode.is_chained() {
            writer.emit_statement(&format!("this.{editor} = {editor}"));
        }
        writer.end_block();
    }
}
