//! Main code generator.

use crate::accessors::AccessorGenerator;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::java::ClassGenerator;
use crate::method::MethodSpec;
use prefgen_schema::GroupIr;

/// Generates source for one resolved declaration group.
pub struct Generator<'a> {
    ir: &'a GroupIr,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a GroupIr) -> Self {
        Self::with_config(ir, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(ir: &'a GroupIr, config: GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Returns the accessor specifications in declaration order.
    #[must_use]
    pub fn methods(&self) -> Vec<MethodSpec> {
        AccessorGenerator::new()
            .backend(&self.config.backend_field)
            .editor(&self.config.editor_field)
            .render_group(self.ir)
    }

    /// Generates the wrapper class source.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the group name is not a valid
    /// class name.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let source = ClassGenerator::new(self.ir, &self.config).generate()?;

        tracing::debug!(
            group = %self.ir.name,
            preferences = self.ir.preferences.len(),
            bytes = source.len(),
            "generated wrapper class"
        );

        Ok(source)
    }

    /// File name of the generated class.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.java", self.ir.name)
    }
}
