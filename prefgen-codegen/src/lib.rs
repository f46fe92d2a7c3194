//! # prefgen Codegen
//!
//! Accessor generation from preference declarations.
//!
//! This crate provides:
//! - Getter/setter method specifications for resolved preferences
//! - Java wrapper class emission
//! - Build script integration

pub mod accessors;
pub mod config;
pub mod error;
pub mod generator;
pub mod java;
pub mod method;

pub use accessors::AccessorGenerator;
pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use method::{MethodSpec, Parameter, ReturnType};

use prefgen_schema::GroupIr;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Generates Java source for every group of a declaration document.
///
/// # Arguments
/// * `xml` - Declaration document content
/// * `config` - Emission settings
///
/// # Returns
/// Generated classes, concatenated in document order.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution, or generation fails.
pub fn generate_from_xml(xml: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let mut output = String::new();

    for (_, source) in generate_classes(xml, config)? {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&source);
    }

    Ok(output)
}

/// Generates Java source from a declaration file.
///
/// # Arguments
/// * `path` - Path to the declaration document
/// * `config` - Emission settings
///
/// # Returns
/// Generated classes, concatenated in document order.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution, or generation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, config)
}

/// Writes one `<Group>.java` file per declaration group into `out_dir`.
///
/// Intended for build scripts; the output directory is created if missing.
///
/// # Arguments
/// * `input` - Path to the declaration document
/// * `out_dir` - Directory receiving the generated files
/// * `config` - Emission settings
///
/// # Returns
/// Paths of the written files, in document order.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution, generation, or
/// writing fails. Nothing is written unless every group generates.
pub fn generate_to_dir(
    input: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, CodegenError> {
    let xml = std::fs::read_to_string(input)?;
    let classes = generate_classes(&xml, config)?;

    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(classes.len());
    for (file_name, source) in classes {
        let path = out_dir.join(file_name);
        std::fs::write(&path, source)?;
        tracing::info!(path = %path.display(), "wrote generated class");
        written.push(path);
    }

    Ok(written)
}

/// Parses, resolves and generates every group, returning file names and sources.
///
/// Group names must be unique within a document since each maps to one class.
fn generate_classes(
    xml: &str,
    config: &GeneratorConfig,
) -> Result<Vec<(String, String)>, CodegenError> {
    let groups = prefgen_schema::parse_declarations(xml)?;

    let mut seen = HashSet::with_capacity(groups.len());
    let mut classes = Vec::with_capacity(groups.len());
    for group in &groups {
        if !seen.insert(group.name.as_str()) {
            return Err(CodegenError::generation(format!(
                "duplicate preferences group '{}'",
                group.name
            )));
        }

        let ir = GroupIr::resolve(group)?;
        let generator = Generator::with_config(&ir, config.clone());
        classes.push((generator.file_name(), generator.generate()?));
    }

    Ok(classes)
}
