//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use prefgen::prelude::*;
//! ```

// Declarations and resolution
pub use prefgen_schema::{
    DeclarationError, EditorMode, EntryDef, GroupDef, GroupIr, ParseError, Preference, RawEntry,
    ResolveError, ValueType, parse_declarations,
};

// Generation
pub use prefgen_codegen::{
    AccessorGenerator, CodegenError, Generator, GeneratorConfig, MethodSpec, Parameter,
    ReturnType, generate_from_file, generate_from_xml, generate_to_dir,
};
