//! # prefgen
//!
//! Typed accessor generation for key-value preference stores.
//!
//! prefgen turns preference declarations into wrapper classes with typed
//! getters and setters for a `SharedPreferences`-style backend.
//!
//! ## Features
//!
//! - **Closed type catalog** - boolean, float, int, long, string and string-set values
//! - **Deterministic output** - accessors follow declaration order
//! - **Batch diagnostics** - every invalid declaration in a group is reported at once
//! - **Two setter styles** - apply-immediately or chained through an editor handle
//!
//! ## Quick Start
//!
//! ```ignore
//! use prefgen::prelude::*;
//!
//! let xml = r#"<preferences name="Settings" package="com.example">
//!     <entry name="dark_mode" type="boolean" default="false"/>
//! </preferences>"#;
//!
//! let source = generate_from_xml(xml, &GeneratorConfig::default())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type catalog, declaration parsing and resolution
//! - [`codegen`] - Accessor specifications and Java emission

pub mod prelude;

/// Declarations, type catalog and resolution.
pub mod schema {
    pub use prefgen_schema::*;
}

/// Accessor generation and emission.
pub mod codegen {
    pub use prefgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use prefgen_codegen::{
    AccessorGenerator, CodegenError, Generator, GeneratorConfig, MethodSpec, generate_from_file,
    generate_from_xml, generate_to_dir,
};
pub use prefgen_schema::{EditorMode, GroupIr, Preference, RawEntry, ValueType};
