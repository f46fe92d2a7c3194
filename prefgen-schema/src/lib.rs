//! # prefgen Schema
//!
//! Preference declarations and their resolution.
//!
//! This crate provides:
//! - The closed catalog of supported value types
//! - Declaration records parsed from XML declaration documents
//! - Resolution of raw entries into `Preference` descriptors
//! - Batch validation of a declaration group

pub mod declarations;
pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use declarations::{EntryDef, GroupDef, RawEntry};
pub use error::{DeclarationError, ParseError, ResolveError};
pub use ir::{GroupIr, Preference, camel_case, capitalize};
pub use parser::parse_declarations;
pub use types::{EditorMode, ValueType};
