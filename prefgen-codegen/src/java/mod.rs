//! Java source emission.

pub mod class;
pub mod writer;

pub use class::ClassGenerator;
pub use writer::JavaWriter;

use crate::method::ReturnType;
use prefgen_schema::ValueType;

/// Import needed by `Set<String>` preferences.
pub const SET_IMPORT: &str = "java.util.Set";

/// Returns the Java spelling of a value type.
#[must_use]
pub const fn java_type(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Boolean => "boolean",
        ValueType::Float => "float",
        ValueType::Integer => "int",
        ValueType::Long => "long",
        ValueType::String => "String",
        ValueType::StringSet => "Set<String>",
    }
}

/// Returns the Java spelling of a return type.
#[must_use]
pub fn java_return_type(return_type: &ReturnType) -> &str {
    match return_type {
        ReturnType::Void => "void",
        ReturnType::Value(value_type) => java_type(*value_type),
        ReturnType::Named(name) => name,
    }
}
