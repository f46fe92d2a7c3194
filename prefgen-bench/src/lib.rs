//! # prefgen Bench
//!
//! Fixtures for the generation benchmarks.

use prefgen_schema::ValueType;

/// Builds a declaration document with `entries` entries cycling through every value type.
#[must_use]
pub fn sample_declarations(entries: usize, chained: bool) -> String {
    let editor = if chained { "chained" } else { "immediate" };
    let mut xml = format!(
        "<preferences name=\"BenchSettings\" package=\"com.example.bench\" editor=\"{editor}\">\n"
    );

    for i in 0..entries {
        let value_type = ValueType::ALL[i % ValueType::ALL.len()];
        xml.push_str(&format!(
            "    <entry name=\"SETTING_{i}_{}\" type=\"{}\"",
            value_type.name().to_uppercase(),
            value_type.name()
        ));
        if i % 2 == 0 {
            xml.push_str(&format!(" default=\"{}\"", sample_literal(value_type)));
        }
        xml.push_str("/>\n");
    }

    xml.push_str("</preferences>\n");
    xml
}

/// Returns a default literal valid for the given type.
#[must_use]
pub const fn sample_literal(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Boolean => "true",
        ValueType::Float => "1.5f",
        ValueType::Integer => "42",
        ValueType::Long => "42L",
        ValueType::String => "&quot;text&quot;",
        ValueType::StringSet => "null",
    }
}
