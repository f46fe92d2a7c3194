//! Declaration validation.
//!
//! Resolution itself accepts any field name. These checks run over a resolved
//! batch and report every problem instead of stopping at the first one.

use crate::error::DeclarationError;
use crate::ir::Preference;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Validates a batch of resolved preferences.
///
/// # Arguments
/// * `preferences` - Preferences of one group, in declaration order
///
/// # Returns
/// Every problem found, empty if the batch is valid.
#[must_use]
pub fn validate_preferences(preferences: &[Preference]) -> Vec<DeclarationError> {
    let mut errors = Vec::new();
    let mut accessors: HashMap<&str, &str> = HashMap::new();
    let mut keys: HashMap<&str, &str> = HashMap::new();

    for pref in preferences {
        if !is_identifier(pref.accessor_name()) {
            errors.push(DeclarationError::InvalidFieldName {
                field: pref.field_name().to_string(),
                accessor: pref.accessor_name().to_string(),
            });
            continue;
        }

        match accessors.entry(pref.accessor_name()) {
            Entry::Occupied(first) => errors.push(DeclarationError::DuplicateAccessorName {
                accessor: pref.accessor_name().to_string(),
                first: first.get().to_string(),
                second: pref.field_name().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(pref.field_name());
            }
        }

        // Not an error: two accessors may alias one key.
        if let Some(first) = keys.insert(pref.storage_key(), pref.field_name()) {
            tracing::warn!(
                key = %pref.storage_key(),
                first = %first,
                second = %pref.field_name(),
                "storage key used by more than one preference"
            );
        }
    }

    errors
}

/// Returns true if `name` is a valid Java identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
