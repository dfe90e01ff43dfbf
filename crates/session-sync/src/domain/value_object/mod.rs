//! Value Object Module

pub mod role;
pub mod token;
pub mod username;

/// Shared presence rule for stored session fields.
///
/// A stored value counts as present only if it is non-empty after trimming
/// and is not one of the literal sentinel strings (`"null"`, `"undefined"`)
/// that show up when null-ish values get stringified by a careless writer.
pub(crate) fn presence(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        return None;
    }
    Some(trimmed)
}
