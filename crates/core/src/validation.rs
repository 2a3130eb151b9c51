//! Presence checks applied to request bodies before anything reaches the
//! database.

use crate::error::CoreError;

/// Require a non-empty `name` field.
///
/// Absent and empty names are rejected. Anything else passes through
/// untouched, whitespace included.
pub fn require_name(name: Option<&str>) -> Result<&str, CoreError> {
    match name {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::Validation("name is required".to_string())),
    }
}
