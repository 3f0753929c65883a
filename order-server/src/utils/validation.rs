//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use super::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: order item names
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Whitespace-only counts as empty. Length is measured in characters.
/// Errors name `field` in `details.field`.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}
