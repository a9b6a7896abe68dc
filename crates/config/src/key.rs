//! Lookup key normalization.
//!
//! Lookup keys accept dot notation (`app.name`) and any letter case; they are
//! folded into the `UPPER_SNAKE_CASE` form env files conventionally use.
//! Stored keys are never normalized, so a lookup only succeeds when the file
//! itself spells the key in that form.

/// Upper-case `key` (ASCII only) and replace every `.` with `_`.
pub fn normalize_key(key: &str) -> String {
    key.to_ascii_uppercase().replace('.', "_")
}
