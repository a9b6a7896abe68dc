//! Centralized constants for `.env` parsing and value coercion.
//!
//! This module keeps the file-format tokens and reserved literal words in
//! one place so the parser and the coercion table cannot drift apart.

// =============================================================================
// File Format
// =============================================================================

/// File name looked up by `ConfigStore::from_dir`.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// A line whose trimmed text starts with this character is a comment.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value. Only the first occurrence splits.
pub const ASSIGNMENT: char = '=';

/// Quote characters stripped when they wrap the entire value.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];

// =============================================================================
// Reserved Literals (compared case-insensitively)
// =============================================================================

pub const TRUE_LITERALS: [&str; 2] = ["true", "(true)"];

pub const FALSE_LITERALS: [&str; 2] = ["false", "(false)"];

pub const NULL_LITERALS: [&str; 2] = ["null", "(null)"];

/// Coerced to an empty string.
pub const EMPTY_LITERALS: [&str; 2] = ["empty", "(empty)"];
