//! Line tokenizer for `.env` files.
//!
//! Responsibilities:
//! - Classify a single line as blank, comment, assignment, or ignored.
//! - Split assignments on the first `=` and strip one wrapping quote pair.
//!
//! Does NOT handle:
//! - Value coercion (see `value.rs`).
//! - Key normalization (see `key.rs`). Keys come back exactly as written.
//! - Escapes, interpolation, `export` prefixes, multi-line values, or
//!   trailing comments. None of these are part of the format.
//!
//! Invariants:
//! - Only fully empty lines are `Blank`; whitespace-only lines carry no `=`
//!   and are therefore `Ignored`.
//! - The value of an `Assignment` may itself contain `=`.

use crate::constants::{ASSIGNMENT, COMMENT_PREFIX, QUOTE_CHARS};

/// Classification of one line of an env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Assignment { key: &'a str, value: &'a str },
    /// A non-comment line with no `=`.
    Ignored,
}

/// Classify one line. `line` must not contain its terminator.
pub fn parse_line(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.trim().starts_with(COMMENT_PREFIX) {
        return Line::Comment;
    }

    match line.split_once(ASSIGNMENT) {
        Some((key, value)) => Line::Assignment {
            key: key.trim(),
            value: unquote(value.trim()),
        },
        None => Line::Ignored,
    }
}

/// Strip a single pair of matching quotes wrapping the whole value.
///
/// The inner text is returned verbatim; there is no escape processing, so
/// `"a"b"` yields `a"b`.
pub fn unquote(value: &str) -> &str {
    QUOTE_CHARS
        .iter()
        .find_map(|&quote| {
            (value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote))
                .then(|| &value[1..value.len() - 1])
        })
        .unwrap_or(value)
}
