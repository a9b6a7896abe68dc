//! Coerced configuration values.
//!
//! Responsibilities:
//! - Define `Value`, the tagged union returned by store lookups.
//! - Coerce raw stored text into booleans, null, empty strings, and numbers.
//! - Convert between `Value` and plain Rust types.
//!
//! Does NOT handle:
//! - Parsing lines or stripping quotes (see `parser.rs`).
//! - Defaults. A caller's default is converted into a `Value` as-is and
//!   never passes through `Value::coerce`.
//!
//! Invariants:
//! - Coercion never fails; text that matches no rule stays a string.
//! - Numeric text with a `.` becomes `Float`; without one it becomes `Int`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{EMPTY_LITERALS, FALSE_LITERALS, NULL_LITERALS, TRUE_LITERALS};
use crate::error::ValueError;

/// A configuration value after coercion.
///
/// Serializes as the bare JSON scalar (`true`, `42`, `1.5`, `"text"`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Coerce raw stored text.
    ///
    /// The text is trimmed, then checked case-insensitively against the
    /// reserved literals (`true`, `(false)`, `null`, `empty`, ...), then
    /// against the numeric grammar. Anything else is returned as the trimmed
    /// string.
    pub fn coerce(raw: &str) -> Self {
        let value = raw.trim();
        let lower = value.to_ascii_lowercase();
        let lower = lower.as_str();

        if TRUE_LITERALS.contains(&lower) {
            return Value::Bool(true);
        }
        if FALSE_LITERALS.contains(&lower) {
            return Value::Bool(false);
        }
        if NULL_LITERALS.contains(&lower) {
            return Value::Null;
        }
        if EMPTY_LITERALS.contains(&lower) {
            return Value::Str(String::new());
        }

        if is_numeric(value) {
            if value.contains('.') {
                if let Ok(float) = value.parse() {
                    return Value::Float(float);
                }
            } else {
                return Value::Int(parse_integer(value));
            }
        }

        Value::Str(value.to_string())
    }

    /// Short name of the variant, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Convert into a `serde_json::Value`.
    ///
    /// Non-finite floats cannot be represented in JSON and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Numeric-string detection.
///
/// Accepts `[+-]? (digits ("." digits*)? | "." digits) ([eE] [+-]? digits)?`.
/// Rejects words Rust's float parser would accept (`inf`, `NaN`), hex
/// literals, and embedded whitespace.
pub fn is_numeric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Integer value of numeric text without a decimal point.
///
/// Text with an exponent, or outside the `i64` range, is evaluated as a
/// float and saturated into `i64`.
fn parse_integer(text: &str) -> i64 {
    text.parse::<i64>()
        .unwrap_or_else(|_| text.parse::<f64>().map_or(0, |float| float as i64))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<Value> for bool {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(ValueError::TypeMismatch {
            expected: "bool",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or(ValueError::TypeMismatch {
            expected: "int",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or(ValueError::TypeMismatch {
            expected: "float",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for String {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(ValueError::TypeMismatch {
                expected: "string",
                found: other.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_booleans_case_insensitive() {
        for raw in ["true", "TRUE", "True", "(true)", "(TRUE)"] {
            assert_eq!(Value::coerce(raw), Value::Bool(true), "input: {raw}");
        }
        for raw in ["false", "FALSE", "(false)", "(False)"] {
            assert_eq!(Value::coerce(raw), Value::Bool(false), "input: {raw}");
        }
    }

    #[test]
    fn test_reserved_null_and_empty() {
        assert_eq!(Value::coerce("null"), Value::Null);
        assert_eq!(Value::coerce("(NULL)"), Value::Null);
        assert_eq!(Value::coerce("empty"), Value::Str(String::new()));
        assert_eq!(Value::coerce("(Empty)"), Value::Str(String::new()));
    }

    #[test]
    fn test_reserved_words_need_exact_match() {
        assert_eq!(Value::coerce("yes"), Value::Str("yes".into()));
        assert_eq!(Value::coerce("(true"), Value::Str("(true".into()));
        assert_eq!(Value::coerce("truee"), Value::Str("truee".into()));
        assert_eq!(Value::coerce("1"), Value::Int(1));
    }

    #[test]
    fn test_coerce_trims_before_matching() {
        assert_eq!(Value::coerce("  true "), Value::Bool(true));
        assert_eq!(Value::coerce(" 42 "), Value::Int(42));
        assert_eq!(Value::coerce("  padded  "), Value::Str("padded".into()));
    }

    #[test]
    fn test_integers() {
        assert_eq!(Value::coerce("0"), Value::Int(0));
        assert_eq!(Value::coerce("-17"), Value::Int(-17));
        assert_eq!(Value::coerce("+8"), Value::Int(8));
        assert_eq!(Value::coerce("007"), Value::Int(7));
    }

    #[test]
    fn test_floats() {
        assert_eq!(Value::coerce("1.5"), Value::Float(1.5));
        assert_eq!(Value::coerce("-0.25"), Value::Float(-0.25));
        assert_eq!(Value::coerce(".5"), Value::Float(0.5));
        assert_eq!(Value::coerce("5."), Value::Float(5.0));
        assert_eq!(Value::coerce("1.5e3"), Value::Float(1500.0));
    }

    #[test]
    fn test_exponent_without_point_is_integer() {
        assert_eq!(Value::coerce("1e3"), Value::Int(1000));
        assert_eq!(Value::coerce("2E-1"), Value::Int(0));
    }

    #[test]
    fn test_integer_overflow_saturates() {
        assert_eq!(Value::coerce("99999999999999999999"), Value::Int(i64::MAX));
        assert_eq!(Value::coerce("-99999999999999999999"), Value::Int(i64::MIN));
    }

    #[test]
    fn test_non_numeric_strings() {
        for raw in ["inf", "NaN", "infinity", "0x1A", "1 000", "1.2.3", "e5", "1e", "-", ".", "12abc"] {
            assert!(!is_numeric(raw), "should not be numeric: {raw}");
            assert_eq!(Value::coerce(raw), Value::Str(raw.to_string()));
        }
    }

    #[test]
    fn test_is_numeric_accepts_grammar() {
        for raw in ["1", "-1", "+1", "1.", ".1", "1.0", "1e10", "1E+10", "1.5e-3", "-.5"] {
            assert!(is_numeric(raw), "should be numeric: {raw}");
        }
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_type_conversions() {
        assert_eq!(bool::try_from(Value::Bool(true)), Ok(true));
        assert_eq!(i64::try_from(Value::Int(3)), Ok(3));
        assert_eq!(f64::try_from(Value::Int(3)), Ok(3.0));
        assert_eq!(String::try_from(Value::from("x")), Ok("x".to_string()));
        assert_eq!(
            i64::try_from(Value::Str("3".into())),
            Err(ValueError::TypeMismatch {
                expected: "int",
                found: "string",
            })
        );
        assert!(bool::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".into()));
    }

    #[test]
    fn test_display_matches_file_form() {
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("hi there").to_string(), "hi there");
    }

    #[test]
    fn test_serializes_as_plain_json_scalar() {
        assert_eq!(Value::Int(5).to_json(), serde_json::json!(5));
        assert_eq!(Value::Float(2.5).to_json(), serde_json::json!(2.5));
        assert_eq!(Value::Null.to_json(), serde_json::Value::Null);
        assert_eq!(Value::from("a").to_json(), serde_json::json!("a"));

        let parsed: Value = serde_json::from_str("true").unwrap();
        assert_eq!(parsed, Value::Bool(true));
        let parsed: Value = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Value::Int(7));
    }
}
