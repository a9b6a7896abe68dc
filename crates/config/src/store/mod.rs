//! The `.env` backed configuration store.
//!
//! Responsibilities:
//! - Read an env file once, eagerly, into an immutable key/value mapping.
//! - Answer lookups by normalized key, coercing the stored text.
//! - Degrade every failure (missing file, unreadable file, malformed line) to
//!   "value absent" instead of an error on the infallible paths.
//!
//! Does NOT handle:
//! - Reading or writing the process environment.
//! - Validation or required keys. Callers supply defaults.
//! - Reloading. Build a new store to pick up file changes.
//!
//! Invariants:
//! - Keys are stored exactly as written in the file (trimmed). Only lookup
//!   keys are normalized, so `foo=bar` is not reachable through `get("foo")`;
//!   use `raw("foo")` for a literal lookup.
//! - A repeated literal key keeps the last value read.
//! - Raw values are never logged; log records carry line numbers and keys.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::DEFAULT_ENV_FILE;
use crate::error::ConfigError;
use crate::key::normalize_key;
use crate::parser::{Line, parse_line};
use crate::value::Value;

/// Flat configuration loaded from an env file.
///
/// Construct it once and pass it by reference (or behind an `Arc`) to the
/// code that needs it; it is immutable and `Send + Sync`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    entries: BTreeMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigStore {
    /// Load the env file at `path`.
    ///
    /// Never fails. A missing file gives an empty store; any other read error
    /// is logged at `warn` level and also gives an empty store.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|error| {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "Failed to read env file, using empty configuration"
            );
            Self {
                entries: BTreeMap::new(),
                source: Some(path.to_path_buf()),
            }
        })
    }

    /// Load the env file at `path`, reporting read failures.
    ///
    /// A missing file is still not an error and yields an empty store.
    /// Invalid UTF-8 is replaced lossily rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file exists but cannot be read
    /// (permission denied, path is a directory, ...).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No env file found, using empty configuration");
                return Ok(Self {
                    entries: BTreeMap::new(),
                    source: Some(path.to_path_buf()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    kind: e.kind(),
                });
            }
        };

        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                let position = e.utf8_error().valid_up_to();
                tracing::warn!(
                    path = %path.display(),
                    position,
                    "Env file is not valid UTF-8, replacing invalid bytes"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let mut store = Self::parse(&contents);
        store.source = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            entries = store.len(),
            "Loaded env file"
        );
        Ok(store)
    }

    /// Load `.env` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_ENV_FILE))
    }

    /// Build a store from in-memory env file text.
    pub fn parse(contents: &str) -> Self {
        let mut entries = BTreeMap::new();

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            match parse_line(line) {
                Line::Assignment { key, value } => {
                    if entries.insert(key.to_string(), value.to_string()).is_some() {
                        tracing::trace!(line = line_number, key, "Key reassigned, keeping later value");
                    }
                }
                Line::Ignored => {
                    tracing::trace!(line = line_number, "Skipping line without assignment");
                }
                Line::Blank | Line::Comment => {}
            }
        }

        Self {
            entries,
            source: None,
        }
    }

    /// Look up `key` and coerce its value.
    ///
    /// `key` is normalized first (`app.name` → `APP_NAME`). Returns `None`
    /// when the normalized key is not stored.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(&normalize_key(key)).map(|raw| Value::coerce(raw))
    }

    /// Look up `key`, falling back to `default`.
    ///
    /// The default is returned as given; it is never coerced.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Look up `key` and convert the coerced value into `T`.
    ///
    /// Returns `None` if the key is absent or the value has another type.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: TryFrom<Value>,
    {
        self.get(key).and_then(|value| T::try_from(value).ok())
    }

    /// Whether the normalized `key` is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// The raw stored text for the literal (non-normalized) `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Path the store was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl FromStr for ConfigStore {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Serializes as a map of the raw stored entries.
impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}

#[cfg(test)]
mod tests;
