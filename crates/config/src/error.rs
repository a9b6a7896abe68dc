//! Error types for env file loading and value conversion.
//!
//! Responsibilities:
//! - Define the error returned by the strict loader (`ConfigStore::load`).
//! - Define the error returned when a coerced `Value` is converted to a
//!   concrete Rust type.
//!
//! Does NOT handle:
//! - Missing files. A missing env file is an empty store, not an error.
//! - Malformed lines. Those are skipped by the parser.
//!
//! Invariants:
//! - Errors NEVER include raw `.env` line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an env file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read env file at {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },
}

/// Errors that can occur when converting a `Value` into a concrete type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
