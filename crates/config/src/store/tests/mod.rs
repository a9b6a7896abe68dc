//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test loading from files, including missing and unreadable paths.
//! - Test normalized lookups, defaults, and typed access.
//!
//! Does NOT handle:
//! - Line classification details (tested in parser.rs).
//! - Coercion table details (tested in value.rs).
//!
//! Invariants:
//! - Fixture files live in `tempfile` directories and are removed on drop.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Write `contents` to `.env` in a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn write_env(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
