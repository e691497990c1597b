//! Shared utilities for integration testing.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write a config file into a fresh temp dir, returning the dir guard and
/// the file path.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
