//! Existence and type checks.
//!
//! These follow symbolic links, so a link to a directory counts as a
//! directory.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Returns true if `path` is an existing regular file or directory.
#[must_use]
pub fn is_file_or_directory(path: &Path) -> bool {
    path.is_file() || path.is_dir()
}

/// Returns true if `path` is an existing directory.
#[must_use]
pub fn is_existing_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Returns true if `path` is an existing regular file.
#[must_use]
pub fn is_existing_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// Returns true if `path` is an existing directory with at least one entry.
///
/// Anything that is not an existing directory yields `false`.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be read.
pub fn is_non_empty_directory(path: &Path) -> Result<bool> {
    if !is_existing_directory(path) {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(entries.next().is_some())
}
