//! Precondition checks shared by the tree operations.
//!
//! Each helper either returns `Ok(())` or raises a descriptive error that
//! names the argument and the absolute form of the failing path. The checks
//! query the filesystem every time they are called; callers run them
//! immediately before the operation they guard.

use std::path::Path;

use crate::error::{Error, Result};

/// Require `path` to denote an existing directory.
///
/// # Errors
///
/// Returns `NotADirectory` if the path does not exist or is not a directory.
///
/// # Examples
///
/// ```
/// use dirtree::assertions::assert_existing_directory;
/// use std::path::Path;
///
/// let dir = std::env::temp_dir();
/// assert!(assert_existing_directory("dir", &dir).is_ok());
/// assert!(assert_existing_directory("dir", Path::new("/no/such/dir")).is_err());
/// ```
pub fn assert_existing_directory(argument: &str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::not_a_directory(argument, path))
    }
}

/// Require `path` to denote an existing regular file or directory.
///
/// # Errors
///
/// Returns `NotFound` if nothing exists at `path`, or `NotAFileOrDirectory`
/// if something exists that is neither.
pub fn assert_file_or_directory(argument: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::not_found(argument, path));
    }
    if path.is_file() || path.is_dir() {
        Ok(())
    } else {
        Err(Error::not_a_file_or_directory(argument, path))
    }
}

/// Require `path` to be non-empty.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty path.
pub fn assert_non_empty_path(argument: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        Err(Error::invalid_argument(argument, "path must not be empty"))
    } else {
        Ok(())
    }
}
