//! Canonical path forms.
//!
//! A canonical path is absolute and contains no `.` or `..` segments. It is
//! computed lexically: symlinks are not followed and the path does not need
//! to exist. Canonicalising a canonical path returns it unchanged.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `.` and `..` components lexically.
///
/// A `..` that would climb above the filesystem root is dropped, so
/// `/a/../..` resolves to `/`. Leading `..` segments of a relative path are
/// kept since there is nothing to resolve them against.
///
/// # Examples
///
/// ```
/// use dirtree::path::canonical::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/b/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
///
/// let resolved = resolve_components(Path::new("/.."));
/// assert_eq!(resolved, PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_with_parent =
                    matches!(result.components().next_back(), Some(Component::ParentDir));
                // At the root there is nowhere to climb; relative paths keep the `..`.
                if (ends_with_parent || !result.pop()) && !has_root {
                    result.push(Component::ParentDir);
                }
            }
        }
    }

    result
}

/// Returns the canonical form of `path`.
///
/// Relative paths are resolved against the current working directory.
///
/// # Errors
///
/// Returns `Io` if `path` is relative and the current directory cannot be
/// determined.
///
/// # Examples
///
/// ```
/// use dirtree::path::canonical::to_canonical_path;
/// use std::path::Path;
///
/// let canonical = to_canonical_path(Path::new("some/../test.txt")).unwrap();
/// assert!(canonical.is_absolute());
/// assert!(canonical.ends_with("test.txt"));
/// ```
pub fn to_canonical_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }
    let cwd = env::current_dir().map_err(|e| Error::io(Path::new("."), e))?;
    Ok(resolve_components(&cwd.join(path)))
}

/// Returns the current working directory in canonical form.
///
/// # Errors
///
/// Returns `Io` if the current directory cannot be determined.
pub fn working_dir() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::io(Path::new("."), e))?;
    Ok(resolve_components(&cwd))
}

/// Returns the home directory of the current user.
///
/// # Errors
///
/// Returns `NotFound` if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or_else(|| Error::not_found("home", Path::new("~")))
}
