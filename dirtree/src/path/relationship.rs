//! Path relationship checking.
//!
//! This module determines how two paths relate to each other in the
//! filesystem hierarchy. All comparisons run on canonical forms (see
//! [`canonical`](super::canonical)), segment by segment, so `/a/bc` is never
//! considered to be below `/a/b`.

use std::path::{Path, PathBuf};

use crate::assertions::assert_existing_directory;
use crate::error::Result;
use crate::path::canonical::{resolve_components, to_canonical_path};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use dirtree::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// Both paths have the same canonical form.
    Same,

    /// Neither path is below the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are canonicalised first, so `.`/`..` segments, trailing
    /// separators and relative forms do not affect the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/a/b"));
    /// assert_eq!(rel, PathRelationship::Ancestor);
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a/./b/.."), Path::new("/a/"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/b"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = canonical_for_comparison(path1);
        let p2 = canonical_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }
        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }
        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Short lowercase name of the relationship.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let desc = PathRelationship::Ancestor.description(Path::new("/a"), Path::new("/a/b"));
    /// assert!(desc.contains("ancestor"));
    /// ```
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

/// Returns true if `element` lies strictly below `reference`.
///
/// A path is never its own child. No filesystem access is needed.
///
/// # Examples
///
/// ```
/// use dirtree::path::is_child;
/// use std::path::Path;
///
/// assert!(is_child(Path::new("/a/b/c"), Path::new("/a/b/c/some.txt")));
/// assert!(!is_child(Path::new("/a/b/c"), Path::new("/a/b/some.txt")));
/// assert!(!is_child(Path::new("/a/b/c"), Path::new("/a/b/c")));
/// ```
#[must_use]
pub fn is_child(reference: &Path, element: &Path) -> bool {
    PathRelationship::between(reference, element) == PathRelationship::Ancestor
}

/// Returns true if `sub_dir` is a directory somewhere below `reference_dir`.
///
/// # Errors
///
/// Returns `NotADirectory` if either argument is not an existing directory.
pub fn is_subdirectory(reference_dir: &Path, sub_dir: &Path) -> Result<bool> {
    assert_existing_directory("reference_dir", reference_dir)?;
    assert_existing_directory("sub_dir", sub_dir)?;

    Ok(is_child(reference_dir, sub_dir))
}

/// Returns true if `sub_dir` is a directory exactly one level below
/// `reference_dir`.
///
/// Unlike [`is_subdirectory`], a missing or non-directory argument yields
/// `false` instead of an error.
#[must_use]
pub fn is_direct_subdirectory(reference_dir: &Path, sub_dir: &Path) -> bool {
    if !reference_dir.is_dir() || !sub_dir.is_dir() {
        return false;
    }

    let reference = canonical_for_comparison(reference_dir);
    let sub = canonical_for_comparison(sub_dir);

    reference != sub
        && sub.starts_with(&reference)
        && sub.components().count() == reference.components().count() + 1
}

/// Returns true if `path` is an existing directory with no parent.
#[must_use]
pub fn is_root_directory(path: &Path) -> bool {
    path.is_dir() && canonical_for_comparison(path).parent().is_none()
}

/// Returns true if the last segment of `path` equals `name`.
///
/// Trailing separators are ignored and the comparison is exact.
///
/// # Examples
///
/// ```
/// use dirtree::path::ends_with_name;
/// use std::path::Path;
///
/// assert!(ends_with_name(Path::new("/a/b/c"), "c"));
/// assert!(ends_with_name(Path::new("/a/b/c/"), "c"));
/// assert!(!ends_with_name(Path::new("/a/b/c"), "x"));
/// ```
#[must_use]
pub fn ends_with_name(path: &Path, name: &str) -> bool {
    path.file_name().is_some_and(|file_name| file_name == name)
}

/// Canonical form used for comparisons.
///
/// When the working directory is unavailable the path is only resolved
/// lexically, which still compares consistently for absolute inputs.
fn canonical_for_comparison(path: &Path) -> PathBuf {
    to_canonical_path(path).unwrap_or_else(|_| resolve_components(path))
}
