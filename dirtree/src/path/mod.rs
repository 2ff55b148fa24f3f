//! Path forms and structural relationships between paths.
//!
//! # Canonical paths
//!
//! A canonical path is absolute with every `.` and `..` segment resolved.
//! Canonicalisation is lexical: it never touches the filesystem, so it works
//! for paths that do not exist yet, and symlinks are preserved.
//!
//! # Relationships
//!
//! Relationship predicates compare canonical forms segment by segment:
//!
//! ```
//! use dirtree::path::{is_child, PathRelationship};
//! use std::path::Path;
//!
//! let parent = Path::new("/home/user");
//! let child = Path::new("/home/user/project");
//!
//! assert_eq!(PathRelationship::between(parent, child), PathRelationship::Ancestor);
//! assert!(is_child(parent, child));
//! assert!(!is_child(child, parent));
//! ```
//!
//! Only [`is_subdirectory`], [`is_direct_subdirectory`] and
//! [`is_root_directory`] consult the filesystem, to check that their
//! arguments are existing directories.

pub mod canonical;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use canonical::{home_dir, to_canonical_path, working_dir};
pub use relationship::{
    ends_with_name, is_child, is_direct_subdirectory, is_root_directory, is_subdirectory,
    PathRelationship,
};
