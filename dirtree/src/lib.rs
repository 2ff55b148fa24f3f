#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dirtree
//!
//! A library for deleting, copying and measuring directory trees, and for
//! reasoning about how paths relate to each other.
//!
//! ## Core Types
//!
//! - [`Walk`] and [`Node`]: depth-first traversal in either order
//! - [`PathRelationship`]: structural relationship between two paths
//! - [`CopyOptions`] and [`CopySummary`]: recursive copy configuration and
//!   outcome
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dirtree::{find_deepest, get_depth, is_child};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
//!
//! assert_eq!(get_depth(dir.path()).unwrap(), 3);
//! let deepest = find_deepest(dir.path()).unwrap();
//! assert!(is_child(dir.path(), &deepest));
//! ```

pub mod assertions;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;
pub mod walk;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    copy_directory, find_deepest, force_delete, force_delete_on_shutdown, force_delete_silently,
    get_depth, rm_dir, rm_dir_silently, CopyOptions, CopySummary,
};
pub use path::{
    ends_with_name, is_child, is_direct_subdirectory, is_root_directory, is_subdirectory,
    to_canonical_path, PathRelationship,
};
pub use walk::{Node, NodeKind, Order, Walk};
