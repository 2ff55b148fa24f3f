//! Tree operations built on the shared [`walk`](crate::walk) primitive.
//!
//! - [`delete`]: recursive delete, walked deepest-first, plus silent and
//!   exit-time variants
//! - [`copy`]: recursive copy, walked shallowest-first
//! - [`depth`]: deepest-directory search and depth measurement
//! - [`listing`]: recursive and one-level file/subdirectory listings
//! - [`predicates`]: existence and type checks
//!
//! Every mutating operation validates its arguments immediately before it
//! touches the filesystem. Nothing is rolled back on failure.
//!
//! # Examples
//!
//! ```
//! use dirtree::operations::{copy_directory, force_delete, get_depth, CopyOptions};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let source = dir.path().join("source");
//! std::fs::create_dir_all(source.join("a/b")).unwrap();
//! std::fs::write(source.join("a/b/file.txt"), b"data").unwrap();
//!
//! let copy = dir.path().join("copy");
//! copy_directory(&source, &copy, &CopyOptions::default()).unwrap();
//! assert_eq!(get_depth(&copy).unwrap(), 2);
//!
//! force_delete(&source).unwrap();
//! assert!(!source.exists());
//! ```

pub mod copy;
pub mod delete;
pub mod depth;
pub mod listing;
pub mod predicates;

pub use copy::{copy_directory, CopyOptions, CopySummary};
pub use delete::{
    force_delete, force_delete_on_shutdown, force_delete_silently, rm_dir, rm_dir_silently,
};
pub use depth::{find_deepest, get_depth};
pub use listing::{
    get_containing_files, get_regular_files_in_directory,
    get_regular_non_hidden_files_in_directory, get_subdirectories,
    get_subdirectories_not_ending_with_tilde, has_subdirectories,
};
pub use predicates::{
    is_existing_directory, is_existing_regular_file, is_file_or_directory, is_non_empty_directory,
};
