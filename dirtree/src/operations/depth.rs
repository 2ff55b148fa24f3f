//! Deepest-directory search and depth measurement.
//!
//! Depth is counted in directory levels below the starting directory. Files
//! never count, even when they sit deeper than every directory.

use std::path::{Path, PathBuf};

use crate::assertions::assert_existing_directory;
use crate::error::{Error, Result};
use crate::walk::{Node, Walk};

/// Find the deepest directory under `dir`, `dir` itself included.
///
/// When several directories share the maximum depth, any one of them may be
/// returned. Callers must not rely on which.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the traversal fails.
///
/// # Examples
///
/// ```
/// use dirtree::operations::find_deepest;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
/// std::fs::create_dir_all(dir.path().join("d")).unwrap();
///
/// let deepest = find_deepest(dir.path()).unwrap();
/// assert!(deepest.ends_with("a/b/c"));
/// ```
pub fn find_deepest(dir: &Path) -> Result<PathBuf> {
    deepest_directory(dir).map(Node::into_path)
}

/// Number of directory levels below `dir`.
///
/// Returns 0 when `dir` has no subdirectories.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the traversal fails.
pub fn get_depth(dir: &Path) -> Result<usize> {
    deepest_directory(dir).map(|node| node.depth())
}

fn deepest_directory(dir: &Path) -> Result<Node> {
    assert_existing_directory("dir", dir)?;

    let mut deepest: Option<Node> = None;
    for node in Walk::new(dir).into_nodes()? {
        let node = node?;
        if !node.is_dir() {
            continue;
        }
        match &deepest {
            Some(current) if current.depth() >= node.depth() => {}
            _ => deepest = Some(node),
        }
    }

    // The root itself is a directory, so this only fails if the walk broke
    // its contract.
    deepest.ok_or_else(|| Error::Internal {
        details: format!("traversal of {} yielded no directories", dir.display()),
    })
}
