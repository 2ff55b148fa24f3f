//! File and subdirectory listings.
//!
//! Every listing requires an existing directory and goes through the shared
//! [`Walk`]; the non-recursive ones bound it to one level. Results come back
//! in traversal order, which callers should not depend on.
//!
//! The one-level listings classify symbolic links by their target, so a link
//! to a directory is listed as a subdirectory. [`get_containing_files`] never
//! follows links.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assertions::assert_existing_directory;
use crate::error::Result;
use crate::walk::{Node, NodeKind, Walk};

/// All regular files below `dir`, at any depth.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the traversal fails.
pub fn get_containing_files(dir: &Path) -> Result<Vec<PathBuf>> {
    assert_existing_directory("directory", dir)?;
    paths_where(Walk::new(dir), Node::is_file)
}

/// Regular files directly inside `dir`.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the listing fails.
pub fn get_regular_files_in_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    assert_existing_directory("dir", dir)?;
    paths_where(direct_entries(dir), |node| target_kind(node) == NodeKind::File)
}

/// Regular files directly inside `dir` whose name does not start with `.`.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the listing fails.
pub fn get_regular_non_hidden_files_in_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    assert_existing_directory("dir", dir)?;
    paths_where(direct_entries(dir), |node| {
        target_kind(node) == NodeKind::File && !name_matches(node, |name| name.starts_with('.'))
    })
}

/// Returns true if `dir` has at least one direct subdirectory.
///
/// Stops at the first subdirectory found.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the listing fails.
pub fn has_subdirectories(dir: &Path) -> Result<bool> {
    assert_existing_directory("dir", dir)?;
    for node in direct_entries(dir).into_nodes()? {
        let node = node?;
        if node.depth() == 1 && target_kind(&node) == NodeKind::Directory {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Directories directly inside `dir`. `dir` itself is not included.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the listing fails.
pub fn get_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    assert_existing_directory("dir", dir)?;
    paths_where(direct_entries(dir), |node| {
        target_kind(node) == NodeKind::Directory
    })
}

/// Directories directly inside `dir` whose name does not end with `~`.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not an existing directory and `Io`
/// if the listing fails.
pub fn get_subdirectories_not_ending_with_tilde(dir: &Path) -> Result<Vec<PathBuf>> {
    assert_existing_directory("dir", dir)?;
    paths_where(direct_entries(dir), |node| {
        target_kind(node) == NodeKind::Directory && !name_matches(node, |name| name.ends_with('~'))
    })
}

fn direct_entries(dir: &Path) -> Walk {
    Walk::new(dir).max_depth(1)
}

/// Kind of the entry a node resolves to, following links.
///
/// Dangling links and special files stay `Other`.
fn target_kind(node: &Node) -> NodeKind {
    if node.kind() != NodeKind::Other {
        return node.kind();
    }
    match fs::metadata(node.path()) {
        Ok(meta) if meta.is_dir() => NodeKind::Directory,
        Ok(meta) if meta.is_file() => NodeKind::File,
        _ => NodeKind::Other,
    }
}

/// Paths of every non-root node accepted by `keep`.
fn paths_where(walk: Walk, keep: impl Fn(&Node) -> bool) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for node in walk.into_nodes()? {
        let node = node?;
        if node.depth() > 0 && keep(&node) {
            paths.push(node.into_path());
        }
    }
    Ok(paths)
}

fn name_matches(node: &Node, test: impl Fn(&str) -> bool) -> bool {
    node.path()
        .file_name()
        .is_some_and(|name| test(&name.to_string_lossy()))
}
