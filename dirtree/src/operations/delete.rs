//! Recursive deletion.
//!
//! Directories are removed bottom-up: the tree is walked in
//! [`Order::Descending`] so every entry is gone before its parent directory
//! is removed.
//!
//! ## Failure semantics
//!
//! Deletion is not transactional. The first removal that fails aborts the
//! operation with an `Io` error and entries removed before it stay removed.
//!
//! ## Silent variants
//!
//! [`force_delete_silently`], [`rm_dir_silently`] and
//! [`force_delete_on_shutdown`] never report failure. They are meant for
//! cleanup paths where the caller has nothing to do about an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

use crate::assertions::{
    assert_existing_directory, assert_file_or_directory, assert_non_empty_path,
};
use crate::error::{Error, Result};
use crate::walk::{Node, NodeKind, Order, Walk};

/// Paths to delete when the process exits.
static SHUTDOWN_PATHS: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

static SHUTDOWN_HOOK: Once = Once::new();

/// Delete a regular file, or a directory and everything below it.
///
/// Existence and type are checked at call time, right before deleting. A
/// symbolic link is removed without touching its target.
///
/// # Errors
///
/// Returns `NotFound` if `path` does not exist or is a dangling symbolic
/// link, which is left in place. Returns `NotAFileOrDirectory` if it
/// is neither a regular file nor a directory, and `Io` if a removal fails.
///
/// # Examples
///
/// ```
/// use dirtree::operations::force_delete;
///
/// let dir = tempfile::tempdir().unwrap();
/// let target = dir.path().join("a/b");
/// std::fs::create_dir_all(&target).unwrap();
///
/// force_delete(&dir.path().join("a")).unwrap();
/// assert!(!dir.path().join("a").exists());
/// ```
pub fn force_delete(path: &Path) -> Result<()> {
    assert_non_empty_path("path", path)?;
    assert_file_or_directory("path", path)?;

    if is_symlink(path) {
        log::debug!("removing link {}", path.display());
        return remove_link(path);
    }
    if path.is_file() {
        log::debug!("removing file {}", path.display());
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    } else if path.is_dir() {
        rm_dir(path)
    } else {
        // Changed type between the check and now.
        Err(Error::not_a_file_or_directory("path", path))
    }
}

/// Delete a directory and everything below it.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` does not exist or is not a directory; a
/// regular file is left untouched. Returns `Io` if a removal fails.
pub fn rm_dir(dir: &Path) -> Result<()> {
    assert_non_empty_path("dir", dir)?;
    assert_existing_directory("dir", dir)?;

    if is_symlink(dir) {
        log::debug!("removing link {}", dir.display());
        return remove_link(dir);
    }

    let mut removed = 0usize;
    for node in Walk::new(dir).order(Order::Descending).into_nodes()? {
        remove_node(&node?)?;
        removed += 1;
    }
    log::debug!("removed {removed} entries under {}", dir.display());
    Ok(())
}

/// Delete a file or directory tree, ignoring every failure.
///
/// Nothing happens if `path` does not exist.
pub fn force_delete_silently(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = force_delete(path) {
        log::debug!("ignoring failed delete of {}: {e}", path.display());
    }
}

/// Delete a directory tree, ignoring every failure.
///
/// Nothing happens if `dir` is not an existing directory.
pub fn rm_dir_silently(dir: &Path) {
    if !dir.is_dir() {
        return;
    }
    if let Err(e) = rm_dir(dir) {
        log::debug!("ignoring failed delete of {}: {e}", dir.display());
    }
}

/// Schedule `path` for silent deletion when the process exits normally.
///
/// Deletion runs on return from `main` or on [`std::process::exit`], in
/// reverse registration order. It does not run if the process is killed or
/// aborts.
pub fn force_delete_on_shutdown(path: impl Into<PathBuf>) {
    let path = path.into();
    SHUTDOWN_HOOK.call_once(install_shutdown_hook);
    log::debug!("scheduling {} for deletion at exit", path.display());
    lock_shutdown_paths().push(path);
}

fn lock_shutdown_paths() -> MutexGuard<'static, Vec<PathBuf>> {
    SHUTDOWN_PATHS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[allow(unsafe_code)]
fn install_shutdown_hook() {
    // SAFETY: the handler takes no arguments, touches only Rust statics and
    // catches every panic before returning to the C runtime.
    let status = unsafe { libc::atexit(run_shutdown_deletes) };
    if status != 0 {
        log::warn!("could not register exit handler; scheduled paths will not be deleted");
    }
}

extern "C" fn run_shutdown_deletes() {
    let _ = std::panic::catch_unwind(|| {
        let paths = std::mem::take(&mut *lock_shutdown_paths());
        for path in paths.iter().rev() {
            force_delete_silently(path);
        }
    });
}

fn remove_node(node: &Node) -> Result<()> {
    match node.kind() {
        NodeKind::Directory => fs::remove_dir(node.path()).map_err(|e| Error::io(node.path(), e)),
        NodeKind::File => fs::remove_file(node.path()).map_err(|e| Error::io(node.path(), e)),
        NodeKind::Other => remove_link(node.path()),
    }
}

/// Remove a link or special file without touching what it points to.
fn remove_link(path: &Path) -> Result<()> {
    // Directory symlinks on Windows need remove_dir.
    fs::remove_file(path)
        .or_else(|e| fs::remove_dir(path).map_err(|_| e))
        .map_err(|e| Error::io(path, e))
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}
