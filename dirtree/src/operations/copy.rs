//! Recursive directory copy.
//!
//! The source tree is walked in [`Order::Ascending`], so each destination
//! directory is created before any file below it is copied. Paths are
//! re-rooted by stripping the source prefix and joining the remainder onto
//! the destination.
//!
//! The *contents* of the source land directly in the destination: copying
//! `a/b/c` to `x/y/z` leaves a copy of `c`'s entries in `z`, whether `z`
//! existed before or not. An existing destination is merged into.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::assertions::{assert_existing_directory, assert_non_empty_path};
use crate::error::{Error, Result};
use crate::path::{is_child, PathRelationship};
use crate::walk::{NodeKind, Order, Walk};

/// Options applied to every file copied by [`copy_directory`].
///
/// # Examples
///
/// ```
/// use dirtree::operations::CopyOptions;
///
/// let options = CopyOptions::new().overwrite(true);
/// assert!(options.is_overwrite());
/// assert!(!CopyOptions::default().is_overwrite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    overwrite: bool,
}

impl CopyOptions {
    /// Options that fail when a destination file already exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace destination files that already exist instead of failing.
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Whether existing destination files are replaced.
    #[must_use]
    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }
}

/// What a copy created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopySummary {
    /// Directories created or merged into, the destination root included.
    pub directories: usize,
    /// Regular files copied.
    pub files: usize,
    /// Entries skipped because they are neither files nor directories.
    pub skipped: usize,
}

/// Copy the tree under `source` into `destination`.
///
/// Missing destination directories, ancestors included, are created.
/// Symbolic links and special files are skipped.
///
/// # Errors
///
/// Returns `NotADirectory` if `source` is not an existing directory and
/// `InvalidArgument` if `destination` is `source` or lies inside it; both are
/// checked before anything is copied. Returns `Io` on the first directory creation
/// or file copy that fails, including a destination file that already exists
/// when overwriting is off. Work done before the failure is kept.
///
/// # Examples
///
/// ```
/// use dirtree::operations::{copy_directory, CopyOptions};
///
/// let dir = tempfile::tempdir().unwrap();
/// let source = dir.path().join("source");
/// std::fs::create_dir_all(source.join("b/c")).unwrap();
/// std::fs::write(source.join("b/c/file_c.txt"), b"c").unwrap();
///
/// let destination = dir.path().join("here/the/destination");
/// let summary = copy_directory(&source, &destination, &CopyOptions::default()).unwrap();
///
/// assert!(destination.join("b/c/file_c.txt").is_file());
/// assert_eq!(summary.files, 1);
/// assert_eq!(summary.directories, 3);
/// ```
pub fn copy_directory(
    source: &Path,
    destination: &Path,
    options: &CopyOptions,
) -> Result<CopySummary> {
    assert_non_empty_path("source", source)?;
    assert_non_empty_path("destination", destination)?;
    assert_existing_directory("source", source)?;
    if PathRelationship::between(source, destination) == PathRelationship::Same {
        return Err(Error::invalid_argument(
            "destination",
            format!("{} is the source directory", destination.display()),
        ));
    }
    if is_child(source, destination) {
        return Err(Error::invalid_argument(
            "destination",
            format!(
                "{} lies inside the source directory {}",
                destination.display(),
                source.display()
            ),
        ));
    }

    let mut summary = CopySummary::default();
    for node in Walk::new(source).order(Order::Ascending).into_nodes()? {
        let node = node?;
        let relative = node
            .path()
            .strip_prefix(source)
            .map_err(|_| Error::Internal {
                details: format!(
                    "walked entry {} is outside {}",
                    node.path().display(),
                    source.display()
                ),
            })?;
        let target = if relative.as_os_str().is_empty() {
            destination.to_path_buf()
        } else {
            destination.join(relative)
        };

        match node.kind() {
            NodeKind::Directory => {
                fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
                summary.directories += 1;
            }
            NodeKind::File => {
                log::debug!("copying {} to {}", node.path().display(), target.display());
                copy_file(node.path(), &target, options).map_err(|e| Error::io(&target, e))?;
                summary.files += 1;
            }
            NodeKind::Other => {
                log::debug!(
                    "skipping {}: not a regular file or directory",
                    node.path().display()
                );
                summary.skipped += 1;
            }
        }
    }

    log::debug!(
        "copied {} files and {} directories from {} to {}",
        summary.files,
        summary.directories,
        source.display(),
        destination.display()
    );
    Ok(summary)
}

fn copy_file(from: &Path, to: &Path, options: &CopyOptions) -> io::Result<()> {
    // Truncating the target would empty the source when both name one file.
    if is_same_file(from, to)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    if options.overwrite {
        return fs::copy(from, to).map(|_| ());
    }

    // create_new makes the existence check and the create one step.
    let mut reader = File::open(from)?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(to)?;
    io::copy(&mut reader, &mut writer)?;
    writer.set_permissions(reader.metadata()?.permissions())
}

fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    match fs::canonicalize(b) {
        Ok(b) => Ok(fs::canonicalize(a)? == b),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
