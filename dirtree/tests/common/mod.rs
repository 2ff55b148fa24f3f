//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory trees used across the
//! dirtree integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A reference tree with one file on every directory level it touches.
///
/// ```text
/// rootOfTree/
/// └── level_1/
///     ├── file_1__1.txt
///     ├── level_1_1/level_1_1_1/file_1_1_1__1.txt
///     ├── level_1_2/level_1_2_1/file_1_2_1__1.txt
///     ├── level_1_2/level_1_2_1/level_1_2_1_1/file_1_2_1_1__1.txt
///     └── level_3/file_1_3__1.txt
/// ```
pub struct ReferenceTree {
    // Held for its Drop.
    _dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl ReferenceTree {
    /// Number of regular files in the tree.
    pub const FILE_COUNT: usize = 5;

    /// Depth of the tree, counted from `rootOfTree`.
    pub const DEPTH: usize = 4;

    /// Relative path of the single deepest directory.
    pub const DEEPEST: &'static str = "level_1/level_1_2/level_1_2_1/level_1_2_1_1";

    /// Builds the tree in a fresh temporary directory.
    pub fn build() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("rootOfTree");

        let files = [
            "level_1/file_1__1.txt",
            "level_1/level_1_1/level_1_1_1/file_1_1_1__1.txt",
            "level_1/level_1_2/level_1_2_1/file_1_2_1__1.txt",
            "level_1/level_1_2/level_1_2_1/level_1_2_1_1/file_1_2_1_1__1.txt",
            "level_1/level_3/file_1_3__1.txt",
        ];
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file.as_bytes()).unwrap();
        }

        Self { _dir: dir, root }
    }

    /// The `rootOfTree` directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A path inside the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// A path next to `rootOfTree` that does not exist.
    pub fn missing(&self) -> PathBuf {
        self.root.with_file_name("does_not_exist")
    }
}

/// Relative paths of every entry below `root`, sorted, with a trailing `/`
/// on directories.
#[allow(dead_code)]
pub fn relative_entries(root: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    collect_entries(root, root, &mut entries);
    entries.sort();
    entries
}

#[allow(dead_code)]
fn collect_entries(root: &Path, dir: &Path, entries: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let relative = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .into_owned();
        if path.is_dir() {
            entries.push(format!("{relative}/"));
            collect_entries(root, &path, entries);
        } else {
            entries.push(relative);
        }
    }
}
