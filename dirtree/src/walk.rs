//! Directory tree traversal.
//!
//! [`Walk`] enumerates every entry below a root directory, the root
//! included, as a lazy sequence of [`Node`]s. Two consumption orders are
//! supported from a single pass over the tree:
//!
//! - [`Order::Ascending`]: a directory is yielded before anything inside it.
//!   Use it when parents must exist before children are created.
//! - [`Order::Descending`]: a directory is yielded after everything inside
//!   it. Use it when children must be gone before their parent is removed.
//!
//! Symbolic links are reported but never followed.
//!
//! # Examples
//!
//! ```no_run
//! use dirtree::walk::{Order, Walk};
//!
//! for node in Walk::new("/tmp/tree").order(Order::Descending).into_nodes()? {
//!     let node = node?;
//!     println!("{} {}", node.depth(), node.path().display());
//! }
//! # Ok::<(), dirtree::Error>(())
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Classification of a traversal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else: symbolic links, sockets, FIFOs, devices.
    Other,
}

impl NodeKind {
    fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Other => "other",
        }
    }
}

/// One entry produced by a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    path: PathBuf,
    kind: NodeKind,
    depth: usize,
}

impl Node {
    /// Path of the entry, as joined onto the traversal root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kind of the entry.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Number of segments between the entry and the traversal root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true for regular files.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Returns true for directories.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Order in which a traversal yields its nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Root first, every directory before its contents.
    #[default]
    Ascending,
    /// Every directory after its contents, root last.
    Descending,
}

/// Description of a traversal rooted at an existing directory.
///
/// Nothing touches the filesystem until [`Walk::into_nodes`] or
/// [`Walk::collect`] is called.
#[derive(Debug, Clone)]
pub struct Walk {
    root: PathBuf,
    max_depth: Option<usize>,
    order: Order,
}

impl Walk {
    /// Create a walk over the whole subtree under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            order: Order::default(),
        }
    }

    /// Limit the walk to `depth` levels below the root.
    ///
    /// `0` yields only the root, `1` the root and its direct entries.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the order nodes are yielded in.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Start the traversal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the root does not exist and `NotADirectory` if
    /// it is not a directory. Both are checked before any entry is read.
    pub fn into_nodes(self) -> Result<Nodes> {
        if !self.root.exists() {
            return Err(Error::not_found("root", &self.root));
        }
        if !self.root.is_dir() {
            return Err(Error::not_a_directory("root", &self.root));
        }

        let mut walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .contents_first(self.order == Order::Descending);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        Ok(Nodes {
            root: self.root,
            inner: walker.into_iter(),
        })
    }

    /// Run the traversal to completion.
    ///
    /// # Errors
    ///
    /// Fails like [`Walk::into_nodes`], or with `Io` on the first entry that
    /// cannot be read. No partial result is returned.
    pub fn collect(self) -> Result<Vec<Node>> {
        self.into_nodes()?.collect()
    }
}

/// Lazy sequence of nodes produced by [`Walk::into_nodes`].
pub struct Nodes {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for Nodes {
    type Item = Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.inner.next()? {
            Ok(entry) => Ok(Node {
                kind: NodeKind::from_file_type(entry.file_type()),
                depth: entry.depth(),
                path: entry.into_path(),
            }),
            Err(err) => Err(walk_error(&self.root, err)),
        };
        Some(item)
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    Error::io(&path, source)
}
