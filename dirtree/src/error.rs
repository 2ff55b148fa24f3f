//! Error types for the dirtree library.
//!
//! This module provides the error taxonomy shared by every tree operation,
//! using `thiserror` for ergonomic error handling. Every variant that refers
//! to a path carries its absolute form so failures can be diagnosed without a
//! debugger.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a dirtree error.
///
/// # Examples
///
/// ```
/// use dirtree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dirtree library.
///
/// Precondition failures (`InvalidArgument`, `NotFound`, `NotADirectory`,
/// `NotAFileOrDirectory`) are raised before any filesystem mutation starts.
/// `Io` is raised when an individual filesystem call fails after the
/// preconditions passed.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or malformed.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A path that had to exist does not.
    #[error("No such file or directory: {} (argument '{argument}')", path.display())]
    NotFound {
        /// The name of the offending argument.
        argument: String,
        /// Absolute form of the missing path.
        path: PathBuf,
    },

    /// A path that had to be an existing directory is missing or is not a
    /// directory.
    #[error("No such directory: {} (argument '{argument}')", path.display())]
    NotADirectory {
        /// The name of the offending argument.
        argument: String,
        /// Absolute form of the offending path.
        path: PathBuf,
    },

    /// A path exists but is neither a regular file nor a directory.
    #[error("No such file or directory: {} is neither a regular file nor a directory (argument '{argument}')", path.display())]
    NotAFileOrDirectory {
        /// The name of the offending argument.
        argument: String,
        /// Absolute form of the offending path.
        path: PathBuf,
    },

    /// An underlying filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Absolute form of the path the operation was acting on.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An internal invariant was violated.
    #[error("internal error: {details}")]
    Internal {
        /// Details about the violated invariant.
        details: String,
    },
}

impl Error {
    /// Builds an `InvalidArgument` error.
    pub fn invalid_argument(argument: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    /// Builds a `NotFound` error for `path`.
    pub fn not_found(argument: &str, path: &Path) -> Self {
        Self::NotFound {
            argument: argument.to_string(),
            path: absolute_for_display(path),
        }
    }

    /// Builds a `NotADirectory` error for `path`.
    pub fn not_a_directory(argument: &str, path: &Path) -> Self {
        Self::NotADirectory {
            argument: argument.to_string(),
            path: absolute_for_display(path),
        }
    }

    /// Builds a `NotAFileOrDirectory` error for `path`.
    pub fn not_a_file_or_directory(argument: &str, path: &Path) -> Self {
        Self::NotAFileOrDirectory {
            argument: argument.to_string(),
            path: absolute_for_display(path),
        }
    }

    /// Wraps an I/O error raised while operating on `path`.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: absolute_for_display(path),
            source,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::Error;
    /// use std::path::Path;
    ///
    /// let err = Error::not_found("path", Path::new("/nonexistent"));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error indicates a missing or wrong-kind directory.
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Check if error came from an underlying filesystem call.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::io(
    ///     Path::new("/restricted"),
    ///     io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    /// );
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// The path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::NotADirectory { path, .. }
            | Self::NotAFileOrDirectory { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidArgument { .. } | Self::Internal { .. } => None,
        }
    }
}

/// Absolute form of `path` for error messages.
///
/// Falls back to the path as given when the working directory cannot be
/// read.
fn absolute_for_display(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
