//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `delete`: Delete a file or directory tree, now, silently or at exit
//! - `rmdir`: Delete a directory tree
//! - `copy`: Copy the contents of a directory tree
//! - `deepest`: Print the deepest directory of a tree
//! - `depth`: Print the depth of a tree
//! - `files`: List regular files
//! - `subdirs`: List direct subdirectories
//! - `relation`: Show or check how two paths relate
//! - `canonical`: Print the canonical form of a path
//! - `walk`: List every entry of a tree
//! - `completions`: Generate shell completion scripts

pub mod canonical;
pub mod completions;
pub mod copy;
pub mod deepest;
pub mod delete;
pub mod depth;
pub mod files;
pub mod relation;
pub mod rmdir;
pub mod subdirs;
pub mod walk;

pub use canonical::CanonicalCommand;
pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use deepest::DeepestCommand;
pub use delete::DeleteCommand;
pub use depth::DepthCommand;
pub use files::FilesCommand;
pub use relation::{RelationCheck, RelationCommand};
pub use rmdir::RmdirCommand;
pub use subdirs::SubdirsCommand;
pub use walk::WalkCommand;
