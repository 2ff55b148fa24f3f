//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalCommand, CompletionsCommand, CopyCommand, DeepestCommand, DeleteCommand,
    DepthCommand, FilesCommand, RelationCommand, RmdirCommand, SubdirsCommand, WalkCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for deleting, copying and measuring directory trees.
#[derive(Parser)]
#[command(name = "dirtree")]
#[command(version, about = "Delete, copy and inspect directory trees", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Delete a file or a directory tree
    Delete(DeleteCommand),

    /// Delete a directory tree
    Rmdir(RmdirCommand),

    /// Copy the contents of a directory tree
    Copy(CopyCommand),

    /// Print the deepest directory of a tree
    Deepest(DeepestCommand),

    /// Print the depth of a directory tree
    Depth(DepthCommand),

    /// List regular files in a directory
    Files(FilesCommand),

    /// List direct subdirectories of a directory
    Subdirs(SubdirsCommand),

    /// Show how two paths relate to each other
    Relation(RelationCommand),

    /// Print the canonical form of a path
    Canonical(CanonicalCommand),

    /// List every entry of a directory tree
    Walk(WalkCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
