//! Library exports for dirtree-cli.
//!
//! This module exports the CLI structure for use by the binary and by tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
