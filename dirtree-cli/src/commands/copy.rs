//! Copy command implementation.
//!
//! Copies the contents of a source directory into a destination directory,
//! creating the destination and its ancestors as needed.

use crate::error::CliError;
use crate::utils::{print_json, status, GlobalOptions};
use clap::Args;
use dirtree::{copy_directory, CopyOptions};
use std::path::PathBuf;

/// Copy the contents of a directory tree.
#[derive(Args)]
pub struct CopyCommand {
    /// Directory whose contents are copied
    #[arg(value_name = "SRC")]
    pub source: PathBuf,

    /// Directory the contents are copied into
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Replace files that already exist in the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Print the copy summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CopyCommand {
    /// Execute the copy command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = CopyOptions::new().overwrite(self.overwrite);
        let summary = copy_directory(&self.source, &self.destination, &options)?;

        if self.json {
            return print_json(&summary);
        }

        let mut message = format!(
            "Copied {} files and {} directories to {}",
            summary.files,
            summary.directories,
            self.destination.display()
        );
        if summary.skipped > 0 {
            message.push_str(&format!(" ({} entries skipped)", summary.skipped));
        }
        status(global, &message);
        Ok(())
    }
}
