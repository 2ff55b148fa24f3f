//! Rmdir command implementation.

use crate::error::CliError;
use crate::utils::{status, GlobalOptions};
use clap::Args;
use dirtree::{rm_dir, rm_dir_silently};
use std::path::PathBuf;

/// Delete a directory tree. Regular files are refused.
#[derive(Args)]
pub struct RmdirCommand {
    /// Directory to delete
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Ignore every failure, including a missing directory
    #[arg(long)]
    pub silent: bool,
}

impl RmdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.silent {
            rm_dir_silently(&self.dir);
            return Ok(());
        }

        rm_dir(&self.dir)?;
        status(global, &format!("Deleted {}", self.dir.display()));
        Ok(())
    }
}
