//! Delete command implementation.
//!
//! Removes a regular file or a whole directory tree. With `--silent` every
//! failure is ignored; with `--on-exit` the deletion is deferred until the
//! process exits.

use crate::error::CliError;
use crate::utils::{status, GlobalOptions};
use clap::Args;
use dirtree::{force_delete, force_delete_on_shutdown, force_delete_silently};
use std::path::PathBuf;

/// Delete a file or a directory tree.
#[derive(Args)]
pub struct DeleteCommand {
    /// File or directory to delete
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Ignore every failure, including a missing path
    #[arg(long)]
    pub silent: bool,

    /// Delete silently when dirtree exits instead of right away
    #[arg(long, conflicts_with = "silent")]
    pub on_exit: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.on_exit {
            status(
                global,
                &format!("Scheduled {} for deletion at exit", self.path.display()),
            );
            force_delete_on_shutdown(self.path);
            return Ok(());
        }

        if self.silent {
            force_delete_silently(&self.path);
            return Ok(());
        }

        force_delete(&self.path)?;
        status(global, &format!("Deleted {}", self.path.display()));
        Ok(())
    }
}
