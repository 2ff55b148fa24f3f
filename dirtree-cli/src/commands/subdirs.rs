//! Subdirs command implementation.

use crate::error::CliError;
use crate::utils::{print_paths, GlobalOptions};
use clap::Args;
use dirtree::operations::{
    get_subdirectories, get_subdirectories_not_ending_with_tilde, has_subdirectories,
};
use std::path::PathBuf;

/// List the direct subdirectories of a directory.
#[derive(Args)]
pub struct SubdirsCommand {
    /// Directory to list
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Skip subdirectories whose name ends with '~'
    #[arg(long)]
    pub no_tilde: bool,

    /// Print nothing; exit with status 1 if there are no subdirectories
    #[arg(long, conflicts_with_all = ["no_tilde", "json"])]
    pub any: bool,

    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl SubdirsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.any {
            return if has_subdirectories(&self.dir)? {
                Ok(())
            } else {
                Err(CliError::SemanticFailure(format!(
                    "{} has no subdirectories",
                    self.dir.display()
                )))
            };
        }

        let subdirs = if self.no_tilde {
            get_subdirectories_not_ending_with_tilde(&self.dir)?
        } else {
            get_subdirectories(&self.dir)?
        };
        print_paths(&subdirs, self.json)
    }
}
