//! Files command implementation.
//!
//! Lists regular files below a directory, recursively by default or only
//! the direct entries with `--direct`.

use crate::error::CliError;
use crate::utils::{print_paths, GlobalOptions};
use clap::Args;
use dirtree::operations::{
    get_containing_files, get_regular_files_in_directory,
    get_regular_non_hidden_files_in_directory,
};
use std::path::PathBuf;

/// List regular files in a directory.
#[derive(Args)]
pub struct FilesCommand {
    /// Directory to list
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only list files directly inside the directory
    #[arg(long)]
    pub direct: bool,

    /// Skip files whose name starts with a dot
    #[arg(long, requires = "direct")]
    pub no_hidden: bool,

    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl FilesCommand {
    /// Execute the files command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let files = match (self.direct, self.no_hidden) {
            (true, true) => get_regular_non_hidden_files_in_directory(&self.dir)?,
            (true, false) => get_regular_files_in_directory(&self.dir)?,
            (false, _) => get_containing_files(&self.dir)?,
        };
        print_paths(&files, self.json)
    }
}
