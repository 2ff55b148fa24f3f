//! Command to print the deepest directory of a tree.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dirtree::find_deepest;
use std::path::PathBuf;

/// Print the deepest directory below a directory.
#[derive(Args)]
pub struct DeepestCommand {
    /// Directory to search
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

impl DeepestCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let deepest = find_deepest(&self.dir)?;
        println!("{}", deepest.display());
        Ok(())
    }
}
