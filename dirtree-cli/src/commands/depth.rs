//! Command to print the depth of a tree.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dirtree::get_depth;
use std::path::PathBuf;

/// Print how many directory levels lie below a directory.
#[derive(Args)]
pub struct DepthCommand {
    /// Directory to measure
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

impl DepthCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", get_depth(&self.dir)?);
        Ok(())
    }
}
