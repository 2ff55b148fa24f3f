//! Command to print the canonical form of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dirtree::to_canonical_path;
use std::path::PathBuf;

/// Print the absolute, dot-free form of a path. The path need not exist.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl CanonicalCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let canonical = to_canonical_path(&self.path)?;
        println!("{}", canonical.display());
        Ok(())
    }
}
