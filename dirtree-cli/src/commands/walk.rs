//! Walk command implementation.
//!
//! Prints every entry of a tree, the root included, one per line as
//! `<depth>\t<kind>\t<path>`, or as JSON objects with `--json`.

use crate::error::CliError;
use crate::utils::{print_json, GlobalOptions};
use clap::Args;
use dirtree::{Order, Walk};
use std::io::{self, Write};
use std::path::PathBuf;

/// List every entry of a directory tree.
#[derive(Args)]
pub struct WalkCommand {
    /// Directory to walk
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only descend this many levels below the directory
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// List every directory after its contents
    #[arg(long)]
    pub descending: bool,

    /// Print the entries as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl WalkCommand {
    /// Execute the walk command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let order = if self.descending {
            Order::Descending
        } else {
            Order::Ascending
        };
        let mut walk = Walk::new(&self.dir).order(order);
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }

        if self.json {
            return print_json(&walk.collect()?);
        }

        // Stream entries as they are found.
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for node in walk.into_nodes()? {
            let node = node?;
            writeln!(
                handle,
                "{}\t{}\t{}",
                node.depth(),
                node.kind().as_str(),
                node.path().display()
            )?;
        }
        Ok(())
    }
}
