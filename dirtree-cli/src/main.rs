//! Main entry point for the dirtree CLI.
//!
//! This is the command-line interface over the dirtree library. It provides
//! commands for operating on directory trees:
//! - `delete` / `rmdir`: Delete a tree
//! - `copy`: Copy a tree
//! - `deepest` / `depth`: Measure a tree
//! - `files` / `subdirs` / `walk`: List a tree
//! - `relation` / `canonical`: Reason about paths

use clap::Parser;
use dirtree_cli::cli::{Cli, Command};
use dirtree_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = dirtree::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions { quiet: cli.quiet };

    // Execute the command
    let result = match cli.command {
        Command::Delete(cmd) => cmd.execute(&global),
        Command::Rmdir(cmd) => cmd.execute(&global),
        Command::Copy(cmd) => cmd.execute(&global),
        Command::Deepest(cmd) => cmd.execute(&global),
        Command::Depth(cmd) => cmd.execute(&global),
        Command::Files(cmd) => cmd.execute(&global),
        Command::Subdirs(cmd) => cmd.execute(&global),
        Command::Relation(cmd) => cmd.execute(&global),
        Command::Canonical(cmd) => cmd.execute(&global),
        Command::Walk(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code. process::exit runs the exit handlers,
    // so paths scheduled with `delete --on-exit` are removed here.
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
