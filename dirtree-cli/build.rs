//! Build script for dirtree-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("dirtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete, copy and inspect directory trees")
        .long_about(
            "Command-line tool for recursive deletion, copying, depth measurement \
             and path relationship queries on directory trees",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("delete")
                .about("Delete a file or a directory tree")
                .long_about("Delete a file or directory tree now, silently, or when dirtree exits"),
            Command::new("rmdir")
                .about("Delete a directory tree")
                .long_about("Delete a directory tree, refusing regular files"),
            Command::new("copy")
                .about("Copy the contents of a directory tree")
                .long_about("Copy every file and directory below SRC into DEST"),
            Command::new("deepest")
                .about("Print the deepest directory of a tree")
                .long_about("Print a directory with the greatest depth below DIR"),
            Command::new("depth")
                .about("Print the depth of a directory tree")
                .long_about("Print how many directory levels lie below DIR"),
            Command::new("files")
                .about("List regular files in a directory")
                .long_about("List regular files below DIR, recursively or direct entries only"),
            Command::new("subdirs")
                .about("List direct subdirectories of a directory")
                .long_about("List the directories directly inside DIR"),
            Command::new("relation")
                .about("Show how two paths relate to each other")
                .long_about("Report or check the ancestor/descendant relationship of two paths"),
            Command::new("canonical")
                .about("Print the canonical form of a path")
                .long_about("Print the absolute form of a path with . and .. resolved"),
            Command::new("walk")
                .about("List every entry of a directory tree")
                .long_about("List every entry below DIR with its depth and kind"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dirtree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
