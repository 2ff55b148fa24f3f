//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! mostly output formatting.

use crate::error::CliError;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Print paths one per line, or as a JSON array of strings.
pub fn print_paths(paths: &[PathBuf], json: bool) -> Result<(), CliError> {
    if json {
        let strings: Vec<String> = paths.iter().map(|p| display_path(p)).collect();
        return print_json(&strings);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for path in paths {
        writeln!(handle, "{}", path.display())?;
    }
    Ok(())
}

/// Lossy string form of a path for JSON output.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Print a status line on stderr unless `--quiet` is set.
pub fn status(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(Path::new("/usr/local/bin")), "/usr/local/bin");
    }

    #[test]
    fn test_global_options_default_is_not_quiet() {
        assert!(!GlobalOptions::default().quiet);
    }
}
