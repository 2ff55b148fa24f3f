//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - The reference directory tree used across tests

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the dirtree binary.
    ///
    /// `DIRTREE_LOG_MODE` is cleared so the caller's environment cannot
    /// change the output.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirtree").expect("Failed to find dirtree binary");
        cmd.env_remove("DIRTREE_LOG_MODE");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Create a directory (and its parents) inside the environment.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a file with the given contents, creating parent directories.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Build the reference tree under `rootOfTree` and return its root.
    ///
    /// The tree is four directory levels deep with five files, and a single
    /// deepest directory `level_1/level_1_2/level_1_2_1/level_1_2_1_1`.
    pub fn reference_tree(&self) -> PathBuf {
        for file in [
            "rootOfTree/level_1/file_1__1.txt",
            "rootOfTree/level_1/level_1_1/level_1_1_1/file_1_1_1__1.txt",
            "rootOfTree/level_1/level_1_2/level_1_2_1/file_1_2_1__1.txt",
            "rootOfTree/level_1/level_1_2/level_1_2_1/level_1_2_1_1/file_1_2_1_1__1.txt",
            "rootOfTree/level_1/level_3/file_1_3__1.txt",
        ] {
            self.create_file(file, file);
        }
        self.temp_path.join("rootOfTree")
    }
}

/// Parse stdout as UTF-8 lines.
#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is not UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}
