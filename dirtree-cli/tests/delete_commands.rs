//! Integration tests for the `delete` and `rmdir` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// delete
// ============================================================================

#[test]
fn test_delete_directory_tree() {
    let env = TestEnv::new();
    let root = env.reference_tree();

    env.command().arg("delete").arg(&root).assert().success();

    assert!(!root.exists());
    assert!(env.temp_path.exists());
}

#[test]
fn test_delete_file() {
    let env = TestEnv::new();
    let file = env.create_file("notes.txt", "x");

    env.command()
        .arg("delete")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted"));

    assert!(!file.exists());
}

#[test]
fn test_delete_missing_path_fails() {
    let env = TestEnv::new();

    env.command()
        .arg("delete")
        .arg(env.temp_path.join("missing"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No such file or directory: "));
}

#[test]
fn test_delete_silent_missing_path_succeeds() {
    let env = TestEnv::new();

    env.command()
        .args(["delete", "--silent"])
        .arg(env.temp_path.join("missing"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_delete_on_exit_removes_tree_when_process_ends() {
    let env = TestEnv::new();
    let root = env.reference_tree();

    env.command()
        .args(["delete", "--on-exit"])
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("Scheduled"));

    assert!(!root.exists());
}

#[test]
fn test_delete_on_exit_missing_path_is_silent() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "delete", "--on-exit"])
        .arg(env.temp_path.join("missing"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_delete_silent_conflicts_with_on_exit() {
    let env = TestEnv::new();

    env.command()
        .args(["delete", "--silent", "--on-exit", "x"])
        .assert()
        .failure()
        .code(2);
}

// ============================================================================
// rmdir
// ============================================================================

#[test]
fn test_rmdir_removes_tree() {
    let env = TestEnv::new();
    let root = env.reference_tree();

    env.command().arg("rmdir").arg(&root).assert().success();
    assert!(!root.exists());
}

#[test]
fn test_rmdir_refuses_file() {
    let env = TestEnv::new();
    let file = env.create_file("testFile.txt", "keep");

    env.command()
        .arg("rmdir")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No such directory"));

    assert!(file.exists());
}

#[test]
fn test_rmdir_silent_ignores_file() {
    let env = TestEnv::new();
    let file = env.create_file("testFile.txt", "keep");

    env.command()
        .args(["rmdir", "--silent"])
        .arg(&file)
        .assert()
        .success();

    assert!(file.exists());
}
