//! Integration tests for the `copy` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_copy_reference_tree() {
    let env = TestEnv::new();
    let root = env.reference_tree();
    let destination = env.temp_path.join("copy/of/tree");

    env.command()
        .arg("copy")
        .arg(&root)
        .arg(&destination)
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied 5 files"));

    let copied = destination.join("level_1/level_1_2/level_1_2_1/level_1_2_1_1/file_1_2_1_1__1.txt");
    assert_eq!(
        fs::read_to_string(copied).unwrap(),
        "rootOfTree/level_1/level_1_2/level_1_2_1/level_1_2_1_1/file_1_2_1_1__1.txt"
    );
}

#[test]
fn test_copy_json_summary() {
    let env = TestEnv::new();
    let root = env.reference_tree();

    let output = env
        .command()
        .args(["copy", "--json"])
        .arg(&root)
        .arg(env.temp_path.join("copy"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["files"], 5);
    // rootOfTree's eight directories, counted from the destination root.
    assert_eq!(summary["directories"], 8);
    assert_eq!(summary["skipped"], 0);
}

#[test]
fn test_copy_existing_file_requires_overwrite() {
    let env = TestEnv::new();
    env.create_file("source/a.txt", "new");
    env.create_file("dest/a.txt", "old");

    env.command()
        .args(["copy", "source", "dest"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
    assert_eq!(
        fs::read_to_string(env.temp_path.join("dest/a.txt")).unwrap(),
        "old"
    );

    env.command()
        .args(["copy", "--overwrite", "source", "dest"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(env.temp_path.join("dest/a.txt")).unwrap(),
        "new"
    );
}

#[test]
fn test_copy_into_source_is_rejected() {
    let env = TestEnv::new();
    env.create_file("source/a.txt", "x");

    env.command()
        .args(["copy", "source", "source/nested"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid argument"));

    assert!(!env.temp_path.join("source/nested").exists());
}

#[test]
fn test_copy_onto_source_keeps_contents() {
    let env = TestEnv::new();
    env.create_file("source/data.txt", "precious");

    env.command()
        .args(["copy", "--overwrite", "source", "source/."])
        .assert()
        .code(4);

    assert_eq!(
        fs::read_to_string(env.temp_path.join("source/data.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn test_copy_missing_source() {
    let env = TestEnv::new();

    env.command()
        .args(["copy", "missing", "dest"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No such directory"));

    assert!(!env.temp_path.join("dest").exists());
}
