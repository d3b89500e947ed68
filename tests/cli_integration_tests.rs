//! CLI integration tests
//!
//! These tests run the `verbump` binary in a temporary directory and verify:
//! - show (no arguments): summary line, not-initialized failure
//! - init: prompt sequence on stdin, defaults, validation, cancellation
//! - major/minor/patch: persisted bump and printed summary
//! - unknown commands and global options

mod common;

use assert_cmd::Command;
use common::{read_state, write_state};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn verbump(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("verbump").expect("verbump binary");
    cmd.current_dir(dir.path());
    cmd
}

// ============================================================================
// SHOW
// ============================================================================

#[test]
fn test_show_prints_summary() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 4);

    verbump(&dir)
        .assert()
        .success()
        .stdout("Widget - alpha v1.2.3 build 4\n");
}

#[test]
fn test_show_uninitialized_fails_without_creating_file() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("verbump init"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_show_corrupt_state() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ver.json"), "{ not json").unwrap();

    verbump(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to parse"));
}

#[test]
fn test_show_json_format() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "0.1.0", "alpha", 0);

    let output = verbump(&dir).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Widget",
            "version": "0.1.0",
            "versionString": "alpha",
            "build": 0
        })
    );
}

#[test]
fn test_show_never_colors_piped_output() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "0.1.0", "alpha", 0);

    verbump(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_show_custom_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("meta")).unwrap();
    write_state(&dir.path().join("meta"), "Widget", "3.0.0", "gamma", 1);

    verbump(&dir)
        .args(["--file", "meta/ver.json"])
        .assert()
        .success()
        .stdout("Widget - gamma v3.0.0 build 1\n");
}

// ============================================================================
// INIT
// ============================================================================

#[test]
fn test_init_with_defaults_then_show() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n\nalpha\n\n\n")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        read_state(dir.path()),
        serde_json::json!({
            "name": "Widget",
            "version": "0.1.0",
            "versionString": "alpha",
            "build": 0
        })
    );
    assert!(!dir.path().join("ver.json.bak").exists());

    verbump(&dir)
        .assert()
        .success()
        .stdout("Widget - alpha v0.1.0 build 0\n");
}

#[test]
fn test_init_with_explicit_values() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Gadget\nv1.4.0\ncanteloupe\n12\ny\n")
        .assert()
        .success();

    let state = read_state(dir.path());
    assert_eq!(state["version"], "1.4.0");
    assert_eq!(state["versionString"], "canteloupe");
    assert_eq!(state["build"], 12);
}

#[test]
fn test_init_accepts_padded_version_answer() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Gadget\n  v1.4.0  \ncanteloupe\n\n\n")
        .assert()
        .success();

    assert_eq!(read_state(dir.path())["version"], "1.4.0");
}

#[test]
fn test_init_reprompts_blank_name() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("\n\nWidget\n\nalpha\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Project name (required)").count(3));

    assert_eq!(read_state(dir.path())["name"], "Widget");
}

#[test]
fn test_init_shows_record_before_confirming() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n2.0.0\nalpha\n5\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Widget - alpha v2.0.0 build 5"));
}

#[test]
fn test_init_invalid_version() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n1.2\nalpha\n\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid version format"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_init_invalid_build_number() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n\nalpha\n-4\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid build number"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_init_declined() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n\nalpha\n\nn\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Aborted"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_init_closed_input() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_init_twice_keeps_first_state() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Widget\n\nalpha\n\n\n")
        .assert()
        .success();
    let before = fs::read(dir.path().join("ver.json")).unwrap();

    verbump(&dir)
        .arg("init")
        .write_stdin("Other\n9.0.0\nbeta\n3\n\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already versioned"));

    assert_eq!(fs::read(dir.path().join("ver.json")).unwrap(), before);
}

// ============================================================================
// BUMP
// ============================================================================

#[test]
fn test_major() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 0);

    verbump(&dir)
        .arg("major")
        .assert()
        .success()
        .stdout("Widget - alpha v2.0.0 build 0\n");

    assert_eq!(read_state(dir.path())["version"], "2.0.0");
}

#[test]
fn test_minor() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 0);

    verbump(&dir)
        .arg("minor")
        .assert()
        .success()
        .stdout("Widget - alpha v1.3.0 build 0\n");

    assert_eq!(read_state(dir.path())["version"], "1.3.0");
}

#[test]
fn test_patch() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 0);

    verbump(&dir)
        .arg("patch")
        .assert()
        .success()
        .stdout("Widget - alpha v1.2.4 build 0\n");

    assert_eq!(read_state(dir.path())["version"], "1.2.4");
    assert!(!dir.path().join("ver.json.bak").exists());
}

#[test]
fn test_bump_uninitialized() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("patch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("verbump init"));

    assert!(!dir.path().join("ver.json").exists());
}

#[test]
fn test_bump_refuses_when_backup_exists() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 0);
    fs::write(dir.path().join("ver.json.bak"), "evidence").unwrap();

    verbump(&dir)
        .arg("minor")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("ver.json.bak"));

    assert_eq!(read_state(dir.path())["version"], "1.2.3");
    assert_eq!(
        fs::read_to_string(dir.path().join("ver.json.bak")).unwrap(),
        "evidence"
    );
}

#[test]
fn test_bump_at_maximum_component_fails() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.18446744073709551615", "alpha", 0);
    let before = fs::read(dir.path().join("ver.json")).unwrap();

    verbump(&dir)
        .arg("patch")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot bump patch version"));

    assert_eq!(fs::read(dir.path().join("ver.json")).unwrap(), before);
    assert!(!dir.path().join("ver.json.bak").exists());
}

#[test]
fn test_bump_json_format() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "0.9.9", "alpha", 2);

    verbump(&dir)
        .args(["minor", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\":\"0.10.0\""));
}

// ============================================================================
// USAGE
// ============================================================================

#[test]
fn test_unknown_command() {
    let dir = TempDir::new().unwrap();
    write_state(dir.path(), "Widget", "1.2.3", "alpha", 0);

    verbump(&dir)
        .arg("release")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown command 'release'"));

    assert_eq!(read_state(dir.path())["version"], "1.2.3");
}

#[test]
fn test_extra_arguments_are_usage_errors() {
    let dir = TempDir::new().unwrap();

    verbump(&dir).args(["major", "minor"]).assert().code(2);
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();

    verbump(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("major"));
}
