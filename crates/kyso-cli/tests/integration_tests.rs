//! Integration tests for the kyso CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd. None of them
//! reach the network: each runs with an isolated `KYSO_HOME`.

use assert_cmd::Command;
use kyso_test_utils::TestReport;
use predicates::prelude::*;
use tempfile::TempDir;

/// A Command for the kyso binary with its state directory in `home`
fn kyso_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kyso"));
    cmd.env("KYSO_HOME", home.path())
        .env_remove("KYSO_API")
        .env_remove("KYSO_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyso"))
        .stdout(predicate::str::contains("push"));
}

#[test]
fn test_version_output() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kyso"));
}

#[test]
fn test_no_command_shows_help_hint() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("kyso --help"));
}

#[test]
fn test_unknown_command_fails() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home).arg("frobnicate").assert().failure();
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_logout_without_session() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_removes_session_file() {
    let home = TempDir::new().unwrap();
    let session = home.path().join("auth.json");
    std::fs::write(
        &session,
        r#"{"kysoInstallUrl":"http://localhost:1/api/v1","token":"t"}"#,
    )
    .unwrap();

    kyso_cmd(&home).arg("logout").assert().success();
    assert!(!session.exists());
}

#[test]
fn test_whoami_requires_login() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_status_without_config_fails() {
    let home = TempDir::new().unwrap();
    let report = TestReport::new();
    kyso_cmd(&home)
        .args(["status"])
        .arg(report.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No kyso.json, kyso.yml or kyso.yaml"));
}

#[test]
fn test_push_dry_run_lists_files() {
    let home = TempDir::new().unwrap();
    let report = TestReport::new();
    report.write_json_config("acme", "data", "Quarterly Numbers");
    report.write("index.md", "# Q1");
    report.write(".kysoignore", "*.tmp\n");
    report.write("scratch.tmp", "x");

    kyso_cmd(&home)
        .args(["push", "--dry-run"])
        .arg(report.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("acme"))
        .stdout(predicate::str::contains("quarterly-numbers"))
        .stdout(predicate::str::contains("index.md"))
        .stdout(predicate::str::contains("scratch.tmp").not());
}

#[test]
fn test_push_legacy_channel_config() {
    let home = TempDir::new().unwrap();
    let report = TestReport::new();
    report.write(
        "kyso.yaml",
        "organization: acme\nchannel: eng\ntitle: Legacy\nmain: index.md\n",
    );
    report.write("index.md", "# Legacy");

    kyso_cmd(&home)
        .args(["push", "--dry-run"])
        .arg(report.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/eng/legacy"));
}

#[test]
fn test_push_requires_login() {
    let home = TempDir::new().unwrap();
    let report = TestReport::new();
    report.write_json_config("acme", "data", "Q1");
    report.write("index.md", "# Q1");

    kyso_cmd(&home)
        .arg("push")
        .arg(report.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_clone_rejects_bad_address() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .args(["clone", "acme/only-two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ORGANIZATION/CHANNEL/REPORT"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    kyso_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kyso"));
}
