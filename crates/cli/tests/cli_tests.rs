use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("hostelvoice").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operator console for the HostelVoice API"));
}

#[test]
fn test_cli_issues_help() {
    let mut cmd = Command::cargo_bin("hostelvoice").unwrap();
    cmd.arg("issues").arg("--help").assert().success().stdout(predicate::str::contains("list"));
}

#[test]
fn test_cli_admin_help() {
    let mut cmd = Command::cargo_bin("hostelvoice").unwrap();
    cmd.arg("admin")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));
}

#[test]
fn test_cli_rejects_unknown_command() {
    let mut cmd = Command::cargo_bin("hostelvoice").unwrap();
    cmd.arg("leave").assert().failure();
}
