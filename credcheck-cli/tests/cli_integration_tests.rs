//! Integration tests for credcheck CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn credentials_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Test the version command
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("credcheck"));
}

/// Test the help command
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_check_builtin_match() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("user1")
        .arg("--password").arg("password1")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED"));
}

#[test]
fn test_check_builtin_mismatch() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("user1")
        .arg("--password").arg("wrong")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("REJECTED"));
}

#[test]
fn test_check_is_case_sensitive() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("User1")
        .arg("--password").arg("password1")
        .assert()
        .failure();
}

#[test]
fn test_check_json_format() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("-u").arg("user2")
        .arg("-p").arg("password2")
        .arg("--format").arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\": true"))
        .stdout(predicate::str::contains("\"username\": \"user2\""));
}

#[test]
fn test_check_output_never_shows_password() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("user1")
        .arg("--password").arg("s3cret-value")
        .arg("--format").arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("s3cret-value").not());
}

#[test]
fn test_check_with_credentials_file() {
    let file = credentials_file(
        r#"
[[credentials]]
username = "alice"
password = "wonderland"
"#,
    );

    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("alice")
        .arg("--password").arg("wonderland")
        .arg("--credentials").arg(file.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("user1")
        .arg("--password").arg("password1")
        .arg("--credentials").arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_check_missing_credentials_file() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--username").arg("user1")
        .arg("--password").arg("password1")
        .arg("--credentials").arg("/nonexistent/credentials.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load credentials"));
}

#[test]
fn test_check_requires_username() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("check")
        .arg("--password").arg("password1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username"));
}

#[test]
fn test_validate_valid_file() {
    let file = credentials_file(
        r#"
[[credentials]]
username = "alice"
password = "a"

[[credentials]]
username = "bob"
password = "b"
"#,
    );

    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials file is valid"))
        .stdout(predicate::str::contains("Records: 2"))
        .stdout(predicate::str::contains("- alice"))
        .stdout(predicate::str::contains("- bob"))
        .stdout(predicate::str::contains("password").not());
}

#[test]
fn test_validate_duplicate_usernames() {
    let file = credentials_file(
        r#"
[[credentials]]
username = "alice"
password = "a"

[[credentials]]
username = "alice"
password = "b"
"#,
    );

    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains("duplicate username: alice"));
}

#[test]
fn test_validate_empty_file() {
    let file = credentials_file("");

    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("no credentials defined"));
}

#[test]
fn test_validate_nonexistent_file() {
    let mut cmd = Command::cargo_bin("credcheck").unwrap();
    cmd.arg("validate")
        .arg("/nonexistent/credentials.toml")
        .assert()
        .failure();
}
