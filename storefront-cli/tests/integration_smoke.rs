//! Smoke tests for the storefront binary: help output and fatal startup paths

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn storefront() -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env_clear();
    cmd
}

fn env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// === Help Tests ===

#[test]
fn test_help_lists_commands() {
    storefront()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    storefront()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"));
}

// === Fatal Startup Tests ===

#[test]
fn test_missing_env_file_is_fatal() {
    storefront()
        .arg("--env-file")
        .arg("/nonexistent/storefront/.env")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error loading environment file"));
}

#[test]
fn test_missing_db_variable_is_fatal() {
    let file = env_file("DB_PORT=5432\nDB_USER=shop\nDB_NAME=catalog\nDB_SSL_MODE=disable\n");

    storefront()
        .arg("--env-file")
        .arg(file.path())
        .arg("init-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing environment variable DB_HOST"));
}

#[test]
fn test_invalid_server_port_is_fatal() {
    let file = env_file("SERVER_PORT=not-a-port\n");

    storefront()
        .arg("--env-file")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid SERVER_PORT"));
}

#[test]
fn test_port_flag_wins_over_server_port_from_env_file() {
    let file = env_file("SERVER_PORT=not-a-port\n");

    storefront()
        .arg("--env-file")
        .arg(file.path())
        .arg("serve")
        .arg("--port")
        .arg("9090")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing environment variable DB_HOST"))
        .stderr(predicate::str::contains("invalid SERVER_PORT").not());
}

#[test]
fn test_unreachable_database_is_fatal() {
    // Nothing listens on port 1, so the connect fails well inside the 5s bound.
    let file = env_file(
        "DB_HOST=127.0.0.1\nDB_PORT=1\nDB_USER=shop\nDB_PASSWORD=secret\nDB_NAME=catalog\nDB_SSL_MODE=disable\n",
    );

    storefront()
        .arg("--env-file")
        .arg(file.path())
        .arg("serve")
        .arg("--port")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error initializing database"));
}
