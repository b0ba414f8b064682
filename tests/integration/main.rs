//! Integration tests for the libcat CLI
//!
//! These tests drive the real binary: the scripted demo, ISBN validation,
//! and full interactive menu sessions fed through stdin.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a libcat command with an isolated config
fn libcat() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("libcat"));
    cmd.env_remove("LIBCAT_CONFIG").env("XDG_CONFIG_HOME", "/nonexistent-libcat-test");
    cmd
}

// =============================================================================
// BASIC COMMAND TESTS
// =============================================================================

#[test]
fn test_version() {
    libcat().arg("--version").assert().success().stdout(predicate::str::contains("libcat"));
}

#[test]
fn test_version_subcommand_json() {
    libcat()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    libcat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage books, patrons, and checkouts"));
}

// =============================================================================
// VALIDATE-ISBN TESTS
// =============================================================================

#[test]
fn test_validate_isbn_accepts() {
    libcat()
        .args(["validate-isbn", "111-222-333-A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid ISBN: 111-222-333-A"));
}

#[test]
fn test_validate_isbn_rejects() {
    libcat()
        .args(["validate-isbn", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid ISBN: abc"));
}

#[test]
fn test_validate_isbn_json() {
    let output = libcat().args(["--json", "validate-isbn", "1-2-3-4"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], true);
}

// =============================================================================
// DEMO TESTS
// =============================================================================

#[test]
fn test_demo_walkthrough() {
    libcat()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked out \"1984\" to Zhang San"))
        .stdout(predicate::str::contains("Error: patron Wang Wu (card 1003) owes 10.50 in fees"))
        .stdout(predicate::str::contains("Patrons with outstanding fees:\n  Wang Wu"))
        .stdout(predicate::str::contains("Patron: Zhang San, Book: 1984, Date: "));
}

#[test]
fn test_demo_json() {
    let output = libcat().args(["demo", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["steps"][0]["success"], true);
    assert_eq!(value["steps"][1]["code"], "OUTSTANDING_FEES");
    assert_eq!(value["debtors"]["names"][0], "Wang Wu");
    assert_eq!(value["transactions"]["total"], 1);
}

// =============================================================================
// CONFIG TESTS
// =============================================================================

#[test]
fn test_config_currency_applies() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[fees]\ncurrency = \"EUR \"\n").unwrap();

    libcat()
        .args(["--config", config.to_str().unwrap(), "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fees: EUR 10.50"));
}

#[test]
fn test_config_from_env() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[output]\njson = true\n").unwrap();

    libcat()
        .env("LIBCAT_CONFIG", &config)
        .arg("validate-isbn")
        .arg("1-1-1-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "not = [valid").unwrap();

    libcat()
        .args(["--config", config.to_str().unwrap(), "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
