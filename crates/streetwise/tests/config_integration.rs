//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/streets.txt");

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("STREETWISE_SOURCE")
        .env_remove("STREETWISE_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["quiz"]["questions"], 10);
    assert_eq!(json["config"]["quiz"]["kind"], "mixed");
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".streetwise.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".streetwise.toml"), "{reported}");
}

#[test]
fn discovers_yaml_config_in_parent_dir() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        tmp.path().join("streetwise.yaml"),
        "max_pages: 39\nquiz:\n  questions: 4\n  format: choice\n",
    )
    .unwrap();

    let json = info_json(&nested);

    assert_eq!(json["config"]["max_pages"], 39);
    assert_eq!(json["config"]["quiz"]["questions"], 4);
    assert_eq!(json["config"]["quiz"]["format"], "choice");
}

#[test]
fn explicit_config_overrides_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("streetwise.toml"), "lookup_count = 2\n").unwrap();
    let explicit = tmp.path().join("other.json");
    fs::write(&explicit, r#"{"lookup_count": 8}"#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["lookup_count"], 8);
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("streetwise.toml"), r#"log_level = "warn""#).unwrap();

    let output = cmd()
        .env("STREETWISE_LOG_LEVEL", "error")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("streetwise.toml"), "[quiz]\nkind = \"trivia\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Config values reaching commands
// =============================================================================

#[test]
fn source_from_config_is_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("streetwise.toml"),
        format!("source = {FIXTURE:?}\n"),
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "lookup", "street", "Yonge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yonge St: St (Street)"));
}

#[test]
fn input_limit_from_config_rejects_listing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("streetwise.toml"), "max_input_bytes = 16\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--source", FIXTURE, "extract"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn extra_types_from_config_are_recognized() {
    let tmp = TempDir::new().unwrap();
    let listing = tmp.path().join("streets.txt");
    fs::write(&listing, "The Esplanade\nYonge St\n").unwrap();
    fs::write(
        tmp.path().join("streetwise.toml"),
        "[[extra_types]]\nabbr = \"Espl\"\nlong = \"Esplanade\"\n",
    )
    .unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--source",
            listing.to_str().unwrap(),
            "lookup",
            "type",
            "Esplanade",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Espl"));
}

#[test]
fn log_dir_from_config_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(
        tmp.path().join("streetwise.toml"),
        format!("log_dir = {:?}\n", logs.to_str().unwrap()),
    )
    .unwrap();

    cmd()
        .env_remove("STREETWISE_LOG_PATH")
        .env_remove("STREETWISE_LOG_DIR")
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .success();

    let log = fs::read_to_string(logs.join("streetwise.jsonl")).unwrap();
    assert!(log.lines().any(|l| l.contains("CLI initialized")));
}
