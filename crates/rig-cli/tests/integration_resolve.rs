//! End-to-end tests for the `rig` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn rig() -> Command {
    let mut cmd = Command::cargo_bin("rig").unwrap();
    cmd.env_clear();
    cmd
}

fn resolve_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_resolve_production_prints_engine_config() {
    let config = resolve_json(rig().args(["resolve", "--production", "--quiet"]));

    assert_eq!(config["mode"], "production");
    assert_eq!(config["output"]["filename"], "[name].[chunkhash].bundle.js");
    assert_eq!(config["devtool"], false);

    let plugins: Vec<&str> = config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|stage| stage["plugin"].as_str().unwrap())
        .collect();
    assert_eq!(
        plugins,
        vec!["clean", "framework", "module-replacement", "css-extract", "html", "copy"]
    );
}

#[test]
fn test_resolve_development_test_build() {
    let config = resolve_json(rig().args([
        "resolve", "--tests", "--hmr", "--port", "9000", "--host", "0.0.0.0", "--compact", "-q",
    ]));

    assert_eq!(config["mode"], "development");
    assert_eq!(config["output"]["chunkFilename"], "[name].[fullhash].chunk.js");
    assert_eq!(config["devServer"]["hot"], true);
    assert_eq!(config["devServer"]["port"], 9000);
    assert_eq!(config["devServer"]["host"], "0.0.0.0");
    let has_copy = config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .any(|stage| stage["plugin"] == "copy");
    assert!(!has_copy);
}

#[test]
fn test_resolve_reads_flags_file_and_env() {
    let temp = TempDir::new().unwrap();
    let flags = temp.path().join("rig.toml");
    fs::write(&flags, "[runtime]\nanalyze = true\nport = 3000\n").unwrap();

    let config = resolve_json(
        rig()
            .env("RIG_PORT", "4000")
            .args(["resolve", "-q", "--flags"])
            .arg(&flags),
    );

    assert_eq!(config["devServer"]["port"], 4000);
    let last = config["plugins"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["plugin"], "bundle-analyzer");
}

#[test]
fn test_resolve_rejects_malformed_env_flag() {
    rig()
        .env("RIG_ANALYZE", "sometimes")
        .args(["resolve", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration input"));
}

#[test]
fn test_resolve_missing_flags_file() {
    rig()
        .args(["resolve", "--no-color", "--flags", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_reports_missing_template() {
    let temp = TempDir::new().unwrap();

    rig()
        .args(["check", "--no-color", "--tests", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTML template not found"));
}

#[test]
fn test_check_succeeds_for_complete_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.ejs"), "<html></html>").unwrap();
    fs::create_dir(temp.path().join("static")).unwrap();

    rig()
        .args(["check", "--no-color", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}
