//! Command-line tests for the wettenparser binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("bw1")
        .join("content.xml")
}

fn wettenparser() -> Command {
    cargo_bin_cmd!("regelrecht-wettenparser")
}

#[test]
fn test_parse_writes_json() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("bw1.json");

    wettenparser()
        .arg("parse")
        .arg(fixture_path())
        .args(["--law-code", "BW1", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 4 articles for law BW1."));

    let content = fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(4));
    assert_eq!(parsed[0]["identifier"], "BW1:1");
}

#[test]
fn test_parse_default_output_file() {
    let dir = tempdir().unwrap();

    wettenparser()
        .current_dir(dir.path())
        .arg("parse")
        .arg(fixture_path())
        .args(["--law-code", "BW1"])
        .assert()
        .success();

    assert!(dir.path().join("parsed_articles.json").exists());
}

#[test]
fn test_blank_law_code_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");

    wettenparser()
        .arg("parse")
        .arg(fixture_path())
        .args(["--law-code", "  ", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid law code"));

    assert!(!output.exists());
}

#[test]
fn test_non_xml_path_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wet.txt");
    fs::write(&input, "<wet/>").unwrap();

    wettenparser()
        .arg("parse")
        .arg(&input)
        .args(["--law-code", "BW1"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid XML file"));

    assert!(!dir.path().join("parsed_articles.json").exists());
}

#[test]
fn test_malformed_xml_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("kapot.xml");
    fs::write(&input, "<toestand><artikel></toestand>").unwrap();
    let output = dir.path().join("out.json");

    wettenparser()
        .arg("parse")
        .arg(&input)
        .args(["--law-code", "BW1", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML parsing failed"));

    assert!(!output.exists());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("bw1.json");

    wettenparser()
        .env("RUST_LOG", "debug")
        .arg("parse")
        .arg(fixture_path())
        .args(["--law-code", "BW1", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping article").not())
        .stderr(predicate::str::contains("Skipping article without paragraph text"));
}

#[test]
fn test_quiet_by_default() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("bw1.json");

    wettenparser()
        .env_remove("RUST_LOG")
        .arg("parse")
        .arg(fixture_path())
        .args(["--law-code", "BW1", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping article").not());
}
