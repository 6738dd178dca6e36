//! End-to-end CLI tests
//!
//! These only exercise the non-interactive surface; the TUI itself is
//! covered by the unit tests in the library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_help_shows_usage() {
    let dir = TempDir::new().unwrap();
    tally_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense and income tracker"))
        .stdout(predicate::str::contains("--sink"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    tally_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tally"));
}

#[test]
fn test_config_shows_defaults_without_settings_file() {
    let dir = TempDir::new().unwrap();
    tally_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tally Configuration"))
        .stdout(predicate::str::contains("Rate:     32.0"))
        .stdout(predicate::str::contains("中文"))
        .stdout(predicate::str::contains("Sink:     (none)"));
}

#[test]
fn test_config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"language":"english","rate":29.5,"sink_path":"/tmp/out.csv"}"#,
    )
    .unwrap();

    tally_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Rate:     29.5"))
        .stdout(predicate::str::contains("/tmp/out.csv"));
}

#[test]
fn test_config_clamps_out_of_range_rate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"language":"english","rate":500.0}"#,
    )
    .unwrap();

    tally_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rate:     100.0"));
}
