//! Integration tests for configuration handling

use predicates::prelude::*;

use super::helpers::{dvrbar, temp_config_dir, write_config};

#[test]
fn config_show_prints_defaults_without_file() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("behind_threshold_secs = 20.0"))
        .stdout(predicate::str::contains("onair_window_secs = 30.0"))
        .stdout(predicate::str::contains("[ui]"));
}

#[test]
fn config_show_reflects_config_file() {
    let config_dir = temp_config_dir();
    write_config(
        &config_dir,
        r#"
        [playback]
        behind_threshold_secs = 45.0
        "#,
    );

    dvrbar(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("behind_threshold_secs = 45.0"))
        // Unset fields come back as defaults
        .stdout(predicate::str::contains("onair_window_secs = 30.0"));
}

#[test]
fn malformed_config_is_reported() {
    let config_dir = temp_config_dir();
    write_config(&config_dir, "playback = \"not a table\"");

    dvrbar(&config_dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse config"));
}

#[test]
fn completions_emit_for_bash() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dvrbar"));
}

#[test]
fn version_flag_prints_package_version() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
