//! Integration tests for the `status` subcommand

use predicates::prelude::*;

use super::helpers::{dvrbar, temp_config_dir, write_config};

#[test]
fn behind_position_reports_behind_states() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"))
        .stdout(predicate::str::contains("-2:05"))
        .stdout(predicate::str::contains("off"));
}

#[test]
fn behind_status_block_layout() {
    let config_dir = temp_config_dir();

    let output = dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
        ])
        .output()
        .expect("Should run status");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Output should be UTF-8");
    insta::assert_snapshot!(stdout, @r###"
    live button   off
    indicator     inactive
    delay         -2:05
    bar           93.06%
    to live edge  2:05
    window        30:00
    "###);
}

#[test]
fn live_position_reports_onair_states() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1795",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("onair"))
        .stdout(predicate::str::contains("active"));
}

#[test]
fn paused_snapshot_forces_inactive_indicator() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1795",
            "--paused",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"))
        .stdout(predicate::str::contains("off"));
}

#[test]
fn json_output_carries_frame_fields() {
    let config_dir = temp_config_dir();

    let output = dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
            "--json",
        ])
        .output()
        .expect("Should run status");

    assert!(output.status.success());
    let frame: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");

    assert_eq!(frame["live_button"], "off");
    assert_eq!(frame["delay_state"], "inactive");
    assert_eq!(frame["delay_label"], "-2:05");
    assert_eq!(frame["time_to_live_edge"], 125.0);
    assert_eq!(frame["window_duration"], 1800.0);

    let fraction = frame["bar_fraction"].as_f64().expect("Fraction is a number");
    assert!((fraction - 1675.0 / 1800.0).abs() < 1e-9);
}

#[test]
fn threshold_override_widens_live_band() {
    let config_dir = temp_config_dir();

    // 125s behind, but a 200s threshold keeps the stream live
    dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
            "--behind-threshold",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("active"))
        .stdout(predicate::str::contains("delay         -\n"));
}

#[test]
fn configured_threshold_applies_without_override() {
    let config_dir = temp_config_dir();
    write_config(
        &config_dir,
        r#"
        [playback]
        behind_threshold_secs = 200.0
        "#,
    );

    dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "1675",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("active"));
}

#[test]
fn inverted_window_bounds_are_rejected() {
    let config_dir = temp_config_dir();

    dvrbar(&config_dir)
        .args([
            "status",
            "--window-start",
            "100",
            "--window-end",
            "50",
            "--position",
            "75",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("precedes"));
}

#[test]
fn invalid_position_fails_soft_to_zero_bar() {
    let config_dir = temp_config_dir();

    let output = dvrbar(&config_dir)
        .args([
            "status",
            "--window-end",
            "1800",
            "--position",
            "-1",
            "--json",
        ])
        .output()
        .expect("Should run status");

    assert!(output.status.success());
    let frame: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(frame["bar_fraction"], 0.0);
}
