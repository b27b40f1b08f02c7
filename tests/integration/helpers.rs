//! Shared helpers for integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// Fresh temporary directory for a hermetic config.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Should create temp config dir")
}

/// The dvrbar binary with its config pointed at a temp directory, so
/// tests never touch the user's real configuration.
pub fn dvrbar(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dvrbar").expect("Binary should build");
    cmd.env("DVRBAR_CONFIG_DIR", config_dir.path());
    cmd
}

/// Write a config file into the temp directory.
pub fn write_config(config_dir: &TempDir, content: &str) {
    std::fs::write(config_dir.path().join("config.toml"), content)
        .expect("Should write test config");
}
