//! Configuration loading and persistence
//!
//! Settings live in a TOML file under the user config directory
//! (`~/.config/dvrbar/config.toml` on Linux). Missing files and missing
//! fields fall back to defaults. `DVRBAR_CONFIG_DIR` overrides the
//! directory, which keeps tests hermetic.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::timeline::delay::DEFAULT_BEHIND_THRESHOLD_SECS;
use crate::timeline::engine::DEFAULT_ONAIR_WINDOW_SECS;
use crate::timeline::position::LIVE_EDGE_GUARD_SECS;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Timeline and seek behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Playback further behind the live edge than this counts as
    /// behind-live (delay indicator goes inactive, label appears)
    #[serde(default = "default_behind_threshold")]
    pub behind_threshold_secs: f64,
    /// Playback within this many seconds of the live edge lights the
    /// live button
    #[serde(default = "default_onair_window")]
    pub onair_window_secs: f64,
    /// How far seek targets stay behind the live edge
    #[serde(default = "default_live_edge_guard")]
    pub live_edge_guard_secs: f64,
    /// Arrow-key seek step in the preview player
    #[serde(default = "default_seek_step")]
    pub seek_step_secs: f64,
    /// DVR window depth of the simulated stream
    #[serde(default = "default_dvr_depth")]
    pub dvr_depth_secs: f64,
}

/// Preview player appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Theme name: "default", "classic", or "ocean"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_behind_threshold() -> f64 {
    DEFAULT_BEHIND_THRESHOLD_SECS
}

fn default_onair_window() -> f64 {
    DEFAULT_ONAIR_WINDOW_SECS
}

fn default_live_edge_guard() -> f64 {
    LIVE_EDGE_GUARD_SECS
}

fn default_seek_step() -> f64 {
    5.0
}

fn default_dvr_depth() -> f64 {
    1800.0
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            behind_threshold_secs: default_behind_threshold(),
            onair_window_secs: default_onair_window(),
            live_edge_guard_secs: default_live_edge_guard(),
            seek_step_secs: default_seek_step(),
            dvr_depth_secs: default_dvr_depth(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Path of the config file.
    ///
    /// `DVRBAR_CONFIG_DIR` takes precedence over the platform config
    /// directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("DVRBAR_CONFIG_DIR") {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }

        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("dvrbar").join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration back to its file, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
