//! Configuration management
//!
//! The configuration lives in `<config_dir>/eduaudio/config.toml`. Every
//! field has a default, so a missing file or a partial file is fine.
//! `EDUAUDIO_CONFIG` points at a different file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::lecture::Lecture;
use crate::player::PlaybackRate;
use crate::theme::{named_theme, Theme, THEME_NAMES};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EDUAUDIO_CONFIG";

/// Shortest accepted tick interval.
const MIN_TICK_MS: u64 = 10;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub share: ShareConfig,
}

/// `[player]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playback rate at start (0.5, 1, 1.5 or 2)
    pub default_rate: f64,
    /// Volume at start, `[0, 1]`
    pub default_volume: f64,
    /// Seconds skipped by the arrow keys
    pub skip_seconds: f64,
    /// Media clock tick in milliseconds
    pub tick_ms: u64,
    /// Colour theme (lecture_hall, ocean or plain)
    pub theme: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_rate: 1.0,
            default_volume: 1.0,
            skip_seconds: 15.0,
            tick_ms: 100,
            theme: "lecture_hall".to_string(),
        }
    }
}

/// `[share]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Page URL used for share links instead of the lecture's own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("eduaudio").join("config.toml"))
    }

    /// Load from the default location, or defaults when there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Starting playback rate.
    pub fn playback_rate(&self) -> Result<PlaybackRate> {
        PlaybackRate::from_f64(self.player.default_rate)
            .context("Invalid [player] default_rate in config")
    }

    /// Colour theme for the player; `NO_COLOR` forces the plain theme.
    pub fn theme(&self) -> Result<Theme> {
        named_theme(&self.player.theme).with_context(|| {
            format!(
                "Unknown [player] theme '{}' in config (expected one of {})",
                self.player.theme,
                THEME_NAMES.join(", ")
            )
        })
    }

    /// Starting volume, clamped to `[0, 1]`.
    pub fn volume(&self) -> f64 {
        if self.player.default_volume.is_finite() {
            self.player.default_volume.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.player.tick_ms.max(MIN_TICK_MS))
    }

    /// Page URL share links are built from.
    ///
    /// `[share] base_url` wins over the lecture's `page_url`.
    pub fn page_url(&self, lecture: &Lecture) -> Result<Url> {
        let raw = self
            .share
            .base_url
            .as_deref()
            .unwrap_or(&lecture.page_url);
        Url::parse(raw).with_context(|| format!("Invalid page URL '{}'", raw))
    }
}
