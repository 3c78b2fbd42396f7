// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[zoom]` - Magnification and timing of the zoom widget
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (the demo's `--config-dir`)
//! 3. Set `ICED_ZOOM_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_zoom::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.zoom.percent = Some(300.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedZoom";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_ZOOM_CONFIG_DIR";

/// Warning key reported when an existing config file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Zoom widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Magnification percentage applied while zoomed in.
    #[serde(default = "default_zoom_percent", skip_serializing_if = "Option::is_none")]
    pub percent: Option<f32>,

    /// Pause between decode success and display (milliseconds).
    #[serde(default = "default_settle_delay_ms", skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    /// Image fade-in duration (milliseconds).
    #[serde(default = "default_fade_in_ms", skip_serializing_if = "Option::is_none")]
    pub fade_in_ms: Option<u64>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            percent: default_zoom_percent(),
            settle_delay_ms: default_settle_delay_ms(),
            fade_in_ms: default_fade_in_ms(),
        }
    }
}

impl ZoomConfig {
    /// Settle delay, clamped to the supported range.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        let ms = self
            .settle_delay_ms
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS)
            .min(MAX_SETTLE_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Fade-in duration, clamped to the supported range.
    #[must_use]
    pub fn fade_in(&self) -> Duration {
        let ms = self
            .fade_in_ms
            .unwrap_or(DEFAULT_FADE_IN_MS)
            .min(MAX_FADE_IN_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Zoom widget settings.
    #[serde(default)]
    pub zoom: ZoomConfig,
}

fn default_zoom_percent() -> Option<f32> {
    Some(DEFAULT_ZOOM_PERCENT)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_fade_in_ms() -> Option<u64> {
    Some(DEFAULT_FADE_IN_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honouring the explicit override first,
/// then the environment variable, then the platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
