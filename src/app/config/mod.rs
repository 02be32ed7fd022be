// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toast]` - Toast lifecycle durations, stack placement, tick intervals
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `TOAST_SHOWCASE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_showcase::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let timings = config.toast.timings();
//! assert!(timings.total() > std::time::Duration::ZERO);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::Timings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Enter animation duration in milliseconds.
    #[serde(default = "default_enter_ms", skip_serializing_if = "Option::is_none")]
    pub enter_ms: Option<u64>,

    /// Hold duration in milliseconds.
    #[serde(default = "default_hold_ms", skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    /// Exit animation duration in milliseconds.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,

    /// Distance of the toast stack from the top of the window, in pixels.
    #[serde(default = "default_top_inset", skip_serializing_if = "Option::is_none")]
    pub top_inset: Option<f32>,

    /// Animation tick interval while toasts are visible.
    #[serde(
        default = "default_frame_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_interval_ms: Option<u64>,

    /// Bridge polling interval while no toast is visible.
    #[serde(default = "default_idle_poll_ms", skip_serializing_if = "Option::is_none")]
    pub idle_poll_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_ms: default_enter_ms(),
            hold_ms: default_hold_ms(),
            exit_ms: default_exit_ms(),
            top_inset: default_top_inset(),
            frame_interval_ms: default_frame_interval_ms(),
            idle_poll_ms: default_idle_poll_ms(),
        }
    }
}

impl ToastConfig {
    /// Lifecycle phase durations, clamped to the supported ranges.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let enter = self.enter_ms.unwrap_or(DEFAULT_ENTER_MS).min(MAX_TRANSITION_MS);
        let hold = self.hold_ms.unwrap_or(DEFAULT_HOLD_MS).min(MAX_HOLD_MS);
        let exit = self.exit_ms.unwrap_or(DEFAULT_EXIT_MS).min(MAX_TRANSITION_MS);

        Timings {
            enter: Duration::from_millis(enter),
            hold: Duration::from_millis(hold),
            exit: Duration::from_millis(exit),
        }
    }

    /// Top inset of the toast stack, clamped to `0..=MAX_TOP_INSET`.
    #[must_use]
    pub fn top_inset(&self) -> f32 {
        let inset = self.top_inset.unwrap_or(DEFAULT_TOP_INSET);
        if inset.is_finite() {
            inset.clamp(0.0, MAX_TOP_INSET)
        } else {
            DEFAULT_TOP_INSET
        }
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        let ms = self
            .frame_interval_ms
            .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
            .clamp(MIN_FRAME_INTERVAL_MS, MAX_FRAME_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn idle_poll_interval(&self) -> Duration {
        let ms = self
            .idle_poll_ms
            .unwrap_or(DEFAULT_IDLE_POLL_MS)
            .clamp(MIN_IDLE_POLL_MS, MAX_IDLE_POLL_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_enter_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_MS)
}

fn default_hold_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

fn default_top_inset() -> Option<f32> {
    Some(DEFAULT_TOP_INSET)
}

fn default_frame_interval_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_INTERVAL_MS)
}

fn default_idle_poll_ms() -> Option<u64> {
    Some(DEFAULT_IDLE_POLL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be loaded: {err}")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
