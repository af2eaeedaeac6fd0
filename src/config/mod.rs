// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toasts]` - Toast display and fade durations
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `TOAST_SHELL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_shell::config;
//!
//! // Load existing configuration (returns tuple with optional load error)
//! let (mut config, _error) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::Toast;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Timing of toasts created by the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Total visible duration, fade included (milliseconds).
    #[serde(
        default = "default_display_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_duration_ms: Option<u32>,

    /// Fade-out duration (milliseconds).
    #[serde(
        default = "default_fade_out_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_out_duration_ms: Option<u32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_duration_ms: default_display_duration_ms(),
            fade_out_duration_ms: default_fade_out_duration_ms(),
        }
    }
}

impl ToastConfig {
    /// Display duration clamped to the supported range.
    #[must_use]
    pub fn display_duration(&self) -> u32 {
        self.display_duration_ms
            .unwrap_or(DEFAULT_DISPLAY_DURATION_MS)
            .clamp(MIN_DISPLAY_DURATION_MS, MAX_DISPLAY_DURATION_MS)
    }

    /// Fade duration clamped to the supported range and never longer than
    /// the display duration.
    #[must_use]
    pub fn fade_out_duration(&self) -> u32 {
        self.fade_out_duration_ms
            .unwrap_or(DEFAULT_FADE_DURATION_MS)
            .min(MAX_FADE_DURATION_MS)
            .min(self.display_duration())
    }

    /// A fresh toast carrying these durations.
    #[must_use]
    pub fn toast(&self) -> Toast {
        Toast::init()
            .set_display_duration(self.display_duration())
            .set_fade_out_duration(self.fade_out_duration())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast timing settings.
    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_display_duration_ms() -> Option<u32> {
    Some(DEFAULT_DISPLAY_DURATION_MS)
}

fn default_fade_out_duration_ms() -> Option<u32> {
    Some(DEFAULT_FADE_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the default one when
/// `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_error). A missing file is not an
/// error. If reading or parsing fails, returns the default config together
/// with the error so the caller can report it.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(err));
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

/// Saves the configuration to a custom directory, or the default one when
/// `base_dir` is `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
