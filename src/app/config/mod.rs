// SPDX-License-Identifier: MPL-2.0
//! This module handles the island's configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[service]` - Whether the island is enabled
//! - `[display]` - Dwell time and auto-expand
//! - `[filter]` - Packages the user never wants to see
//! - `[feedback]` - Vibration
//!
//! The running daemon picks up edits made by the command line or by hand
//! through [`SettingsWatcher`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_ISLAND_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_island::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.service.enabled = Some(true);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
mod watch;

pub use defaults::*;
pub use watch::SettingsWatcher;

use crate::app::paths;
use crate::domain::settings::{DisplayDuration, Settings};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Service switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    #[serde(default = "default_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// Island display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Reserved; kept so the choice survives upgrades.
    #[serde(default = "default_auto_expand", skip_serializing_if = "Option::is_none")]
    pub auto_expand: Option<bool>,

    /// Auto-hide dwell in milliseconds, clamped to the supported range on use.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            auto_expand: default_auto_expand(),
            duration_ms: default_duration_ms(),
        }
    }
}

/// Per-package exclusions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    #[serde(default)]
    pub excluded_packages: BTreeSet<String>,
}

/// Haptic feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// Reserved; desktops have no vibration motor to drive.
    #[serde(default = "default_vibration", skip_serializing_if = "Option::is_none")]
    pub vibration: Option<bool>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            vibration: default_vibration(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl Config {
    /// Resolves optional fields into the settings the island runs with.
    #[must_use]
    pub fn to_settings(&self) -> Settings {
        Settings {
            service_enabled: self.service.enabled.unwrap_or(DEFAULT_SERVICE_ENABLED),
            auto_expand: self.display.auto_expand.unwrap_or(DEFAULT_AUTO_EXPAND),
            display_duration: DisplayDuration::from_millis(
                self.display
                    .duration_ms
                    .unwrap_or(DEFAULT_DISPLAY_DURATION_MS),
            ),
            excluded_packages: self.filter.excluded_packages.clone(),
            vibration_enabled: self.feedback.vibration.unwrap_or(DEFAULT_VIBRATION),
        }
    }

    /// Adds a package to the user exclusions. Returns false if it was already there.
    pub fn exclude(&mut self, package: &str) -> bool {
        self.filter.excluded_packages.insert(package.trim().to_string())
    }

    /// Removes a package from the user exclusions. Returns false if it was not there.
    pub fn include(&mut self, package: &str) -> bool {
        self.filter.excluded_packages.remove(package.trim())
    }
}

fn default_enabled() -> Option<bool> {
    Some(DEFAULT_SERVICE_ENABLED)
}

fn default_auto_expand() -> Option<bool> {
    Some(DEFAULT_AUTO_EXPAND)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DISPLAY_DURATION_MS)
}

fn default_vibration() -> Option<bool> {
    Some(DEFAULT_VIBRATION)
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

/// Returns the config file path, if a config directory can be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
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
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}, using defaults: {err}",
                            path.display()
                        )),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
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
