// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[motion]` - Reduced-motion override, low-power threshold, probe interval
//! - `[sections]` - Lazy section visibility threshold, placeholder, fragment scope
//! - `[chat]` - Chat widget toggle and reply delay
//! - `[profile]` - Optional portrait override
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::VisibilityThreshold;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Where the reduced-motion preference comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReducedMotion {
    /// Follow the desktop accessibility setting.
    #[default]
    System,
    /// Always use minimal motion.
    Always,
    /// Never request minimal motion from the desktop side (low power still applies).
    Never,
}

/// Which lazy sections react to a navigation fragment change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentScope {
    /// Every dormant section is built on any fragment change.
    #[default]
    Any,
    /// Only the section named by the fragment is built.
    Matching,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Motion preference settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Reduced-motion source.
    #[serde(default)]
    pub reduced_motion: ReducedMotion,

    /// Battery fraction under which a discharging device counts as low power.
    #[serde(
        default = "default_low_power_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub low_power_threshold: Option<f32>,

    /// Seconds between host probes for preference and battery changes.
    #[serde(
        default = "default_poll_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub poll_interval_secs: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: ReducedMotion::default(),
            low_power_threshold: default_low_power_threshold(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Lazy section settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionsConfig {
    /// Visible fraction needed to build a section.
    #[serde(
        default = "default_visibility_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f32>,

    /// Height of a section that has not been built yet (pixels).
    #[serde(
        default = "default_placeholder_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder_height: Option<f32>,

    /// Which sections a fragment change builds.
    #[serde(default)]
    pub fragment_scope: FragmentScope,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            placeholder_height: default_placeholder_height(),
            fragment_scope: FragmentScope::default(),
        }
    }
}

/// Chat widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Whether the floating chat button is shown.
    #[serde(default = "default_chat_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Delay before the assistant answers (milliseconds).
    #[serde(
        default = "default_chat_reply_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_delay_ms: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: default_chat_enabled(),
            reply_delay_ms: default_chat_reply_delay_ms(),
        }
    }
}

/// Profile overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    /// Portrait image shown in the hero section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<PathBuf>,
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

    /// Motion preference settings.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Lazy section settings.
    #[serde(default)]
    pub sections: SectionsConfig,

    /// Chat widget settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Profile overrides.
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl Config {
    /// Low-power threshold, clamped to a valid battery fraction.
    #[must_use]
    pub fn low_power_threshold(&self) -> f32 {
        self.motion
            .low_power_threshold
            .unwrap_or(DEFAULT_LOW_POWER_THRESHOLD)
            .clamp(MIN_LOW_POWER_THRESHOLD, MAX_LOW_POWER_THRESHOLD)
    }

    /// Host probe interval in seconds, clamped to the supported range.
    #[must_use]
    pub fn poll_interval_secs(&self) -> u64 {
        self.motion
            .poll_interval_secs
            .unwrap_or(DEFAULT_MOTION_POLL_SECS)
            .clamp(MIN_MOTION_POLL_SECS, MAX_MOTION_POLL_SECS)
    }

    /// Visible fraction that triggers a lazy section.
    #[must_use]
    pub fn visibility_threshold(&self) -> VisibilityThreshold {
        self.sections
            .visibility_threshold
            .map_or_else(VisibilityThreshold::default, VisibilityThreshold::new)
    }

    /// Placeholder height in pixels, clamped to the supported range.
    #[must_use]
    pub fn placeholder_height(&self) -> f32 {
        self.sections
            .placeholder_height
            .unwrap_or(DEFAULT_PLACEHOLDER_HEIGHT)
            .clamp(MIN_PLACEHOLDER_HEIGHT, MAX_PLACEHOLDER_HEIGHT)
    }

    /// Chat reply delay in milliseconds, clamped to the supported range.
    #[must_use]
    pub fn chat_reply_delay_ms(&self) -> u64 {
        self.chat
            .reply_delay_ms
            .unwrap_or(DEFAULT_CHAT_REPLY_DELAY_MS)
            .clamp(MIN_CHAT_REPLY_DELAY_MS, MAX_CHAT_REPLY_DELAY_MS)
    }
}

// =============================================================================
// Serde Default Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_low_power_threshold() -> Option<f32> {
    Some(DEFAULT_LOW_POWER_THRESHOLD)
}

fn default_poll_interval_secs() -> Option<u64> {
    Some(DEFAULT_MOTION_POLL_SECS)
}

fn default_visibility_threshold() -> Option<f32> {
    Some(DEFAULT_VISIBILITY_THRESHOLD)
}

fn default_placeholder_height() -> Option<f32> {
    Some(DEFAULT_PLACEHOLDER_HEIGHT)
}

fn default_chat_enabled() -> Option<bool> {
    Some(true)
}

fn default_chat_reply_delay_ms() -> Option<u64> {
    Some(DEFAULT_CHAT_REPLY_DELAY_MS)
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
