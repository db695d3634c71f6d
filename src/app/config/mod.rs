// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preferred language and theme mode
//! - `[site]` - Base URL and outbound links used by the rendered page
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_LANDING_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The base URL can additionally be overridden with `ICED_LANDING_BASE_URL`.
//!
//! # Examples
//!
//! ```no_run
//! use iced_landing::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("hy".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::Locale;
use crate::error::{Error, Result};
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
    /// Preferred locale code (`en`, `hy`, `ru`) for the root redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode chosen by the user. Absent means "follow the system".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

/// Settings of the rendered site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Origin used to build canonical and Open Graph URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Target of the "get started" button.
    #[serde(default = "default_docs_url")]
    pub docs_url: String,

    /// Target of the "view on GitHub" button.
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            docs_url: default_docs_url(),
            repository_url: default_repository_url(),
        }
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
    pub site: SiteConfig,
}

impl Config {
    /// Base URL without trailing slash, honoring `ICED_LANDING_BASE_URL`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let raw = match std::env::var(ENV_BASE_URL) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.site.base_url.clone(),
        };
        raw.trim().trim_end_matches('/').to_string()
    }

    /// Preferred locale from `general.language`, if it names a supported one.
    #[must_use]
    pub fn preferred_locale(&self) -> Option<Locale> {
        let language = self.general.language.as_deref()?;
        match Locale::resolve(language) {
            Ok(locale) => Some(locale),
            Err(rejected) => {
                tracing::warn!(%rejected, "ignoring configured language");
                None
            }
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_docs_url() -> String {
    GET_STARTED_URL.to_string()
}

fn default_repository_url() -> String {
    GITHUB_URL.to_string()
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
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "config loaded");
                    return (config, None);
                }
                Err(err) => {
                    let warning = format!("{}: {}", path.display(), err);
                    tracing::warn!(%warning, "falling back to default config");
                    return (Config::default(), Some(warning));
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
