// SPDX-License-Identifier: MPL-2.0
//! Application configuration read from a `settings.toml` file.
//!
//! Only a `[general]` section exists: UI language and theme mode. The
//! config directory resolves in order:
//! 1. The `ART_SPACE_CONFIG_DIR` environment variable (tests, portable
//!    installs)
//! 2. The platform config directory, under an `ArtSpace` folder
//!
//! Loading is lenient: a missing file yields the defaults, and a file that
//! exists but does not parse yields the defaults plus a warning message for
//! the caller to surface.

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_ENV: &str = "ART_SPACE_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = "ArtSpace";
const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Resolves the directory holding `settings.toml`.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|base| base.join(CONFIG_DIR_NAME))
}

/// Loads the configuration from the resolved config directory.
pub fn load() -> (Config, Option<String>) {
    match config_dir() {
        Some(dir) => load_from_dir(&dir),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit directory.
pub fn load_from_dir(dir: &Path) -> (Config, Option<String>) {
    let path = dir.join(CONFIG_FILE);
    let Ok(contents) = fs::read_to_string(&path) else {
        // Missing or unreadable file is not an error; first run has none.
        return (Config::default(), None);
    };

    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(format!("ignoring malformed {}: {e}", path.display())),
        ),
    }
}

/// Saves the configuration to the resolved config directory, creating it if
/// needed.
pub fn save(config: &Config) -> Result<()> {
    let dir = config_dir().ok_or_else(|| Error::Config("no config directory available".into()))?;
    save_to_dir(config, &dir)
}

/// Saves the configuration to an explicit directory.
pub fn save_to_dir(config: &Config, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let contents = toml::to_string_pretty(config)?;
    fs::write(dir.join(CONFIG_FILE), contents)?;
    Ok(())
}
