// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitae::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.reduced_motion = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedVitae";

pub const DEFAULT_GALLERY_INTERVAL_SECS: u64 = 4;
pub const MIN_GALLERY_INTERVAL_SECS: u64 = 2;
pub const MAX_GALLERY_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    #[serde(default)]
    pub gallery_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: Some(ThemeMode::System),
            reduced_motion: Some(false),
            gallery_interval_secs: Some(DEFAULT_GALLERY_INTERVAL_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            theme_mode: Some(ThemeMode::Dark),
            reduced_motion: Some(true),
            gallery_interval_secs: Some(7),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme_mode, config.theme_mode);
        assert_eq!(loaded.reduced_motion, config.reduced_motion);
        assert_eq!(loaded.gallery_interval_secs, config.gallery_interval_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.theme_mode.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_motion_with_system_theme() {
        let config = Config::default();
        assert_eq!(config.theme_mode, Some(ThemeMode::System));
        assert_eq!(config.reduced_motion, Some(false));
        assert_eq!(
            config.gallery_interval_secs,
            Some(DEFAULT_GALLERY_INTERVAL_SECS)
        );
    }
}
