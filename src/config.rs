//! # Configuration Management Module
//!
//! Persistent application settings stored in platform-appropriate locations.
//! Handles loading, saving, and providing defaults for configuration options.
//!
//! ## Settings
//! - `theme`: Last chosen light/dark mode
//! - `start_route`: Path of the screen shown at launch
//! - `splash_delay_ms`: How long the splash screen waits before login
//! - `toast_duration_ms`: How long a toast stays on screen
//!
//! ## Storage Location
//! - macOS: ~/Library/Application Support/safelink/config.toml
//! - Linux: ~/.config/safelink/config.toml
//! - Windows: %APPDATA%\safelink\config.toml
//!
//! Only settings live here. Contacts, devices and history are never written.

use crate::error::ConfigError;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub start_route: String,
    pub splash_delay_ms: u64,
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            start_route: "/".to_string(),
            splash_delay_ms: 2500,
            toast_duration_ms: 5000,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("safelink")
            .join("config.toml")
    }

    /// Load config from the platform path, or create default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Save config to the platform path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = toml::from_str(&contents).map_err(ConfigError::ParseFailed)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File doesn't exist, create default
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::ReadFailed(e)),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;
        fs::write(path, toml_string).map_err(ConfigError::WriteFailed)?;

        Ok(())
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Where settings changes are written back
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ConfigStore {
    /// The platform config file (`Config::save`)
    Platform,
    /// An explicit file
    File(PathBuf),
    /// Keep changes in memory only
    Memory,
}

impl ConfigStore {
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        match self {
            ConfigStore::Platform => config.save(),
            ConfigStore::File(path) => config.save_to(path),
            ConfigStore::Memory => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.start_route, "/");
        assert_eq!(config.splash_delay(), Duration::from_millis(2500));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            theme: ThemeMode::Dark,
            ..Config::default()
        };

        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("theme = \"dark\""));
        assert!(toml_str.contains("splash_delay_ms = 2500"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let toml_str = r#"
            theme = "dark"
        "#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.start_route, "/");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).expect("Failed to load config");
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            theme: ThemeMode::Dark,
            start_route: "/splash".to_string(),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_platform_store_targets_config_path() {
        assert!(Config::config_path().ends_with("safelink/config.toml"));
        assert_ne!(ConfigStore::Platform, ConfigStore::Memory);
    }

    #[test]
    fn test_store_writes_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            theme: ThemeMode::Dark,
            ..Config::default()
        };

        ConfigStore::File(path.clone()).save(&config).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_memory_store_writes_nothing() {
        assert!(ConfigStore::Memory.save(&Config::default()).is_ok());
    }
}
