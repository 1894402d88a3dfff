//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::color::HueOffsetDirection;
use crate::theme::ThemeMode;

/// Palette generation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Base hue in degrees, 0..360
    pub base_hue: u16,
    /// Degrees between base hue and accent hue
    #[serde(default = "default_accent_offset")]
    pub accent_hue_offset: u16,
    /// Which way around the hue circle the accent offset is applied
    #[serde(default)]
    pub offset_direction: HueOffsetDirection,
}

/// Default accent offset in degrees
fn default_accent_offset() -> u16 {
    crate::color::ACCENT_HUE_OFFSET
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base_hue: 210,
            accent_hue_offset: default_accent_offset(),
            offset_direction: HueOffsetDirection::default(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (System, Light, Dark)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/huekit/config.toml`
/// - macOS: `~/Library/Application Support/huekit/config.toml`
/// - Windows: `%APPDATA%\huekit\config.toml`
///
/// # Validation
///
/// - `base_hue` must be below 360
/// - `accent_hue_offset` must be below 360
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette generation settings
    #[serde(default)]
    pub palette: PaletteConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/huekit/`
    /// - macOS: `~/Library/Application Support/huekit/`
    /// - Windows: `%APPDATA%\huekit\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(crate::constants::APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Hues are stored normalized; a value of 360 or more means the file
    /// was edited by hand and should be corrected rather than silently
    /// wrapped.
    pub fn validate(&self) -> Result<()> {
        if self.palette.base_hue >= 360 {
            anyhow::bail!(
                "base_hue must be below 360 degrees, got {}",
                self.palette.base_hue
            );
        }

        if self.palette.accent_hue_offset >= 360 {
            anyhow::bail!(
                "accent_hue_offset must be below 360 degrees, got {}",
                self.palette.accent_hue_offset
            );
        }

        Ok(())
    }

    /// Sets the base hue with validation.
    pub fn set_base_hue(&mut self, hue: u16) -> Result<()> {
        self.palette.base_hue = hue;
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.base_hue, 210);
        assert_eq!(
            config.palette.accent_hue_offset,
            crate::color::ACCENT_HUE_OFFSET
        );
        assert_eq!(config.ui.theme_mode, ThemeMode::System);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_out_of_range_hue() {
        let mut config = Config::new();
        config.palette.base_hue = 360;
        assert!(config.validate().is_err());

        config.palette.base_hue = 359;
        assert!(config.validate().is_ok());

        config.palette.accent_hue_offset = 400;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_set_base_hue() {
        let mut config = Config::new();
        assert!(config.set_base_hue(140).is_ok());
        assert_eq!(config.palette.base_hue, 140);

        assert!(config.set_base_hue(720).is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.palette.base_hue = 300;
        config.ui.theme_mode = ThemeMode::Dark;

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        // Load and verify
        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded.palette.base_hue, 300);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_config_missing_sections_use_defaults() {
        let loaded: Config = toml::from_str("").unwrap();
        assert_eq!(loaded, Config::new());

        let loaded: Config = toml::from_str("[palette]\nbase_hue = 45\n").unwrap();
        assert_eq!(loaded.palette.base_hue, 45);
        assert_eq!(
            loaded.palette.accent_hue_offset,
            crate::color::ACCENT_HUE_OFFSET
        );
    }
}
