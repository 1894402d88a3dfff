//! Configuration command.
//!
//! Shows the current configuration and lets scripts update individual
//! values without editing the TOML file by hand.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::color::HueOffsetDirection;
use crate::config::Config;
use crate::theme::ThemeMode;

/// Show or update the stored configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Set the base hue in degrees
    #[arg(long, value_name = "DEGREES")]
    pub set_hue: Option<u16>,

    /// Set the accent hue offset in degrees
    #[arg(long, value_name = "DEGREES")]
    pub set_accent_offset: Option<u16>,

    /// Set the accent offset direction: "down" or "up"
    #[arg(long, value_name = "DIRECTION")]
    pub set_direction: Option<String>,

    /// Set the theme mode: "system", "light", or "dark"
    #[arg(long, value_name = "MODE")]
    pub set_mode: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the config command
#[derive(Debug, Clone, Serialize)]
struct ConfigResponse {
    /// Path to the config file
    path: String,
    /// Whether the file exists on disk
    exists: bool,
    /// The effective configuration
    config: Config,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let mut changed = false;

        if let Some(hue) = self.set_hue {
            config
                .set_base_hue(hue)
                .map_err(|e| CliError::validation(e.to_string()))?;
            changed = true;
        }

        if let Some(offset) = self.set_accent_offset {
            config.palette.accent_hue_offset = offset;
            config
                .validate()
                .map_err(|e| CliError::validation(e.to_string()))?;
            changed = true;
        }

        if let Some(direction) = self.set_direction.as_deref() {
            config.palette.offset_direction = match direction {
                "down" => HueOffsetDirection::Down,
                "up" => HueOffsetDirection::Up,
                other => {
                    return Err(CliError::validation(format!(
                        "Invalid direction '{other}', expected 'down' or 'up'"
                    )))
                }
            };
            changed = true;
        }

        if let Some(mode) = self.set_mode.as_deref() {
            config.ui.theme_mode = match mode {
                "system" => ThemeMode::System,
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                other => {
                    return Err(CliError::validation(format!(
                        "Invalid theme mode '{other}', expected 'system', 'light', or 'dark'"
                    )))
                }
            };
            changed = true;
        }

        if changed {
            config
                .save()
                .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;
        }

        let path = Config::config_file_path()
            .map_err(|e| CliError::io(e.to_string()))?
            .display()
            .to_string();

        if self.json {
            let response = ConfigResponse {
                path,
                exists: Config::exists(),
                config,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Config file: {path}");
            println!("Base hue: {}", config.palette.base_hue);
            println!("Accent offset: {}", config.palette.accent_hue_offset);
            println!("Offset direction: {:?}", config.palette.offset_direction);
            println!("Theme mode: {}", config.ui.theme_mode);
            if changed {
                println!("\nConfiguration saved.");
            }
        }

        Ok(())
    }
}
