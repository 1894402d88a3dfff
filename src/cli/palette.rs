//! Palette generation command.
//!
//! Derives the full light/dark palette pair from a base hue and prints it
//! as a role table or JSON. Defaults not given on the command line come
//! from the config file.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::color::{generate_palette_model, HueOffsetDirection};
use crate::config::Config;
use crate::models::{Color, ColorPalette, PaletteRole};

/// Generate a color palette from a base hue
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base hue in degrees (defaults to the configured hue)
    #[arg(long, value_name = "DEGREES")]
    pub hue: Option<u16>,

    /// Degrees between base and accent hue (defaults to the configured offset)
    #[arg(long, value_name = "DEGREES")]
    pub accent_offset: Option<u16>,

    /// Accent offset direction: "down" or "up"
    #[arg(long, value_name = "DIRECTION")]
    pub direction: Option<String>,

    /// Print only the dark variant
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Print only the light variant
    #[arg(long)]
    pub light: bool,

    /// Include the raw tone ramps in the output
    #[arg(long)]
    pub tones: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the palette command
#[derive(Debug, Clone, Serialize)]
struct PaletteResponse {
    /// Base hue in degrees
    base_hue: u16,
    /// Accent hue in degrees
    accent_hue: u16,
    /// Light variant, role name to hex
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<Vec<RoleEntry>>,
    /// Dark variant, role name to hex
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<Vec<RoleEntry>>,
    /// Tone ramps, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    tones: Option<ToneRamps>,
}

/// One palette slot in the JSON output
#[derive(Debug, Clone, Serialize)]
struct RoleEntry {
    /// Role name
    role: String,
    /// Hex color
    hex: String,
}

/// The four tone ramps behind a palette
#[derive(Debug, Clone, Serialize)]
struct ToneRamps {
    base: Vec<String>,
    accent: Vec<String>,
    surface: Vec<String>,
    error: Vec<String>,
}

fn role_entries(palette: &ColorPalette) -> Vec<RoleEntry> {
    PaletteRole::ALL
        .iter()
        .map(|&role| RoleEntry {
            role: format!("{role:?}"),
            hex: palette.color(role).to_hex(),
        })
        .collect()
}

fn hex_ramp(tones: &[Color]) -> Vec<String> {
    tones.iter().map(Color::to_hex).collect()
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let base_hue = self.hue.unwrap_or(config.palette.base_hue);
        let offset = self.accent_offset.unwrap_or(config.palette.accent_hue_offset);
        let direction = match self.direction.as_deref() {
            None => config.palette.offset_direction,
            Some("down") => HueOffsetDirection::Down,
            Some("up") => HueOffsetDirection::Up,
            Some(other) => {
                return Err(CliError::validation(format!(
                    "Invalid direction '{other}', expected 'down' or 'up'"
                )))
            }
        };

        let model = generate_palette_model(base_hue, offset, direction);

        let want_light = !self.dark;
        let want_dark = !self.light;

        if self.json {
            let response = PaletteResponse {
                base_hue: model.base_tones_hue,
                accent_hue: model.accent_tones_hue,
                light: want_light.then(|| role_entries(&model.light_palette)),
                dark: want_dark.then(|| role_entries(&model.dark_palette)),
                tones: self.tones.then(|| ToneRamps {
                    base: hex_ramp(&model.base_tones),
                    accent: hex_ramp(&model.accent_tones),
                    surface: hex_ramp(&model.surface_tones),
                    error: hex_ramp(&model.error_tones),
                }),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Base hue: {}", model.base_tones_hue);
            println!("Accent hue: {}", model.accent_tones_hue);
            if want_light {
                println!("\nLight palette:");
                for entry in role_entries(&model.light_palette) {
                    println!("  {:16} {}", entry.role, entry.hex);
                }
            }
            if want_dark {
                println!("\nDark palette:");
                for entry in role_entries(&model.dark_palette) {
                    println!("  {:16} {}", entry.role, entry.hex);
                }
            }
            if self.tones {
                for (name, ramp) in [
                    ("Base", &model.base_tones),
                    ("Accent", &model.accent_tones),
                    ("Surface", &model.surface_tones),
                    ("Error", &model.error_tones),
                ] {
                    println!("\n{name} tones ({}):", ramp.len());
                    println!("  {}", hex_ramp(ramp).join(" "));
                }
            }
        }

        Ok(())
    }
}
