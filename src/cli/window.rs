//! Window classification command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::models::{ScreenOrientation, WindowFormFactor, WindowSize, WindowState};

/// Classify a window size into breakpoint classes and form factor
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// Window width in dp
    #[arg(long, value_name = "DP")]
    pub width: f32,

    /// Window height in dp
    #[arg(long, value_name = "DP")]
    pub height: f32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the window command
#[derive(Debug, Clone, Serialize)]
struct WindowResponse {
    /// Window width in dp
    width: f32,
    /// Window height in dp
    height: f32,
    /// Width breakpoint class
    width_class: WindowSize,
    /// Height breakpoint class
    height_class: WindowSize,
    /// Orientation from the width/height ratio
    orientation: ScreenOrientation,
    /// Device form factor estimate
    form_factor: WindowFormFactor,
    /// Responsive horizontal padding in dp
    horizontal_padding: f32,
}

impl WindowArgs {
    /// Execute the window command
    pub fn execute(&self) -> CliResult<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CliError::validation(
                "Window width and height must be positive",
            ));
        }

        let window = WindowState::new(self.width, self.height);
        let response = WindowResponse {
            width: self.width,
            height: self.height,
            width_class: window.available_width_size,
            height_class: window.available_height_size,
            orientation: window.screen_orientation(),
            form_factor: window.form_factor(),
            horizontal_padding: window.horizontal_padding(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Window: {}x{} dp", response.width, response.height);
            println!("Width class: {:?}", response.width_class);
            println!("Height class: {:?}", response.height_class);
            println!("Orientation: {:?}", response.orientation);
            println!("Form factor: {:?}", response.form_factor);
            println!("Horizontal padding: {:.0}", response.horizontal_padding);
        }

        Ok(())
    }
}
