//! Layout inspection command.
//!
//! Runs one layout pass for a given window size and slot set and prints
//! the placed rectangles with the resulting safe padding. Slot sizes are
//! given as `WIDTHxHEIGHT` strings.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::layout::{
    EdgeInsets, FoundationLayout, LayoutDirection, Size, SlotKind, Slots, WindowInsets,
};
use crate::models::WindowState;

/// Compute slot placements for a window size
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Window width in dp
    #[arg(long, value_name = "DP")]
    pub width: f32,

    /// Window height in dp
    #[arg(long, value_name = "DP")]
    pub height: f32,

    /// Top bar size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub top_bar: Option<String>,

    /// Bottom bar size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub bottom_bar: Option<String>,

    /// Side rail size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub side_rail: Option<String>,

    /// Snackbar size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub snackbar: Option<String>,

    /// Window insets as LEFT,TOP,RIGHT,BOTTOM
    #[arg(long, value_name = "L,T,R,B")]
    pub insets: Option<String>,

    /// Lay out right-to-left
    #[arg(long)]
    pub rtl: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the layout command
#[derive(Debug, Clone, Serialize)]
struct LayoutResponse {
    /// Window width in dp
    width: f32,
    /// Window height in dp
    height: f32,
    /// Resolved horizontal padding in dp
    horizontal_padding: f32,
    /// Placed slots in painting order
    placements: Vec<PlacementEntry>,
    /// Safe padding for the main content
    safe_padding: EdgeInsets,
}

/// One placed slot in the JSON output
#[derive(Debug, Clone, Serialize)]
struct PlacementEntry {
    /// Slot name
    slot: SlotKind,
    /// Offset from the viewport origin
    x: i32,
    /// Offset from the viewport origin
    y: i32,
    /// Placed width
    width: u32,
    /// Placed height
    height: u32,
}

/// Parses a `WIDTHxHEIGHT` argument.
fn parse_size(value: &str) -> CliResult<Size> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| CliError::validation(format!("Expected WIDTHxHEIGHT, got '{value}'")))?;
    let width = w
        .trim()
        .parse()
        .map_err(|_| CliError::validation(format!("Invalid width in '{value}'")))?;
    let height = h
        .trim()
        .parse()
        .map_err(|_| CliError::validation(format!("Invalid height in '{value}'")))?;
    Ok(Size::new(width, height))
}

/// Parses a `LEFT,TOP,RIGHT,BOTTOM` inset argument.
fn parse_insets(value: &str) -> CliResult<WindowInsets> {
    let parts: Vec<u32> = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse()
                .map_err(|_| CliError::validation(format!("Invalid inset in '{value}'")))
        })
        .collect::<CliResult<_>>()?;
    if parts.len() != 4 {
        return Err(CliError::validation(format!(
            "Expected four inset values, got {}",
            parts.len()
        )));
    }
    Ok(WindowInsets::new(parts[0], parts[1], parts[2], parts[3]))
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CliError::validation(
                "Window width and height must be positive",
            ));
        }

        let top_bar = self.top_bar.as_deref().map(parse_size).transpose()?;
        let bottom_bar = self.bottom_bar.as_deref().map(parse_size).transpose()?;
        let side_rail = self.side_rail.as_deref().map(parse_size).transpose()?;
        let snackbar = self.snackbar.as_deref().map(parse_size).transpose()?;
        let insets = self
            .insets
            .as_deref()
            .map(parse_insets)
            .transpose()?
            .unwrap_or_default();

        let window = WindowState::new(self.width, self.height);
        let direction = if self.rtl {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        };

        let mut slots = Slots::new();
        if let Some(size) = &top_bar {
            slots = slots.with_top_bar(size);
        }
        if let Some(size) = &bottom_bar {
            slots = slots.with_bottom_bar(size);
        }
        if let Some(size) = &side_rail {
            slots = slots.with_side_rail(size);
        }
        if let Some(size) = &snackbar {
            slots = slots.with_snackbar(size);
        }

        let result = FoundationLayout::layout(&window, direction, &slots, insets);

        let placements: Vec<PlacementEntry> = result
            .placements
            .iter()
            .map(|p| PlacementEntry {
                slot: p.kind,
                x: p.rect.offset.x,
                y: p.rect.offset.y,
                width: p.rect.size.width,
                height: p.rect.size.height,
            })
            .collect();

        if self.json {
            let response = LayoutResponse {
                width: self.width,
                height: self.height,
                horizontal_padding: window.horizontal_padding(),
                placements,
                safe_padding: result.safe_padding,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "Window: {}x{} dp ({:?} width, {:?} height)",
                self.width,
                self.height,
                window.available_width_size,
                window.available_height_size
            );
            println!("Horizontal padding: {:.0}", window.horizontal_padding());
            println!("\nPlacements (back to front):");
            println!("  Slot        |     X |     Y | Width | Height");
            println!("  ------------|-------|-------|-------|-------");
            for entry in &placements {
                println!(
                    "  {:11} | {:5} | {:5} | {:5} | {:5}",
                    format!("{:?}", entry.slot),
                    entry.x,
                    entry.y,
                    entry.width,
                    entry.height
                );
            }
            let padding = result.safe_padding;
            println!(
                "\nSafe padding: start={} top={} end={} bottom={}",
                padding.start, padding.top, padding.end, padding.bottom
            );
        }

        Ok(())
    }
}
