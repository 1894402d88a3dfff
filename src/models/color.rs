//! RGBA color handling with hex parsing and serialization.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color value with hex string representation.
///
/// Represents a display color using red, green, blue and alpha channels
/// (0-255 each). Supports parsing from hex strings (#RRGGBB, #RRGGBBAA)
/// and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a fully opaque `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a `Color` with an explicit alpha channel.
    #[must_use]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `Color` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RRGGBBAA", "RRGGBBAA",
    /// upper- or lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use huekit::models::Color;
    ///
    /// let color = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, Color::new(255, 0, 0));
    ///
    /// let color = Color::from_hex("00FF0080").unwrap();
    /// assert_eq!(color, Color::with_alpha(0, 255, 0, 128));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 && hex.len() != 8 {
            anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 (RRGGBB) or 8 (RRGGBBAA) hex digits"
            );
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16)
                .context(format!("Invalid alpha channel in hex color '{hex}'"))?
        } else {
            255
        };

        Ok(Self { r, g, b, a })
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// The alpha channel is appended as "#RRGGBBAA" only when the color is
    /// not fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use huekit::models::Color;
    ///
    /// assert_eq!(Color::new(255, 0, 0).to_hex(), "#FF0000");
    /// assert_eq!(Color::with_alpha(0, 128, 255, 64).to_hex(), "#0080FF40");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns true if the color is fully opaque.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    ///
    /// Alpha is dropped; terminal cells have no transparency.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Returns the channels as normalized floats in [0, 1].
    #[must_use]
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Creates a `Color` from normalized float channels, clamping to [0, 1].
    #[must_use]
    pub fn from_f32_array(rgba: [f32; 4]) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(rgba[0]),
            g: channel(rgba[1]),
            b: channel(rgba[2]),
            a: channel(rgba[3]),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default color is opaque white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
