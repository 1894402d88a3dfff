//! Theme assembly.
//!
//! Bundles a resolved [`ColorPalette`] with shape and typography tokens,
//! and decides light versus dark from the configured [`ThemeMode`] with
//! OS detection for [`ThemeMode::System`].

pub mod shapes;
pub mod typeface;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ColorPalette, ColorPaletteModel};

pub use shapes::Shapes;
pub use typeface::{FontWeight, TextStyle, Typefaces};

/// How the active palette variant is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the operating system setting.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemeMode {
    /// Resolves this mode to a concrete dark/light answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use huekit::theme::ThemeMode;
    ///
    /// assert!(ThemeMode::Dark.is_dark());
    /// assert!(!ThemeMode::Light.is_dark());
    /// ```
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => false,
                // Fall back to dark for dark mode, unspecified, or errors
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => true,
            },
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{name}")
    }
}

/// A fully resolved theme: one palette variant plus the token sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// The active color palette.
    pub palette: ColorPalette,
    /// Whether the dark variant is active.
    pub dark: bool,
    /// Corner shape tokens.
    pub shapes: Shapes,
    /// Typography tokens.
    pub typefaces: Typefaces,
}

impl Theme {
    /// Resolves a theme from a palette model and a mode.
    #[must_use]
    pub fn resolve(model: &ColorPaletteModel, mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        debug!(%mode, dark, "resolved theme");
        Self {
            palette: *model.palette(dark),
            dark,
            shapes: Shapes::default(),
            typefaces: Typefaces::default(),
        }
    }

    /// The built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::default_light(),
            dark: false,
            shapes: Shapes::default(),
            typefaces: Typefaces::default(),
        }
    }

    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::default_dark(),
            dark: true,
            shapes: Shapes::default(),
            typefaces: Typefaces::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_resolve_without_os() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_system_mode_resolves() {
        // Host-dependent answer; detection must return rather than fail.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn test_resolve_picks_variant_from_mode() {
        let model = ColorPaletteModel::default();
        let light = Theme::resolve(&model, ThemeMode::Light);
        let dark = Theme::resolve(&model, ThemeMode::Dark);
        assert!(!light.dark);
        assert!(dark.dark);
        assert_eq!(light.palette, model.light_palette);
        assert_eq!(dark.palette, model.dark_palette);
    }

    #[test]
    fn test_builtin_themes_use_default_palettes() {
        assert_eq!(Theme::light().palette, ColorPalette::default_light());
        assert_eq!(Theme::dark().palette, ColorPalette::default_dark());
    }

    #[test]
    fn test_mode_display_round_trips_serde() {
        for mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
            let back: ThemeMode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
        }
    }
}
