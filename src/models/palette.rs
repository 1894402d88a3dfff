//! Color palette data structures for the theming system.
//!
//! A [`ColorPalette`] assigns a generated color to each UI role (base,
//! accent, surfaces, error, outline). Palettes always travel in light/dark
//! pairs inside a [`ColorPaletteModel`] together with the raw tone ramps
//! they were extracted from.

use serde::{Deserialize, Serialize};

use super::Color;

/// A role a palette color plays in the UI.
///
/// Every "On" role is guaranteed sufficient contrast against its container
/// role by the generation algorithm's fixed tone indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteRole {
    /// Primary color, typically for backgrounds of major components.
    Base,
    /// Text and icons displayed on [`PaletteRole::Base`].
    OnBase,
    /// Accent color, draws attention to important elements.
    Accent,
    /// Text and icons displayed on [`PaletteRole::Accent`].
    OnAccent,
    /// Low-elevation surface, e.g. container backgrounds.
    SurfaceLow,
    /// Text and icons displayed on [`PaletteRole::SurfaceLow`].
    OnSurfaceLow,
    /// Medium-elevation surface, e.g. cards and list items.
    SurfaceMedium,
    /// Text and icons displayed on [`PaletteRole::SurfaceMedium`].
    OnSurfaceMedium,
    /// High-elevation surface, e.g. bars and buttons.
    SurfaceHigh,
    /// Text and icons displayed on [`PaletteRole::SurfaceHigh`].
    OnSurfaceHigh,
    /// Error and destructive-action color.
    Error,
    /// Text and icons displayed on [`PaletteRole::Error`].
    OnError,
    /// Outlines and borders.
    Outline,
}

impl PaletteRole {
    /// All thirteen roles, in palette declaration order.
    pub const ALL: [Self; 13] = [
        Self::Base,
        Self::OnBase,
        Self::Accent,
        Self::OnAccent,
        Self::SurfaceLow,
        Self::OnSurfaceLow,
        Self::SurfaceMedium,
        Self::OnSurfaceMedium,
        Self::SurfaceHigh,
        Self::OnSurfaceHigh,
        Self::Error,
        Self::OnError,
        Self::Outline,
    ];

    /// Role pairs (container, content) that must contrast with each other.
    pub const CONTRAST_PAIRS: [(Self, Self); 6] = [
        (Self::Base, Self::OnBase),
        (Self::Accent, Self::OnAccent),
        (Self::SurfaceLow, Self::OnSurfaceLow),
        (Self::SurfaceMedium, Self::OnSurfaceMedium),
        (Self::SurfaceHigh, Self::OnSurfaceHigh),
        (Self::Error, Self::OnError),
    ];
}

/// A complete set of role colors for one theme mode.
///
/// Immutable value type; the base and accent hues are retained so a palette
/// can be re-derived or animated toward a new hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Hue (0-359) the base tones were generated from.
    pub base_hue: u16,
    /// Primary color.
    pub base: Color,
    /// Content color on `base`.
    pub on_base: Color,
    /// Hue (0-359) the accent tones were generated from.
    pub accent_hue: u16,
    /// Accent color.
    pub accent: Color,
    /// Content color on `accent`.
    pub on_accent: Color,
    /// Low-elevation surface color.
    pub surface_low: Color,
    /// Content color on `surface_low`.
    pub on_surface_low: Color,
    /// Medium-elevation surface color.
    pub surface_medium: Color,
    /// Content color on `surface_medium`.
    pub on_surface_medium: Color,
    /// High-elevation surface color.
    pub surface_high: Color,
    /// Content color on `surface_high`.
    pub on_surface_high: Color,
    /// Error color.
    pub error: Color,
    /// Content color on `error`.
    pub on_error: Color,
    /// Outline color.
    pub outline: Color,
}

impl ColorPalette {
    /// Returns the palette color for the given role token.
    #[must_use]
    pub const fn color(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Base => self.base,
            PaletteRole::OnBase => self.on_base,
            PaletteRole::Accent => self.accent,
            PaletteRole::OnAccent => self.on_accent,
            PaletteRole::SurfaceLow => self.surface_low,
            PaletteRole::OnSurfaceLow => self.on_surface_low,
            PaletteRole::SurfaceMedium => self.surface_medium,
            PaletteRole::OnSurfaceMedium => self.on_surface_medium,
            PaletteRole::SurfaceHigh => self.surface_high,
            PaletteRole::OnSurfaceHigh => self.on_surface_high,
            PaletteRole::Error => self.error,
            PaletteRole::OnError => self.on_error,
            PaletteRole::Outline => self.outline,
        }
    }

    /// Returns the content color to display on top of the given container
    /// color, or `None` if the color is not a container role of this palette.
    #[must_use]
    pub fn content_color_for(&self, container: Color) -> Option<Color> {
        PaletteRole::CONTRAST_PAIRS
            .iter()
            .find(|(bg, _)| self.color(*bg) == container)
            .map(|(_, fg)| self.color(*fg))
    }

    /// Default light palette (base hue 210, accent hue 140).
    #[must_use]
    pub const fn default_light() -> Self {
        Self {
            base_hue: 210,
            base: Color::new(0x00, 0x4A, 0x8A),
            on_base: Color::new(0xE3, 0xFA, 0xFF),
            accent_hue: 140,
            accent: Color::new(0x00, 0x4F, 0x2D),
            on_accent: Color::new(0xEC, 0xF8, 0xF3),
            surface_low: Color::new(0xDB, 0xE4, 0xE8),
            on_surface_low: Color::new(0x0D, 0x18, 0x1D),
            surface_medium: Color::new(0xE7, 0xED, 0xF0),
            on_surface_medium: Color::new(0x07, 0x0E, 0x13),
            surface_high: Color::new(0xF3, 0xF6, 0xF7),
            on_surface_high: Color::new(0x03, 0x06, 0x09),
            error: Color::new(0x83, 0x00, 0x12),
            on_error: Color::new(0xFF, 0xF2, 0xF1),
            outline: Color::new(0xCF, 0xDB, 0xE1),
        }
    }

    /// Default dark palette (base hue 210, accent hue 140).
    #[must_use]
    pub const fn default_dark() -> Self {
        Self {
            base_hue: 210,
            base: Color::new(0x00, 0xBE, 0xFF),
            on_base: Color::new(0x00, 0x08, 0x17),
            accent_hue: 140,
            accent: Color::new(0x00, 0xBB, 0x8D),
            on_accent: Color::new(0x00, 0x09, 0x03),
            surface_low: Color::new(0x07, 0x0E, 0x13),
            on_surface_low: Color::new(0xDB, 0xE4, 0xE8),
            surface_medium: Color::new(0x0D, 0x18, 0x1D),
            on_surface_medium: Color::new(0xE7, 0xED, 0xF0),
            surface_high: Color::new(0x13, 0x22, 0x29),
            on_surface_high: Color::new(0xF3, 0xF6, 0xF7),
            error: Color::new(0xFF, 0x76, 0x72),
            on_error: Color::new(0x16, 0x00, 0x01),
            outline: Color::new(0x07, 0x0E, 0x13),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::default_light()
    }
}

/// A generated palette pair plus the tone ramps it was extracted from.
///
/// Produced atomically by the generator; never partially updated. Keeping
/// the raw tones around lets callers render ramp previews or pick custom
/// indices without re-running the interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPaletteModel {
    /// The generated light palette.
    pub light_palette: ColorPalette,
    /// The generated dark palette.
    pub dark_palette: ColorPalette,
    /// Hue the base tones were generated from.
    pub base_tones_hue: u16,
    /// The base color tone ramp (dark to light).
    pub base_tones: Vec<Color>,
    /// Hue the accent tones were generated from.
    pub accent_tones_hue: u16,
    /// The accent color tone ramp.
    pub accent_tones: Vec<Color>,
    /// The muted surface tone ramp.
    pub surface_tones: Vec<Color>,
    /// The error tone ramp (hue 0).
    pub error_tones: Vec<Color>,
}

impl ColorPaletteModel {
    /// Selects the light or dark palette for the given mode flag.
    #[must_use]
    pub const fn palette(&self, dark: bool) -> &ColorPalette {
        if dark {
            &self.dark_palette
        } else {
            &self.light_palette
        }
    }
}

impl Default for ColorPaletteModel {
    /// The default model carries the built-in palettes and empty tone ramps.
    fn default() -> Self {
        Self {
            light_palette: ColorPalette::default_light(),
            dark_palette: ColorPalette::default_dark(),
            base_tones_hue: 210,
            base_tones: Vec::new(),
            accent_tones_hue: 140,
            accent_tones: Vec::new(),
            surface_tones: Vec::new(),
            error_tones: Vec::new(),
        }
    }
}
