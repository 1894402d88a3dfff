//! Palette generation from a single hue.
//!
//! The generator derives four tone ramps (base, accent, surface, error)
//! and extracts a complete light and dark [`ColorPalette`] from them using
//! fixed index tables. It is a pure function of its inputs and safe to run
//! on a background thread; the resulting [`ColorPaletteModel`] is
//! constructed whole before being handed back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tones::{generate_color_tones, ColorToneChroma, TONES_COUNT};
use crate::models::{Color, ColorPalette, ColorPaletteModel, PaletteRole};

/// Default hue distance between the base and accent ramps, in degrees.
pub const ACCENT_HUE_OFFSET: u16 = 67;

/// Hue of the error tone ramp.
const ERROR_HUE: u16 = 0;

/// Direction in which the accent hue is offset from the base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HueOffsetDirection {
    /// Accent hue = base hue - offset (mod 360).
    #[default]
    Down,
    /// Accent hue = base hue + offset (mod 360).
    Up,
}

/// Tone-ramp indices from which one palette's role colors are extracted.
///
/// These are fixed design constants tied to the visual design; the "on"
/// indices sit on the opposite half of the 0-29 lightness ramp from their
/// container so every pairing has guaranteed contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionIndices {
    /// Index of the base color in the base ramp.
    pub base: usize,
    /// Index of the on-base color in the base ramp.
    pub on_base: usize,
    /// Index of the accent color in the accent ramp.
    pub accent: usize,
    /// Index of the on-accent color in the accent ramp.
    pub on_accent: usize,
    /// Index of the low surface color in the surface ramp.
    pub surface_low: usize,
    /// Index of the on-surface-low color in the surface ramp.
    pub on_surface_low: usize,
    /// Index of the medium surface color in the surface ramp.
    pub surface_medium: usize,
    /// Index of the on-surface-medium color in the surface ramp.
    pub on_surface_medium: usize,
    /// Index of the high surface color in the surface ramp.
    pub surface_high: usize,
    /// Index of the on-surface-high color in the surface ramp.
    pub on_surface_high: usize,
    /// Index of the error color in the error ramp.
    pub error: usize,
    /// Index of the on-error color in the error ramp.
    pub on_error: usize,
    /// Index of the outline color in the surface ramp.
    pub outline: usize,
}

impl ExtractionIndices {
    /// Index table for the light palette.
    pub const LIGHT: Self = Self {
        base: 10,
        on_base: 28,
        accent: 10,
        on_accent: 28,
        surface_low: 26,
        on_surface_low: 5,
        surface_medium: 27,
        on_surface_medium: 4,
        surface_high: 28,
        on_surface_high: 3,
        error: 10,
        on_error: 28,
        outline: 24,
    };

    /// Index table for the dark palette.
    pub const DARK: Self = Self {
        base: 20,
        on_base: 3,
        accent: 20,
        on_accent: 3,
        surface_low: 4,
        on_surface_low: 26,
        surface_medium: 5,
        on_surface_medium: 27,
        surface_high: 6,
        on_surface_high: 28,
        error: 20,
        on_error: 3,
        outline: 6,
    };

    /// The ramp index this table reads for the given role.
    #[must_use]
    pub const fn index(&self, role: PaletteRole) -> usize {
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

    /// The highest index this table reads from any ramp.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        // on_base / on_accent / surface_high share the ramp maximum in both
        // tables; computing it keeps the assertion honest if tables change.
        let mut max = self.base;
        let all = [
            self.on_base,
            self.accent,
            self.on_accent,
            self.surface_low,
            self.on_surface_low,
            self.surface_medium,
            self.on_surface_medium,
            self.surface_high,
            self.on_surface_high,
            self.error,
            self.on_error,
            self.outline,
        ];
        let mut i = 0;
        while i < all.len() {
            if all[i] > max {
                max = all[i];
            }
            i += 1;
        }
        max
    }
}

/// Reads a tone by index, clamping to the last tone of the ramp.
///
/// Generated ramps carry the full [`TONES_COUNT`] samples; the clamp is a
/// backstop that keeps extraction total on any shorter input.
fn tone_at(tones: &[Color], index: usize) -> Color {
    debug_assert!(
        index < TONES_COUNT,
        "extraction index {index} exceeds the {TONES_COUNT}-tone design range"
    );
    tones[index.min(tones.len() - 1)]
}

/// Computes the accent hue from the base hue, offset and direction,
/// wrapped into [0, 360).
#[must_use]
pub fn accent_hue(base_hue: u16, offset: u16, direction: HueOffsetDirection) -> u16 {
    let base = i32::from(base_hue % 360);
    let offset = i32::from(offset);
    let hue = match direction {
        HueOffsetDirection::Down => base - offset,
        HueOffsetDirection::Up => base + offset,
    };
    // Hue is cyclic; euclidean remainder maps negatives back into range.
    u16::try_from(hue.rem_euclid(360)).unwrap_or(0)
}

/// Generates a [`ColorPaletteModel`] from a base hue.
///
/// `base_hue` is normalized modulo 360. The accent hue is offset from the
/// base by `offset` degrees in `direction`; the surface ramp reuses the
/// base hue with muted chroma and the error ramp is fixed at hue 0.
///
/// Deterministic: equal inputs produce bit-identical models.
///
/// # Examples
///
/// ```
/// use huekit::color::{generate_palette_model, HueOffsetDirection, ACCENT_HUE_OFFSET};
///
/// let model = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
/// assert_eq!(model.base_tones_hue, 210);
/// assert_eq!(model.accent_tones_hue, 143);
/// ```
#[must_use]
pub fn generate_palette_model(
    base_hue: u16,
    offset: u16,
    direction: HueOffsetDirection,
) -> ColorPaletteModel {
    let base_hue = base_hue % 360;
    let accent_hue = accent_hue(base_hue, offset, direction);
    debug!(base_hue, accent_hue, ?direction, "generating palette model");

    let base_tones = generate_color_tones(base_hue, ColorToneChroma::Vibrant);
    let accent_tones = generate_color_tones(accent_hue, ColorToneChroma::Vibrant);
    let surface_tones = generate_color_tones(base_hue, ColorToneChroma::Muted);
    let error_tones = generate_color_tones(ERROR_HUE, ColorToneChroma::Vibrant);

    let extract = |ix: ExtractionIndices| ColorPalette {
        base_hue,
        base: tone_at(&base_tones, ix.base),
        on_base: tone_at(&base_tones, ix.on_base),
        accent_hue,
        accent: tone_at(&accent_tones, ix.accent),
        on_accent: tone_at(&accent_tones, ix.on_accent),
        surface_low: tone_at(&surface_tones, ix.surface_low),
        on_surface_low: tone_at(&surface_tones, ix.on_surface_low),
        surface_medium: tone_at(&surface_tones, ix.surface_medium),
        on_surface_medium: tone_at(&surface_tones, ix.on_surface_medium),
        surface_high: tone_at(&surface_tones, ix.surface_high),
        on_surface_high: tone_at(&surface_tones, ix.on_surface_high),
        error: tone_at(&error_tones, ix.error),
        on_error: tone_at(&error_tones, ix.on_error),
        outline: tone_at(&surface_tones, ix.outline),
    };

    ColorPaletteModel {
        light_palette: extract(ExtractionIndices::LIGHT),
        dark_palette: extract(ExtractionIndices::DARK),
        base_tones_hue: base_hue,
        base_tones,
        accent_tones_hue: accent_hue,
        accent_tones,
        surface_tones,
        error_tones,
    }
}
