//! Perceptual palette generation.
//!
//! Derives complete light/dark palettes from a single hue: tone ramps are
//! interpolated in Oklab between three LCh(ab) stops, then fixed index
//! tables extract the role colors. See [`generate_palette_model`].

pub mod animate;
pub mod generator;
pub mod space;
pub mod tones;

pub use animate::{AnimatedPalette, Spring};
pub use generator::{
    accent_hue, generate_palette_model, ExtractionIndices, HueOffsetDirection, ACCENT_HUE_OFFSET,
};
pub use tones::{generate_color_tones, ColorToneChroma, TONES_COUNT};
