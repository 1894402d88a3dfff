//! Data models for colors, palettes, and window classification.
//!
//! This module contains the core value types used throughout the toolkit.
//! Models are plain data, independent of the generation and layout logic.

pub mod color;
pub mod palette;
pub mod window;

// Re-export all model types
pub use color::Color;
pub use palette::{ColorPalette, ColorPaletteModel, PaletteRole};
pub use window::{
    transform_fraction, ScreenOrientation, WindowFormFactor, WindowSize, WindowState,
    MAX_COMPACT_WIDTH, MAX_HORIZONTAL_PADDING, MAX_LARGE_WIDTH, MAX_MEDIUM_WIDTH,
    MIN_HORIZONTAL_PADDING,
};
