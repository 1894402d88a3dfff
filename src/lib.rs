//! Huekit Library
//!
//! This library provides core functionality for the Huekit toolkit:
//! perceptual palette generation from a single base hue, an adaptive
//! five-slot layout engine, window size classification, and theme
//! token assembly.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod layout;
pub mod models;
pub mod theme;
