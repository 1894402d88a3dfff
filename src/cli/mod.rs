//! CLI command handlers for Huekit.
//!
//! This module provides headless, scriptable access to the palette
//! generator, layout engine, and window classifier for automation,
//! testing, and CI integration.

pub mod common;
pub mod config;
pub mod layout;
pub mod palette;
pub mod window;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use palette::PaletteArgs;
pub use window::WindowArgs;
