//! Corner shape tokens.

use serde::{Deserialize, Serialize};

/// Corner radii used across the component set, in dp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shapes {
    /// Small corner radius, for compact controls.
    pub small: u32,
    /// Medium corner radius, for cards and sheets.
    pub medium: u32,
    /// Large corner radius, for prominent surfaces.
    pub large: u32,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            small: 16,
            medium: 24,
            large: 48,
        }
    }
}
