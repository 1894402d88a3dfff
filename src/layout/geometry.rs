//! Geometry primitives for the layout engine.
//!
//! All layout math runs in integer pixels. Sizes are unsigned; placement
//! offsets are signed because centered slots can legitimately start above
//! or left of the viewport when they are larger than it.

use serde::{Deserialize, Serialize};

/// Reading/layout direction of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LayoutDirection {
    /// Left-to-right layouts.
    #[default]
    Ltr,
    /// Right-to-left layouts.
    Rtl,
}

/// A measured width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The zero size.
    pub const ZERO: Self = Self::new(0, 0);
}

/// A placement offset in pixels, relative to the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Offset {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl Offset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin offset.
    pub const ZERO: Self = Self::new(0, 0);
}

/// A positioned rectangle: a slot's size placed at an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub offset: Offset,
    /// Measured size.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from an offset and a size.
    #[must_use]
    pub const fn new(offset: Offset, size: Size) -> Self {
        Self { offset, size }
    }
}

/// Loose measurement constraints: minimum zero, maximum as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// Maximum width a slot may occupy.
    pub max_width: u32,
    /// Maximum height a slot may occupy.
    pub max_height: u32,
}

impl Constraints {
    /// Loose constraints capped at the given size.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self {
            max_width: size.width,
            max_height: size.height,
        }
    }

    /// Shrinks the constraints by the given amounts, saturating at zero.
    #[must_use]
    pub const fn shrink(self, horizontal: u32, vertical: u32) -> Self {
        Self {
            max_width: self.max_width.saturating_sub(horizontal),
            max_height: self.max_height.saturating_sub(vertical),
        }
    }

    /// Clamps a measured size into these constraints.
    #[must_use]
    pub fn constrain(self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max_width),
            size.height.min(self.max_height),
        )
    }
}

/// Direction-resolved padding for the main content area, in pixels.
///
/// `start`/`end` follow the layout direction: start is left in LTR and
/// right in RTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EdgeInsets {
    /// Leading-edge padding.
    pub start: u32,
    /// Top padding.
    pub top: u32,
    /// Trailing-edge padding.
    pub end: u32,
    /// Bottom padding.
    pub bottom: u32,
}

impl EdgeInsets {
    /// Creates a padding descriptor.
    #[must_use]
    pub const fn new(start: u32, top: u32, end: u32, bottom: u32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }
}

/// Reserved amounts claimed by system chrome on each physical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowInsets {
    /// Pixels reserved on the left edge.
    pub left: u32,
    /// Pixels reserved on the top edge.
    pub top: u32,
    /// Pixels reserved on the right edge.
    pub right: u32,
    /// Pixels reserved on the bottom edge.
    pub bottom: u32,
}

impl WindowInsets {
    /// Creates a window-insets descriptor.
    #[must_use]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The inset on the leading edge for the given direction.
    #[must_use]
    pub const fn start(&self, direction: LayoutDirection) -> u32 {
        match direction {
            LayoutDirection::Ltr => self.left,
            LayoutDirection::Rtl => self.right,
        }
    }

    /// The inset on the trailing edge for the given direction.
    #[must_use]
    pub const fn end(&self, direction: LayoutDirection) -> u32 {
        match direction {
            LayoutDirection::Ltr => self.right,
            LayoutDirection::Rtl => self.left,
        }
    }

    /// Direction-resolved insets as main-content padding.
    #[must_use]
    pub const fn as_edge_insets(&self, direction: LayoutDirection) -> EdgeInsets {
        EdgeInsets::new(self.start(direction), self.top, self.end(direction), self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_shrink_saturates() {
        let constraints = Constraints::loose(Size::new(100, 50));
        let reduced = constraints.shrink(130, 20);
        assert_eq!(reduced.max_width, 0);
        assert_eq!(reduced.max_height, 30);
    }

    #[test]
    fn test_constrain_caps_size() {
        let constraints = Constraints::loose(Size::new(100, 50));
        assert_eq!(
            constraints.constrain(Size::new(300, 20)),
            Size::new(100, 20)
        );
    }

    #[test]
    fn test_insets_direction_resolution() {
        let insets = WindowInsets::new(10, 20, 30, 40);
        assert_eq!(insets.start(LayoutDirection::Ltr), 10);
        assert_eq!(insets.end(LayoutDirection::Ltr), 30);
        assert_eq!(insets.start(LayoutDirection::Rtl), 30);
        assert_eq!(insets.end(LayoutDirection::Rtl), 10);
        assert_eq!(
            insets.as_edge_insets(LayoutDirection::Rtl),
            EdgeInsets::new(30, 20, 10, 40)
        );
    }
}
