//! Window size classification for responsive layouts.
//!
//! A [`WindowState`] is a value type recomputed on every layout pass from
//! the current viewport dimensions. It classifies the available width and
//! height against fixed breakpoints and derives orientation, a form-factor
//! guess, and the responsive horizontal content padding.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the compact width/height class, in dp.
pub const MAX_COMPACT_WIDTH: f32 = 480.0;

/// Upper bound (exclusive) of the medium width/height class, in dp.
pub const MAX_MEDIUM_WIDTH: f32 = 900.0;

/// Width at which the horizontal padding reaches its maximum, in dp.
pub const MAX_LARGE_WIDTH: f32 = 1280.0;

/// Horizontal content padding at the compact breakpoint, in dp.
pub const MIN_HORIZONTAL_PADDING: f32 = 16.0;

/// Horizontal content padding at and beyond [`MAX_LARGE_WIDTH`], in dp.
pub const MAX_HORIZONTAL_PADDING: f32 = 48.0;

/// Classification of the available width or height of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowSize {
    /// A small area (below 480 dp).
    Compact,
    /// A medium area (480 to 900 dp).
    Medium,
    /// A large area (900 dp and up).
    Large,
}

impl WindowSize {
    /// Classifies a dp measurement against the fixed breakpoints.
    #[must_use]
    pub fn classify(size: f32) -> Self {
        if size < MAX_COMPACT_WIDTH {
            Self::Compact
        } else if size < MAX_MEDIUM_WIDTH {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// Screen orientation derived from the width/height ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenOrientation {
    /// Width < height.
    Portrait,
    /// Width == height.
    Square,
    /// Width > height.
    Landscape,
}

impl ScreenOrientation {
    /// Returns true for [`ScreenOrientation::Portrait`] and
    /// [`ScreenOrientation::Square`].
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait | Self::Square)
    }
}

/// Heuristic device-class guess derived from the window size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowFormFactor {
    /// Small window in portrait orientation (possibly a phone).
    PhoneInPortrait,
    /// Small window in landscape orientation (possibly a phone).
    PhoneInLandscape,
    /// Medium window in portrait orientation (foldable or small tablet).
    FoldableTabletPortrait,
    /// Medium window in landscape orientation (foldable or small tablet).
    FoldableTabletLandscape,
    /// Large window in portrait orientation (large tablet or desktop).
    DesktopPortrait,
    /// Large window in landscape orientation (large tablet or desktop).
    DesktopLandscape,
}

/// Linearly remaps `value` from the `[start_x, end_x]` range onto
/// `[start_y, end_y]`.
///
/// Either range may be given in reverse order; it is normalized first.
/// The value itself is not clamped, so callers clamp the input when they
/// need a bounded output.
#[must_use]
pub fn transform_fraction(value: f32, start_x: f32, end_x: f32, start_y: f32, end_y: f32) -> f32 {
    let (x0, x1) = if start_x <= end_x {
        (start_x, end_x)
    } else {
        (end_x, start_x)
    };
    let (y0, y1) = if start_y <= end_y {
        (start_y, end_y)
    } else {
        (end_y, start_y)
    };
    ((value - x0) / (x1 - x0)) * (y1 - y0) + y0
}

/// The available window area, classified and measured in dp.
///
/// Recreated from the viewport on every layout pass; instances carry no
/// identity across passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    /// Classification of the available width.
    pub available_width_size: WindowSize,
    /// Classification of the available height.
    pub available_height_size: WindowSize,
    /// Available width in dp.
    pub available_width_dp: f32,
    /// Available height in dp.
    pub available_height_dp: f32,
}

impl WindowState {
    /// Builds a `WindowState` from the current viewport dimensions in dp.
    #[must_use]
    pub fn new(width_dp: f32, height_dp: f32) -> Self {
        Self {
            available_width_size: WindowSize::classify(width_dp),
            available_height_size: WindowSize::classify(height_dp),
            available_width_dp: width_dp,
            available_height_dp: height_dp,
        }
    }

    /// Returns true if the available width is [`WindowSize::Compact`].
    #[must_use]
    pub fn is_compact_width(&self) -> bool {
        self.available_width_size == WindowSize::Compact
    }

    /// Returns true if the available width is [`WindowSize::Medium`].
    #[must_use]
    pub fn is_medium_width(&self) -> bool {
        self.available_width_size == WindowSize::Medium
    }

    /// Returns true if the available width is [`WindowSize::Large`].
    #[must_use]
    pub fn is_large_width(&self) -> bool {
        self.available_width_size == WindowSize::Large
    }

    /// Returns true if the available height is [`WindowSize::Compact`].
    #[must_use]
    pub fn is_compact_height(&self) -> bool {
        self.available_height_size == WindowSize::Compact
    }

    /// Returns true if the available height is [`WindowSize::Medium`].
    #[must_use]
    pub fn is_medium_height(&self) -> bool {
        self.available_height_size == WindowSize::Medium
    }

    /// Returns true if the available height is [`WindowSize::Large`].
    #[must_use]
    pub fn is_large_height(&self) -> bool {
        self.available_height_size == WindowSize::Large
    }

    /// The current screen orientation.
    #[must_use]
    pub fn screen_orientation(&self) -> ScreenOrientation {
        if self.available_width_dp < self.available_height_dp {
            ScreenOrientation::Portrait
        } else if self.available_width_dp > self.available_height_dp {
            ScreenOrientation::Landscape
        } else {
            ScreenOrientation::Square
        }
    }

    /// The current form factor of the window.
    #[must_use]
    pub fn form_factor(&self) -> WindowFormFactor {
        let portrait = self.screen_orientation().is_portrait();
        if self.is_compact_width() {
            WindowFormFactor::PhoneInPortrait
        } else if (self.is_medium_width() || self.is_large_width()) && self.is_compact_height() {
            WindowFormFactor::PhoneInLandscape
        } else if self.is_medium_width() && self.is_medium_height() && portrait {
            WindowFormFactor::FoldableTabletPortrait
        } else if (self.is_medium_width() && self.is_medium_height() && !portrait)
            || (self.is_large_width() && self.is_medium_height())
        {
            WindowFormFactor::FoldableTabletLandscape
        } else if self.is_large_width() && self.is_large_height() && portrait {
            WindowFormFactor::DesktopPortrait
        } else if self.is_large_width() {
            WindowFormFactor::DesktopLandscape
        } else {
            WindowFormFactor::PhoneInLandscape
        }
    }

    /// The horizontal content padding in dp, based on the available width.
    ///
    /// Interpolates linearly from [`MIN_HORIZONTAL_PADDING`] at the compact
    /// breakpoint to [`MAX_HORIZONTAL_PADDING`] at [`MAX_LARGE_WIDTH`],
    /// clamped to that range on both sides.
    #[must_use]
    pub fn horizontal_padding(&self) -> f32 {
        transform_fraction(
            self.available_width_dp
                .clamp(MAX_COMPACT_WIDTH, MAX_LARGE_WIDTH),
            MAX_COMPACT_WIDTH,
            MAX_LARGE_WIDTH,
            MIN_HORIZONTAL_PADDING,
            MAX_HORIZONTAL_PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_breakpoints() {
        assert_eq!(WindowSize::classify(0.0), WindowSize::Compact);
        assert_eq!(WindowSize::classify(479.9), WindowSize::Compact);
        assert_eq!(WindowSize::classify(480.0), WindowSize::Medium);
        assert_eq!(WindowSize::classify(899.9), WindowSize::Medium);
        assert_eq!(WindowSize::classify(900.0), WindowSize::Large);
        assert_eq!(WindowSize::classify(4000.0), WindowSize::Large);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            WindowState::new(400.0, 800.0).screen_orientation(),
            ScreenOrientation::Portrait
        );
        assert_eq!(
            WindowState::new(800.0, 400.0).screen_orientation(),
            ScreenOrientation::Landscape
        );
        assert_eq!(
            WindowState::new(600.0, 600.0).screen_orientation(),
            ScreenOrientation::Square
        );
        assert!(ScreenOrientation::Square.is_portrait());
        assert!(!ScreenOrientation::Landscape.is_portrait());
    }

    #[test]
    fn test_form_factor_phone() {
        assert_eq!(
            WindowState::new(400.0, 800.0).form_factor(),
            WindowFormFactor::PhoneInPortrait
        );
        assert_eq!(
            WindowState::new(800.0, 400.0).form_factor(),
            WindowFormFactor::PhoneInLandscape
        );
    }

    #[test]
    fn test_form_factor_foldable() {
        assert_eq!(
            WindowState::new(600.0, 800.0).form_factor(),
            WindowFormFactor::FoldableTabletPortrait
        );
        assert_eq!(
            WindowState::new(800.0, 600.0).form_factor(),
            WindowFormFactor::FoldableTabletLandscape
        );
        // Large width with medium height also reads as a landscape foldable.
        assert_eq!(
            WindowState::new(1000.0, 700.0).form_factor(),
            WindowFormFactor::FoldableTabletLandscape
        );
    }

    #[test]
    fn test_form_factor_desktop() {
        assert_eq!(
            WindowState::new(1000.0, 1400.0).form_factor(),
            WindowFormFactor::DesktopPortrait
        );
        assert_eq!(
            WindowState::new(1920.0, 1080.0).form_factor(),
            WindowFormFactor::DesktopLandscape
        );
    }

    #[test]
    fn test_horizontal_padding_clamped_at_extremes() {
        let compact = WindowState::new(MAX_COMPACT_WIDTH, 600.0);
        assert!((compact.horizontal_padding() - MIN_HORIZONTAL_PADDING).abs() < f32::EPSILON);

        let narrow = WindowState::new(100.0, 600.0);
        assert!((narrow.horizontal_padding() - MIN_HORIZONTAL_PADDING).abs() < f32::EPSILON);

        let wide = WindowState::new(MAX_LARGE_WIDTH, 600.0);
        assert!((wide.horizontal_padding() - MAX_HORIZONTAL_PADDING).abs() < f32::EPSILON);

        let ultrawide = WindowState::new(3440.0, 600.0);
        assert!((ultrawide.horizontal_padding() - MAX_HORIZONTAL_PADDING).abs() < f32::EPSILON);
    }

    #[test]
    fn test_horizontal_padding_monotone() {
        let mut last = 0.0f32;
        let mut width = MAX_COMPACT_WIDTH;
        while width <= MAX_LARGE_WIDTH {
            let padding = WindowState::new(width, 600.0).horizontal_padding();
            assert!(padding >= last, "padding regressed at width {width}");
            last = padding;
            width += 10.0;
        }
    }

    #[test]
    fn test_transform_fraction_reversed_ranges() {
        // Reversed x range normalizes to the same mapping.
        let a = transform_fraction(0.25, 0.0, 1.0, 10.0, 20.0);
        let b = transform_fraction(0.25, 1.0, 0.0, 10.0, 20.0);
        assert!((a - 12.5).abs() < f32::EPSILON);
        assert!((a - b).abs() < f32::EPSILON);
    }
}
