//! Typography tokens.
//!
//! Nine text styles in three families (titles, actions, body), each a
//! font size, line height, weight, and letter spacing. Sizes are in dp;
//! letter spacing is in em.

use serde::{Deserialize, Serialize};

/// Relative weight of a typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}

/// One named text style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in dp.
    pub font_size: f32,
    /// Line height in dp.
    pub line_height: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Letter spacing in em. Negative values tighten tracking.
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Creates a text style.
    #[must_use]
    pub const fn new(
        font_size: f32,
        line_height: f32,
        weight: FontWeight,
        letter_spacing: f32,
    ) -> Self {
        Self {
            font_size,
            line_height,
            weight,
            letter_spacing,
        }
    }
}

/// The full text style set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typefaces {
    /// Largest title, for screen headers.
    pub title_large: TextStyle,
    /// Section titles.
    pub title_medium: TextStyle,
    /// Sub-section titles.
    pub title_small: TextStyle,
    /// Prominent action labels.
    pub action_large: TextStyle,
    /// Default action labels.
    pub action_medium: TextStyle,
    /// Compact action labels.
    pub action_small: TextStyle,
    /// Lead body copy.
    pub body_large: TextStyle,
    /// Default body copy.
    pub body_medium: TextStyle,
    /// Captions and footnotes.
    pub body_small: TextStyle,
}

impl Default for Typefaces {
    fn default() -> Self {
        Self {
            title_large: TextStyle::new(40.0, 44.0, FontWeight::Bold, 0.1),
            title_medium: TextStyle::new(32.0, 36.0, FontWeight::Bold, 0.18),
            title_small: TextStyle::new(24.0, 28.0, FontWeight::Medium, 0.2),
            action_large: TextStyle::new(16.0, 18.0, FontWeight::Medium, -0.014),
            action_medium: TextStyle::new(14.0, 16.0, FontWeight::Medium, -0.12),
            action_small: TextStyle::new(12.0, 14.0, FontWeight::Medium, -0.1),
            body_large: TextStyle::new(16.0, 18.0, FontWeight::Normal, -0.1),
            body_medium: TextStyle::new(14.0, 16.0, FontWeight::Normal, 0.0),
            body_small: TextStyle::new(12.0, 14.0, FontWeight::Normal, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_exceeds_font_size() {
        let faces = Typefaces::default();
        for style in [
            faces.title_large,
            faces.title_medium,
            faces.title_small,
            faces.action_large,
            faces.action_medium,
            faces.action_small,
            faces.body_large,
            faces.body_medium,
            faces.body_small,
        ] {
            assert!(style.line_height > style.font_size);
        }
    }

    #[test]
    fn test_titles_are_heavier_than_body() {
        let faces = Typefaces::default();
        assert_eq!(faces.title_large.weight, FontWeight::Bold);
        assert_eq!(faces.body_medium.weight, FontWeight::Normal);
    }
}
