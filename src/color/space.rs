//! Perceptual color space conversions.
//!
//! Tone generation anchors its stops in cylindrical CIE LCh(ab) and
//! interpolates in Oklab, so this module provides the conversion chain
//! LCh(ab) -> Lab -> XYZ -> Oklab and the final Oklab -> sRGB step.
//! All spaces assume the D65 white point.

// Standard color science formulas use single-letter names and magic matrices.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

use crate::models::Color;

// D65 reference white.
const WHITE_X: f32 = 0.95047;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.08883;

// CIE Lab constants (epsilon = 216/24389, kappa = 24389/27).
const LAB_EPSILON: f32 = 216.0 / 24389.0;
const LAB_KAPPA: f32 = 24389.0 / 27.0;

/// A color in cylindrical CIE LCh(ab) coordinates.
///
/// `l` is lightness in [0, 100], `c` is chroma, `h` is the hue angle in
/// degrees, `alpha` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchAb {
    /// Lightness (0-100).
    pub l: f32,
    /// Chroma magnitude.
    pub c: f32,
    /// Hue angle in degrees.
    pub h: f32,
    /// Alpha (0-1).
    pub alpha: f32,
}

impl LchAb {
    /// Creates an LCh(ab) color.
    #[must_use]
    pub const fn new(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// Converts to Oklab for perceptually uniform interpolation.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (x, y, z) = self.to_xyz();
        Oklab::from_xyz(x, y, z, self.alpha)
    }

    /// Converts to CIE XYZ (D65) via rectangular Lab.
    fn to_xyz(self) -> (f32, f32, f32) {
        // LCh -> Lab: chroma and hue back to rectangular a/b.
        let h_rad = self.h.to_radians();
        let a = self.c * h_rad.cos();
        let b = self.c * h_rad.sin();

        // Lab -> XYZ.
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let inv_f = |t: f32| {
            let t3 = t * t * t;
            if t3 > LAB_EPSILON {
                t3
            } else {
                (116.0 * t - 16.0) / LAB_KAPPA
            }
        };

        let yr = if self.l > LAB_KAPPA * LAB_EPSILON {
            let t = (self.l + 16.0) / 116.0;
            t * t * t
        } else {
            self.l / LAB_KAPPA
        };

        (inv_f(fx) * WHITE_X, yr * WHITE_Y, inv_f(fz) * WHITE_Z)
    }
}

/// A color in the Oklab perceptual space, with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness (0-1).
    pub l: f32,
    /// Green-red axis.
    pub a: f32,
    /// Blue-yellow axis.
    pub b: f32,
    /// Alpha (0-1).
    pub alpha: f32,
}

impl Oklab {
    /// Creates an Oklab color.
    #[must_use]
    pub const fn new(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self { l, a, b, alpha }
    }

    /// Converts CIE XYZ (D65) to Oklab.
    #[must_use]
    pub fn from_xyz(x: f32, y: f32, z: f32, alpha: f32) -> Self {
        let l = 0.8189330101 * x + 0.3618667424 * y - 0.1288597137 * z;
        let m = 0.0329845436 * x + 0.9293118715 * y + 0.0361456387 * z;
        let s = 0.0482003018 * x + 0.2643662691 * y + 0.6338517070 * z;

        let l = l.cbrt();
        let m = m.cbrt();
        let s = s.cbrt();

        Self {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
            alpha,
        }
    }

    /// Converts to an 8-bit sRGB display color, clamping out-of-gamut
    /// channels.
    #[must_use]
    pub fn to_srgb(self) -> Color {
        let l_ = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m_ = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s_ = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
        let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
        let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

        Color::from_f32_array([gamma_encode(r), gamma_encode(g), gamma_encode(b), self.alpha])
    }
}

/// Applies the sRGB transfer function to a linear channel value.
fn gamma_encode(linear: f32) -> f32 {
    let c = linear.clamp(0.0, 1.0);
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
