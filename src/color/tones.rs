//! Tone ramp generation.
//!
//! A tone ramp is an ordered sequence of colors sampled along a lightness
//! curve at a fixed hue. The curve is anchored by three LCh(ab) stops
//! (black, a mid-lightness stop carrying the chroma, white), interpolated
//! in Oklab with a monotone cubic spline so the ramp transitions smoothly
//! without overshooting between stops.

#![allow(clippy::cast_precision_loss)]

use serde::{Deserialize, Serialize};

use super::space::{LchAb, Oklab};
use crate::models::Color;

/// Number of samples taken along the interpolation curve.
pub const TONES_COUNT: usize = 30;

/// Lightness of the first stop.
pub const TONES_LIGHTNESS_START: f32 = 0.0;

/// Lightness of the middle stop.
pub const TONES_LIGHTNESS_MID: f32 = 50.0;

/// Lightness of the last stop.
pub const TONES_LIGHTNESS_END: f32 = 100.0;

/// Fixed hue offset applied uniformly to all three stops, in degrees.
pub const TONES_HUE_OFFSET: f32 = 30.0;

/// Alpha of every generated tone.
pub const TONES_ALPHA: f32 = 1.0;

/// Chroma profile of a tone ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColorToneChroma {
    /// Full chroma at the mid stop (75).
    #[default]
    Vibrant,
    /// Reduced chroma at the mid stop (15), used for surfaces.
    Muted,
    /// No chroma; a pure lightness ramp.
    Zero,
}

impl ColorToneChroma {
    /// The chroma magnitude of the mid stop for this profile.
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Vibrant => 75.0,
            Self::Muted => 15.0,
            Self::Zero => 0.0,
        }
    }
}

/// Generates a tone ramp for the given hue and chroma profile.
///
/// Samples [`TONES_COUNT`] evenly spaced points along the monotone-spline
/// curve through the three stops, removes consecutive duplicates among the
/// Oklab samples, and converts each surviving sample to sRGB. The dedup
/// runs before display conversion: the float samples are effectively
/// always distinct, so the ramp keeps its full length and fixed-index
/// extraction reads the intended sample even where neighboring tones
/// quantize to the same 8-bit color.
///
/// The hue is taken modulo 360 before use.
#[must_use]
pub fn generate_color_tones(hue: u16, chroma: ColorToneChroma) -> Vec<Color> {
    let hue = f32::from(hue % 360) + TONES_HUE_OFFSET;

    let stops = [
        LchAb::new(TONES_LIGHTNESS_START, ColorToneChroma::Zero.value(), hue, TONES_ALPHA)
            .to_oklab(),
        LchAb::new(TONES_LIGHTNESS_MID, chroma.value(), hue, TONES_ALPHA).to_oklab(),
        LchAb::new(TONES_LIGHTNESS_END, ColorToneChroma::Zero.value(), hue, TONES_ALPHA)
            .to_oklab(),
    ];

    let spline = MonotoneSpline::new(&stops);

    let mut samples: Vec<Oklab> = Vec::with_capacity(TONES_COUNT);
    for i in 0..TONES_COUNT {
        let t = i as f32 / (TONES_COUNT - 1) as f32;
        let sample = spline.sample(t);
        if samples.last() != Some(&sample) {
            samples.push(sample);
        }
    }
    samples.into_iter().map(Oklab::to_srgb).collect()
}

/// A monotone cubic spline through Oklab stops at evenly spaced positions.
///
/// Tangents follow the Fritsch-Carlson construction, which keeps each
/// channel monotone between stops and therefore free of overshoot.
struct MonotoneSpline {
    xs: Vec<f32>,
    channels: [ChannelSpline; 4],
}

/// Per-channel Hermite data: values and tangents at each stop.
struct ChannelSpline {
    ys: Vec<f32>,
    tangents: Vec<f32>,
}

impl MonotoneSpline {
    fn new(stops: &[Oklab]) -> Self {
        debug_assert!(stops.len() >= 2, "a spline needs at least two stops");
        let n = stops.len();
        let xs: Vec<f32> = (0..n).map(|i| i as f32 / (n - 1) as f32).collect();

        let channel = |get: fn(&Oklab) -> f32| {
            let ys: Vec<f32> = stops.iter().map(get).collect();
            let tangents = fritsch_carlson_tangents(&xs, &ys);
            ChannelSpline { ys, tangents }
        };

        let channels = [
            channel(|c| c.l),
            channel(|c| c.a),
            channel(|c| c.b),
            channel(|c| c.alpha),
        ];

        Self { xs, channels }
    }

    /// Evaluates the spline at `t` in [0, 1].
    fn sample(&self, t: f32) -> Oklab {
        let t = t.clamp(0.0, 1.0);

        // Find the interval containing t.
        let mut i = self.xs.len() - 2;
        for k in 0..self.xs.len() - 1 {
            if t <= self.xs[k + 1] {
                i = k;
                break;
            }
        }

        let h = self.xs[i + 1] - self.xs[i];
        let s = (t - self.xs[i]) / h;

        let eval = |ch: &ChannelSpline| hermite(ch.ys[i], ch.ys[i + 1], ch.tangents[i], ch.tangents[i + 1], s, h);

        Oklab::new(
            eval(&self.channels[0]),
            eval(&self.channels[1]),
            eval(&self.channels[2]),
            eval(&self.channels[3]),
        )
    }
}

/// Cubic Hermite basis evaluation on a normalized interval.
fn hermite(y0: f32, y1: f32, m0: f32, m1: f32, s: f32, h: f32) -> f32 {
    let s2 = s * s;
    let s3 = s2 * s;
    (2.0 * s3 - 3.0 * s2 + 1.0) * y0
        + (s3 - 2.0 * s2 + s) * h * m0
        + (-2.0 * s3 + 3.0 * s2) * y1
        + (s3 - s2) * h * m1
}

/// Computes monotonicity-preserving tangents (Fritsch-Carlson, 1980).
fn fritsch_carlson_tangents(xs: &[f32], ys: &[f32]) -> Vec<f32> {
    let n = xs.len();
    let mut secants = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        secants.push((ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]));
    }

    let mut m = vec![0.0f32; n];
    m[0] = secants[0];
    m[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        // Zero tangent at local extrema keeps the spline monotone there.
        if secants[i - 1] * secants[i] <= 0.0 {
            m[i] = 0.0;
        } else {
            m[i] = (secants[i - 1] + secants[i]) / 2.0;
        }
    }

    // Limit tangent magnitudes so no interval overshoots its secant.
    for i in 0..n - 1 {
        if secants[i] == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let alpha = m[i] / secants[i];
        let beta = m[i + 1] / secants[i];
        let dist = alpha * alpha + beta * beta;
        if dist > 9.0 {
            let tau = 3.0 / dist.sqrt();
            m[i] = tau * alpha * secants[i];
            m[i + 1] = tau * beta * secants[i];
        }
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints_are_black_and_white() {
        let tones = generate_color_tones(210, ColorToneChroma::Vibrant);
        let first = tones.first().copied().unwrap();
        let last = tones.last().copied().unwrap();
        assert_eq!(first, Color::new(0, 0, 0));
        assert!(last.r >= 254 && last.g >= 254 && last.b >= 254);
    }

    #[test]
    fn test_ramp_keeps_full_length() {
        // Dedup runs on the float samples, where the lightness curve keeps
        // every sample distinct, so index k always reads sample k even when
        // neighboring tones quantize to the same display color.
        for hue in 0..360u16 {
            for chroma in [
                ColorToneChroma::Vibrant,
                ColorToneChroma::Muted,
                ColorToneChroma::Zero,
            ] {
                let tones = generate_color_tones(hue, chroma);
                assert_eq!(tones.len(), TONES_COUNT, "hue {hue}, {chroma:?}");
            }
        }
    }

    #[test]
    fn test_all_tones_opaque() {
        for tone in generate_color_tones(300, ColorToneChroma::Vibrant) {
            assert!(tone.is_opaque());
        }
    }

    #[test]
    fn test_zero_chroma_ramp_is_gray() {
        for tone in generate_color_tones(210, ColorToneChroma::Zero) {
            let max = tone.r.max(tone.g).max(tone.b);
            let min = tone.r.min(tone.g).min(tone.b);
            assert!(max - min <= 1, "expected gray, got {tone:?}");
        }
    }

    #[test]
    fn test_lightness_is_monotone() {
        // Perceived lightness should only increase along the ramp; use the
        // channel sum as a coarse proxy.
        let tones = generate_color_tones(210, ColorToneChroma::Muted);
        for pair in tones.windows(2) {
            let a = u16::from(pair[0].r) + u16::from(pair[0].g) + u16::from(pair[0].b);
            let b = u16::from(pair[1].r) + u16::from(pair[1].g) + u16::from(pair[1].b);
            assert!(b >= a, "ramp darkened from {:?} to {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_hue_wraps_modulo_360() {
        let a = generate_color_tones(30, ColorToneChroma::Vibrant);
        let b = generate_color_tones(390 % 360, ColorToneChroma::Vibrant);
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let a = generate_color_tones(210, ColorToneChroma::Vibrant);
        let b = generate_color_tones(210, ColorToneChroma::Vibrant);
        assert_eq!(a, b);
    }
}
