//! Smooth palette transitions.
//!
//! Palette changes on hue edits are softened with a critically damped
//! spring per color channel, stepped by an external frame clock. A spring
//! exposes `current` / `target` / [`Spring::advance`]; retargeting at any
//! time is safe because each transition is keyed only by its latest target,
//! so there is no cancellation token to manage.

use crate::models::{Color, ColorPalette, PaletteRole};

/// Spring stiffness of the palette transition (low preset).
pub const STIFFNESS: f32 = 200.0;

/// Damping ratio of the palette transition (no bounce).
pub const DAMPING_RATIO: f32 = 1.0;

// Settle thresholds: below these the spring snaps to its target.
const REST_DELTA: f32 = 0.001;
const REST_VELOCITY: f32 = 0.001;

/// A continuously animated scalar driven by spring physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    current: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Creates a spring already settled at `value`.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            velocity: 0.0,
            target: value,
        }
    }

    /// The current animated value.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// The value the spring is moving toward.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Retargets the spring, keeping its current value and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Returns true once the spring has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_VELOCITY
    }

    /// Advances the simulation by `dt` seconds (semi-implicit Euler).
    pub fn advance(&mut self, dt: f32) {
        if self.is_settled() {
            self.current = self.target;
            self.velocity = 0.0;
            return;
        }
        // Critical damping: c = 2 * zeta * sqrt(k).
        let damping = 2.0 * DAMPING_RATIO * STIFFNESS.sqrt();
        let accel = -STIFFNESS * (self.current - self.target) - damping * self.velocity;
        self.velocity += accel * dt;
        self.current += self.velocity * dt;
    }
}

/// A [`ColorPalette`] whose colors glide toward a target palette.
///
/// Holds one spring per color channel plus the two hues. Call
/// [`AnimatedPalette::advance`] once per frame and read
/// [`AnimatedPalette::current`].
#[derive(Debug, Clone)]
pub struct AnimatedPalette {
    target: ColorPalette,
    // 13 roles x rgba channels, in PaletteRole::ALL order.
    channels: Vec<[Spring; 4]>,
    base_hue: Spring,
    accent_hue: Spring,
}

impl AnimatedPalette {
    /// Creates an animated palette already settled at `palette`.
    #[must_use]
    pub fn new(palette: ColorPalette) -> Self {
        let channels = PaletteRole::ALL
            .iter()
            .map(|role| {
                let rgba = palette.color(*role).to_f32_array();
                rgba.map(Spring::new)
            })
            .collect();
        Self {
            target: palette,
            channels,
            base_hue: Spring::new(f32::from(palette.base_hue)),
            accent_hue: Spring::new(f32::from(palette.accent_hue)),
        }
    }

    /// The palette this animation is moving toward.
    #[must_use]
    pub const fn target(&self) -> &ColorPalette {
        &self.target
    }

    /// Retargets the animation; in-flight transitions bend toward the new
    /// palette without restarting.
    pub fn set_target(&mut self, palette: ColorPalette) {
        for (springs, role) in self.channels.iter_mut().zip(PaletteRole::ALL) {
            let rgba = palette.color(role).to_f32_array();
            for (spring, channel) in springs.iter_mut().zip(rgba) {
                spring.set_target(channel);
            }
        }
        self.base_hue.set_target(f32::from(palette.base_hue));
        self.accent_hue.set_target(f32::from(palette.accent_hue));
        self.target = palette;
    }

    /// Advances every channel spring by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for springs in &mut self.channels {
            for spring in springs {
                spring.advance(dt);
            }
        }
        self.base_hue.advance(dt);
        self.accent_hue.advance(dt);
    }

    /// Returns true once every channel has settled at the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.channels
            .iter()
            .all(|springs| springs.iter().all(Spring::is_settled))
            && self.base_hue.is_settled()
            && self.accent_hue.is_settled()
    }

    /// The palette at the current point of the transition.
    #[must_use]
    pub fn current(&self) -> ColorPalette {
        let color_at = |index: usize| {
            let springs = &self.channels[index];
            Color::from_f32_array([
                springs[0].current(),
                springs[1].current(),
                springs[2].current(),
                springs[3].current(),
            ])
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hue = |spring: &Spring| (spring.current().round().rem_euclid(360.0)) as u16;
        ColorPalette {
            base_hue: hue(&self.base_hue),
            base: color_at(0),
            on_base: color_at(1),
            accent_hue: hue(&self.accent_hue),
            accent: color_at(2),
            on_accent: color_at(3),
            surface_low: color_at(4),
            on_surface_low: color_at(5),
            surface_medium: color_at(6),
            on_surface_medium: color_at(7),
            surface_high: color_at(8),
            on_surface_high: color_at(9),
            error: color_at(10),
            on_error: color_at(11),
            outline: color_at(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_at_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.advance(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert!((spring.current() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_spring_no_overshoot_when_critically_damped() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        let mut max = 0.0f32;
        for _ in 0..600 {
            spring.advance(1.0 / 60.0);
            max = max.max(spring.current());
        }
        assert!(max <= 1.01, "overshoot to {max}");
    }

    #[test]
    fn test_spring_retarget_mid_flight() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        for _ in 0..5 {
            spring.advance(1.0 / 60.0);
        }
        spring.set_target(-1.0);
        for _ in 0..600 {
            spring.advance(1.0 / 60.0);
        }
        assert!((spring.current() + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_animated_palette_reaches_target() {
        let mut animated = AnimatedPalette::new(ColorPalette::default_light());
        animated.set_target(ColorPalette::default_dark());
        for _ in 0..1200 {
            animated.advance(1.0 / 60.0);
        }
        assert!(animated.is_settled());
        let current = animated.current();
        assert_eq!(current.base, ColorPalette::default_dark().base);
        assert_eq!(current.base_hue, 210);
    }

    #[test]
    fn test_animated_palette_starts_settled() {
        let animated = AnimatedPalette::new(ColorPalette::default_light());
        assert!(animated.is_settled());
        assert_eq!(animated.current(), ColorPalette::default_light());
    }
}
