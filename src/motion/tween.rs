//! Motion snapshots and single-element tweens.
//!
//! A [`Motion`] is an abstract visual state; the TUI layer decides how each
//! field maps onto terminal cells:
//!
//! - `dx`: horizontal offset in columns (positive = shifted right)
//! - `alpha`: opacity, rendered as a color fade toward the background
//! - `dissolve`: fraction of glyphs still scrambled (the blur analog)
//! - `scale`: size factor, used by overlay shrink effects and progress fills

use super::Ease;

/// Visual state of an animated element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Horizontal offset in columns
    pub dx: f32,
    /// Opacity in [0, 1]
    pub alpha: f32,
    /// Glyph scramble fraction in [0, 1] (0 = fully resolved)
    pub dissolve: f32,
    /// Size factor (1 = resting size)
    pub scale: f32,
}

impl Motion {
    /// The resting state: fully visible, in place, resolved, full size.
    #[must_use]
    pub const fn visible() -> Self {
        Self {
            dx: 0.0,
            alpha: 1.0,
            dissolve: 0.0,
            scale: 1.0,
        }
    }

    /// Fully hidden and scrambled, in place.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            dx: 0.0,
            alpha: 0.0,
            dissolve: 1.0,
            scale: 1.0,
        }
    }

    /// Returns this state with a horizontal offset.
    #[must_use]
    pub const fn with_dx(mut self, dx: f32) -> Self {
        self.dx = dx;
        self
    }

    /// Returns this state with a scale factor.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this state with an explicit opacity.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Linear interpolation between two states.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            dx: mix(from.dx, to.dx),
            alpha: mix(from.alpha, to.alpha),
            dissolve: mix(from.dissolve, to.dissolve),
            scale: mix(from.scale, to.scale),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::visible()
    }
}

/// Transition of one element from an initial to a final [`Motion`] over a
/// fixed duration with an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Initial style snapshot
    pub from: Motion,
    /// Final style snapshot
    pub to: Motion,
    /// Duration in seconds
    pub duration: f32,
    /// Easing curve
    pub ease: Ease,
}

impl Tween {
    /// Creates a tween. Durations are clamped to a small positive minimum so
    /// a zero-length tween still has well-defined endpoints.
    #[must_use]
    pub fn new(from: Motion, to: Motion, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.001),
            ease,
        }
    }

    /// Samples the state `local` seconds after this tween's start.
    #[must_use]
    pub fn sample(&self, local: f32) -> Motion {
        let t = self.ease.apply(local / self.duration);
        Motion::lerp(self.from, self.to, t)
    }

    /// Normalized progress of this tween at `local` seconds, after easing.
    #[must_use]
    pub fn progress(&self, local: f32) -> f32 {
        self.ease.apply(local / self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Motion::hidden().with_dx(-20.0);
        let b = Motion::visible();
        assert_eq!(Motion::lerp(a, b, 0.0), a);
        assert_eq!(Motion::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_sample_clamps_past_end() {
        let tween = Tween::new(Motion::hidden(), Motion::visible(), 1.0, Ease::Linear);
        assert_eq!(tween.sample(2.0), Motion::visible());
        assert_eq!(tween.sample(-1.0), Motion::hidden());
    }

    #[test]
    fn test_sample_midpoint_linear() {
        let tween = Tween::new(Motion::hidden(), Motion::visible(), 2.0, Ease::Linear);
        let mid = tween.sample(1.0);
        assert!((mid.alpha - 0.5).abs() < 1e-6);
        assert!((mid.dissolve - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_is_safe() {
        let tween = Tween::new(Motion::hidden(), Motion::visible(), 0.0, Ease::PowerOut);
        assert_eq!(tween.sample(0.01), Motion::visible());
    }
}
