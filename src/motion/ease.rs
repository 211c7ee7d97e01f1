//! Easing curves for reveal animations.

/// Easing curve applied to a tween's normalized time.
///
/// The quadratic curves match the feel of the classic `power2` family:
/// `PowerOut` decelerates into its resting state (entrances), `PowerIn`
/// accelerates away from it (exits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// Constant velocity
    Linear,
    /// Accelerating from zero velocity
    PowerIn,
    /// Decelerating to zero velocity
    #[default]
    PowerOut,
    /// Accelerating then decelerating
    PowerInOut,
}

impl Ease {
    /// Maps normalized time `t` through the curve. Input is clamped to [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerIn => t * t,
            Self::PowerOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::PowerInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}
