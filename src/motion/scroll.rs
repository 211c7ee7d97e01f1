//! Smooth scrolling with exponential ease-out.
//!
//! The scroll position is kept as a fraction so the viewport glides toward its
//! target a few rows per frame with visible deceleration, instead of snapping.
//! Anchor jumps and key scrolling both move the target; the animator settles
//! the visible offset each tick.

/// Eased scroll animator over page lines.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Current fractional offset in lines
    offset: f64,
    /// Target offset in lines
    target: f64,
    /// Settle rate: fraction of the remaining distance covered per second
    speed: f64,
}

impl SmoothScroll {
    /// Creates an animator at offset zero. `speed` is the fraction of the
    /// remaining distance covered per second; values around 6-10 feel snappy
    /// at 30 fps.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            speed: speed.clamp(0.5, 30.0),
        }
    }

    /// Sets the scroll target, clamped to `[0, max]`.
    pub fn scroll_to(&mut self, target: f64, max: f64) {
        self.target = target.clamp(0.0, max.max(0.0));
    }

    /// Moves the target by a delta in lines, clamped to `[0, max]`.
    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        self.scroll_to(self.target + delta, max);
    }

    /// Jumps both offset and target instantly (reduced motion, resize clamp).
    pub fn jump_to(&mut self, target: f64, max: f64) {
        self.target = target.clamp(0.0, max.max(0.0));
        self.offset = self.target;
    }

    /// Decays the offset toward the target. Call once per frame with the
    /// elapsed seconds.
    pub fn tick(&mut self, dt: f32) {
        let rate = (self.speed * f64::from(dt)).min(1.0);
        self.offset += (self.target - self.offset) * rate;
        if (self.target - self.offset).abs() < 0.4 {
            self.offset = self.target;
        }
    }

    /// Current fractional offset in lines.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Current offset rounded to whole lines for rendering.
    #[must_use]
    pub fn line(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    /// Target offset in lines.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// True while visible motion remains.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.target - self.offset).abs() > f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_on_target() {
        let mut scroll = SmoothScroll::new(8.0);
        scroll.scroll_to(100.0, 500.0);
        for _ in 0..200 {
            scroll.tick(0.033);
        }
        assert!(!scroll.is_animating());
        assert_eq!(scroll.line(), 100);
    }

    #[test]
    fn test_decelerates() {
        let mut scroll = SmoothScroll::new(8.0);
        scroll.scroll_to(100.0, 500.0);
        scroll.tick(0.033);
        let first = scroll.offset();
        for _ in 0..10 {
            scroll.tick(0.033);
        }
        let before = scroll.offset();
        scroll.tick(0.033);
        let late_step = scroll.offset() - before;
        assert!(first > late_step, "steps shrink as the target nears");
    }

    #[test]
    fn test_clamps_to_bounds() {
        let mut scroll = SmoothScroll::new(8.0);
        scroll.scroll_by(-50.0, 100.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.scroll_by(500.0, 100.0);
        assert_eq!(scroll.target(), 100.0);
    }

    #[test]
    fn test_jump_is_instant() {
        let mut scroll = SmoothScroll::new(8.0);
        scroll.jump_to(42.0, 100.0);
        assert_eq!(scroll.line(), 42);
        assert!(!scroll.is_animating());
    }
}
