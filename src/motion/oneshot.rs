//! Fire-once completion signal.

/// Guards an "exactly once" completion contract.
///
/// The first call to [`OneShot::fire`] returns true; every later call returns
/// false, so repeated completion attempts (re-renders, duplicate callbacks)
/// cannot cause double side effects.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Creates an unfired signal.
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Fires the signal. Returns true only on the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }

    /// Whether the signal has already fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut signal = OneShot::new();
        assert!(!signal.has_fired());
        assert!(signal.fire());
        assert!(signal.has_fired());
        assert!(!signal.fire());
        assert!(!signal.fire());
    }
}
