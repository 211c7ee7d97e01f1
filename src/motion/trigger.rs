//! Scroll trigger gates: play/reverse rules keyed to scroll position.
//!
//! A gate is a two-state machine bound to one section. Crossing the viewport
//! threshold while scrolling down plays the section's reveal; scrolling back
//! out reverses it. Gates are independent of each other and independent of
//! any particular animation engine: they only report crossings.

use std::collections::HashMap;

/// Gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Reveal not yet played (or previously reversed)
    Armed,
    /// Reveal completed forward
    Played,
}

/// A threshold crossing observed by [`Gate::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The element entered the viewport threshold; play the reveal
    Entered,
    /// The element left back out; reverse the reveal
    Left,
}

/// Scroll trigger gate for one element.
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    threshold: f32,
    state: GateState,
}

impl Gate {
    /// Creates an armed gate. `threshold` is the fraction of the viewport
    /// height below which the element's top must rise to count as in view
    /// (0.8 = top of element reaches 80% down the viewport).
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: GateState::Armed,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Feeds the current scroll position and reports a crossing, if any.
    ///
    /// `element_top` is the element's absolute page line, `scroll` the current
    /// scroll offset in lines, `viewport` the visible height in lines. The
    /// state always matches the last crossing direction, so rapid oscillation
    /// across the threshold cannot desynchronize the gate.
    pub fn update(&mut self, element_top: f32, scroll: f32, viewport: u16) -> Option<Crossing> {
        let in_view = element_top < scroll + f32::from(viewport) * self.threshold;
        match (self.state, in_view) {
            (GateState::Armed, true) => {
                self.state = GateState::Played;
                Some(Crossing::Entered)
            }
            (GateState::Played, false) => {
                self.state = GateState::Armed;
                Some(Crossing::Left)
            }
            _ => None,
        }
    }
}

/// Handle identifying an armed gate within a [`TriggerRegistry`].
pub type GateHandle = usize;

/// Page-scoped set of active scroll trigger registrations.
///
/// Owned by the page context and passed to components explicitly, so the
/// lifecycle (arm on mount, release on teardown) stays visible and testable.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    gates: HashMap<GateHandle, Gate>,
}

impl TriggerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a gate under the given handle, replacing any previous registration.
    pub fn arm(&mut self, handle: GateHandle, threshold: f32) {
        self.gates.insert(handle, Gate::new(threshold));
    }

    /// Releases one registration so it stops observing scroll position.
    pub fn release(&mut self, handle: GateHandle) {
        self.gates.remove(&handle);
    }

    /// Releases every registration (page teardown).
    pub fn release_all(&mut self) {
        self.gates.clear();
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether no registrations remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Updates one gate with the current scroll position.
    ///
    /// Returns the crossing, if the threshold was crossed. Unknown handles are
    /// a silent no-op.
    pub fn update(
        &mut self,
        handle: GateHandle,
        element_top: f32,
        scroll: f32,
        viewport: u16,
    ) -> Option<Crossing> {
        self.gates
            .get_mut(&handle)
            .and_then(|gate| gate.update(element_top, scroll, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_leave() {
        let mut gate = Gate::new(0.8);
        // Section at line 100, viewport 40 lines: threshold line = scroll + 32.
        assert_eq!(gate.update(100.0, 0.0, 40), None);
        assert_eq!(gate.state(), GateState::Armed);

        assert_eq!(gate.update(100.0, 70.0, 40), Some(Crossing::Entered));
        assert_eq!(gate.state(), GateState::Played);

        // Still in view: no repeated crossing.
        assert_eq!(gate.update(100.0, 90.0, 40), None);

        assert_eq!(gate.update(100.0, 10.0, 40), Some(Crossing::Left));
        assert_eq!(gate.state(), GateState::Armed);
    }

    #[test]
    fn test_exactly_one_transition_per_crossing() {
        let mut gate = Gate::new(0.8);
        let mut crossings = 0;
        for scroll in [0.0, 20.0, 40.0, 69.0, 70.0, 80.0, 100.0] {
            if gate.update(100.0, scroll, 40).is_some() {
                crossings += 1;
            }
        }
        assert_eq!(crossings, 1);
    }

    #[test]
    fn test_oscillation_matches_last_direction() {
        let mut gate = Gate::new(0.5);
        // Threshold line for a 20-line viewport: scroll + 10. Element at 50.
        for _ in 0..10 {
            assert_eq!(gate.update(50.0, 45.0, 20), Some(Crossing::Entered));
            assert_eq!(gate.update(50.0, 35.0, 20), Some(Crossing::Left));
        }
        assert_eq!(gate.state(), GateState::Armed);
        assert_eq!(gate.update(50.0, 45.0, 20), Some(Crossing::Entered));
        assert_eq!(gate.state(), GateState::Played);
    }

    #[test]
    fn test_registry_arm_and_release() {
        let mut registry = TriggerRegistry::new();
        registry.arm(0, 0.8);
        registry.arm(1, 0.9);
        assert_eq!(registry.len(), 2);

        registry.release(0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.update(0, 0.0, 100.0, 40), None);

        registry.release_all();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_gates_are_independent() {
        let mut registry = TriggerRegistry::new();
        registry.arm(0, 0.8);
        registry.arm(1, 0.8);

        // Only the first section scrolls into view.
        assert_eq!(registry.update(0, 30.0, 10.0, 40), Some(Crossing::Entered));
        assert_eq!(registry.update(1, 200.0, 10.0, 40), None);
    }
}
