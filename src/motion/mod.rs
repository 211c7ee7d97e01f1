//! Animation engine for entrance reveals and scroll choreography.
//!
//! This module is UI-framework agnostic: it deals in clocks, easing curves,
//! and abstract visual states. The TUI layer maps the sampled states onto
//! terminal cells (color fades, glyph dissolves, column shifts).

pub mod ease;
pub mod oneshot;
pub mod scroll;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use ease::Ease;
pub use oneshot::OneShot;
pub use scroll::SmoothScroll;
pub use timeline::{StepStart, Timeline, TimelineBuilder};
pub use trigger::{Crossing, Gate, GateState, TriggerRegistry};
pub use tween::{Motion, Tween};
