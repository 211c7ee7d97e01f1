//! Component trait pattern for TUI components.
//!
//! Components are self-contained UI elements that manage their own state and
//! animation clocks, handle keyboard input, and emit events to the parent.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered, ticked, and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the
    /// parent. Returns `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Advance the component's animation clocks by `dt` seconds.
    ///
    /// Returns `Some(Event)` when time passing produced something the parent
    /// must react to (e.g. a completed one-shot sequence).
    fn tick(&mut self, dt: f32) -> Option<Self::Event> {
        let _ = dt;
        None
    }

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}
