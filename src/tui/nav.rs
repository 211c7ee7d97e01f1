//! Top navigation bar and the slide-in menu panel.
//!
//! The bar fades in once loading completes; the menu slides in from the
//! right edge as an overlay. Activating a link always leaves the menu
//! closed, whichever surface the activation came from.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::sections::Anchor;
use crate::tui::Theme;

const BAR: usize = 0;
const PANEL: usize = 0;

const ENTRANCE_DELAY_SECS: f32 = 0.3;
const ENTRANCE_SECS: f32 = 1.0;
const PANEL_SLIDE_SECS: f32 = 0.5;
const PANEL_WIDTH: u16 = 26;

/// Events emitted by the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A link was activated and the page should scroll to the anchor.
    Activate(Anchor),
}

/// Navigation state: entrance fade, link selection, and the menu panel.
#[derive(Debug)]
pub struct Navigation {
    entrance: Timeline,
    panel: Timeline,
    menu_open: bool,
    selected: usize,
    reduced_motion: bool,
}

impl Navigation {
    /// Creates the navigation with both timelines paused.
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        let fade_in = Tween::new(
            Motion::hidden(),
            Motion::visible(),
            ENTRANCE_SECS,
            Ease::PowerOut,
        );
        let entrance = Timeline::builder()
            .step(BAR, fade_in, StepStart::At(ENTRANCE_DELAY_SECS))
            .build();

        let slide_in = Tween::new(
            Motion::visible().with_dx(1.0),
            Motion::visible(),
            PANEL_SLIDE_SECS,
            Ease::PowerOut,
        );
        let panel = Timeline::builder().step(PANEL, slide_in, StepStart::After).build();

        Self {
            entrance,
            panel,
            menu_open: false,
            selected: 0,
            reduced_motion,
        }
    }

    /// Starts the bar's entrance fade. Called once loading completes.
    pub fn start_entrance(&mut self) {
        if self.reduced_motion {
            self.entrance.play();
            self.entrance.finish();
        } else {
            self.entrance.play();
        }
    }

    /// Whether the menu panel is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Currently selected link.
    #[must_use]
    pub fn selected_anchor(&self) -> Anchor {
        Anchor::ALL[self.selected.min(Anchor::ALL.len() - 1)]
    }

    /// Opens the menu panel.
    pub fn open_menu(&mut self) {
        self.menu_open = true;
        if self.reduced_motion {
            self.panel.play();
            self.panel.finish();
        } else {
            self.panel.play();
        }
    }

    /// Closes the menu panel.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        if self.reduced_motion {
            self.panel.rewind();
        } else {
            self.panel.reverse();
        }
    }

    /// Toggles the menu panel.
    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Select the next link.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Anchor::ALL.len();
    }

    /// Select the previous link.
    pub fn select_previous(&mut self) {
        self.selected = (self.selected + Anchor::ALL.len() - 1) % Anchor::ALL.len();
    }

    /// Handles keyboard input while the menu is open.
    ///
    /// Activating a link closes the menu before the event is returned, so the
    /// menu is never left open across a jump.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<NavEvent> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.select_previous();
                None
            }
            KeyCode::Enter => {
                let anchor = self.selected_anchor();
                self.close_menu();
                Some(NavEvent::Activate(anchor))
            }
            KeyCode::Esc | KeyCode::Char('m') => {
                self.close_menu();
                None
            }
            _ => None,
        }
    }

    /// Advances the entrance and panel timelines.
    pub fn tick(&mut self, dt: f32) {
        self.entrance.advance(dt);
        self.panel.advance(dt);
    }

    /// Panel slide progress in 0..=1 (0 fully retracted).
    #[must_use]
    pub fn panel_progress(&self) -> f32 {
        1.0 - self.panel.sample(PANEL).dx
    }

    fn bar_alpha(&self) -> f32 {
        self.entrance.sample(BAR).alpha
    }

    /// Renders the three-row navigation bar.
    pub fn render_bar(&self, f: &mut Frame, area: Rect, name: &str, theme: &Theme) {
        let alpha = self.bar_alpha();
        if alpha < 0.05 {
            return;
        }

        let mut spans = vec![Span::styled(
            format!("  {name}"),
            Style::default()
                .fg(theme.fade(theme.primary, alpha).unwrap_or(theme.primary))
                .add_modifier(Modifier::BOLD),
        )];

        let brand_width = name.len() + 2;
        let links_width: usize = Anchor::ALL
            .iter()
            .map(|a| a.label().len() + 4)
            .sum::<usize>()
            + 2;
        let pad = usize::from(area.width)
            .saturating_sub(brand_width)
            .saturating_sub(links_width);
        spans.push(Span::raw(" ".repeat(pad)));

        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(theme.fade(theme.accent, alpha).unwrap_or(theme.accent))
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
                    .fg(theme
                        .fade(theme.text_secondary, alpha)
                        .unwrap_or(theme.text_secondary))
            };
            spans.push(Span::styled(format!("  {}  ", anchor.label()), style));
        }

        let bar = Paragraph::new(vec![Line::default(), Line::from(spans), Line::default()])
            .style(Style::default().bg(theme.background));
        f.render_widget(bar, area);
    }

    /// Renders the slide-in menu panel over the right edge of `area`.
    pub fn render_menu(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let progress = self.panel_progress();
        if progress < 0.05 {
            return;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let visible = (f32::from(PANEL_WIDTH) * progress).round() as u16;
        let visible = visible.min(area.width);
        if visible == 0 {
            return;
        }
        let panel_area = Rect {
            x: area.x + area.width - visible,
            y: area.y,
            width: visible,
            height: area.height.min(u16::try_from(Anchor::ALL.len()).unwrap_or(4) + 4),
        };

        let mut lines = vec![Line::default()];
        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            let (marker, style) = if i == self.selected {
                (
                    "▸ ",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.text))
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(anchor.label(), style),
            ]));
        }

        f.render_widget(Clear, panel_area);
        let panel = Paragraph::new(lines)
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(panel, panel_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_activation_closes_menu() {
        for (i, expected) in Anchor::ALL.iter().enumerate() {
            let mut nav = Navigation::new(false);
            nav.open_menu();
            for _ in 0..i {
                nav.handle_input(key(KeyCode::Down));
            }
            let event = nav.handle_input(key(KeyCode::Enter));
            assert_eq!(event, Some(NavEvent::Activate(*expected)));
            assert!(!nav.is_menu_open());
        }
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut nav = Navigation::new(false);
        nav.open_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.handle_input(key(KeyCode::Esc)), None);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_selection_wraps() {
        let mut nav = Navigation::new(false);
        assert_eq!(nav.selected_anchor(), Anchor::Home);
        nav.select_previous();
        assert_eq!(nav.selected_anchor(), Anchor::Contact);
        nav.select_next();
        assert_eq!(nav.selected_anchor(), Anchor::Home);
    }

    #[test]
    fn test_panel_slides_and_retracts() {
        let mut nav = Navigation::new(false);
        assert!(nav.panel_progress() < 0.05);
        nav.open_menu();
        for _ in 0..30 {
            nav.tick(0.033);
        }
        assert!(nav.panel_progress() > 0.95);
        nav.close_menu();
        for _ in 0..30 {
            nav.tick(0.033);
        }
        assert!(nav.panel_progress() < 0.05);
    }

    #[test]
    fn test_reduced_motion_snaps_panel() {
        let mut nav = Navigation::new(true);
        nav.open_menu();
        assert!(nav.panel_progress() > 0.95);
        nav.close_menu();
        assert!(nav.panel_progress() < 0.05);
    }
}
