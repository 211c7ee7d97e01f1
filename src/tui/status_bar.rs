//! Status bar widget showing contextual key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Theme;

/// Input context the bar tailors its hints to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusContext {
    /// Preloader still on screen
    Loading,
    /// Browsing the page
    Page,
    /// Menu panel open
    Menu,
    /// Contact form focused
    Form,
    /// Help overlay open
    Help,
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    fn hints(context: StatusContext) -> &'static [(&'static str, &'static str)] {
        match context {
            StatusContext::Loading => &[("q", "Quit")],
            StatusContext::Page => &[
                ("j/k", "Scroll"),
                ("Tab", "Links"),
                ("Enter", "Go"),
                ("i", "Form"),
                ("m", "Menu"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            StatusContext::Menu => &[("j/k", "Move"), ("Enter", "Go"), ("Esc", "Close")],
            StatusContext::Form => &[
                ("Tab", "Next field"),
                ("Enter", "Send (in Message)"),
                ("Esc", "Leave form"),
            ],
            StatusContext::Help => &[("any key", "Close")],
        }
    }

    /// Render the one-line status bar for the given context.
    pub fn render(f: &mut Frame, area: Rect, context: StatusContext, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in Self::hints(context).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_secondary),
            ));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
        f.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_hints() {
        for context in [
            StatusContext::Loading,
            StatusContext::Page,
            StatusContext::Menu,
            StatusContext::Form,
            StatusContext::Help,
        ] {
            assert!(!StatusBar::hints(context).is_empty());
        }
    }

    #[test]
    fn test_page_context_mentions_help() {
        let hints = StatusBar::hints(StatusContext::Page);
        assert!(hints.iter().any(|(key, _)| *key == "?"));
    }
}
