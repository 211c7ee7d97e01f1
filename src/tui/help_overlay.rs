//! Help overlay widget listing all keyboard shortcuts.
//!
//! Opened with '?' from the page; any key closes it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    fn section(title: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn entry(key: &'static str, action: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(theme.accent)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Self::section(" Navigation", theme),
            Self::entry("j/k, ↑/↓", "Scroll one line", theme),
            Self::entry("PgUp/PgDn", "Scroll one screen", theme),
            Self::entry("g / G", "Jump to top / bottom", theme),
            Self::entry("1-4", "Jump to section", theme),
            Self::entry("Tab/S-Tab", "Cycle nav links", theme),
            Self::entry("Enter", "Open selected link", theme),
            Line::default(),
            Self::section(" Menu", theme),
            Self::entry("m", "Toggle menu", theme),
            Self::entry("Esc", "Close menu", theme),
            Line::default(),
            Self::section(" Contact form", theme),
            Self::entry("i", "Focus the form", theme),
            Self::entry("Tab", "Next field", theme),
            Self::entry("Enter", "Send (in Message)", theme),
            Self::entry("Esc", "Leave form", theme),
            Line::default(),
            Self::section(" System", theme),
            Self::entry("?", "Toggle this help", theme),
            Self::entry("q", "Quit", theme),
            Line::default(),
        ]
    }

    /// Render the centered help popup over `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let content = Self::content(theme);
        #[allow(clippy::cast_possible_truncation)]
        let height = (content.len() as u16 + 2).min(area.height);
        let width = 44.min(area.width);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        f.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        f.render_widget(Paragraph::new(content).block(block), popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_covers_core_keys() {
        let theme = Theme::dark();
        let text: String = HelpOverlay::content(&theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        for key in ["j/k", "m", "?", "q", "Tab"] {
            assert!(text.contains(key), "missing hint for {key}");
        }
    }
}
