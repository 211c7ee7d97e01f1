//! Footer section: brand line, quick links, socials, copyright.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::Anchor;
use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::{fx, Theme};

const CONTENT: usize = 0;

/// Footer state: one block revealed as a whole.
#[derive(Debug)]
pub struct FooterSection {
    /// Reveal timeline, gated on scroll position
    pub timeline: Timeline,
}

impl FooterSection {
    /// Builds the footer reveal (paused).
    #[must_use]
    pub fn new() -> Self {
        let fade_in = Tween::new(Motion::hidden(), Motion::visible(), 1.0, Ease::PowerOut);
        let timeline = Timeline::builder()
            .step(CONTENT, fade_in, StepStart::After)
            .build();
        Self { timeline }
    }

    /// Renders the section as page lines with the current reveal state.
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let indent = "    ";
        let rule_width = usize::from(width.saturating_sub(8).min(64));

        let mut links = Vec::new();
        links.push(Span::raw(indent));
        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            if i > 0 {
                links.push(Span::styled("  ·  ", Style::default().fg(theme.text_muted)));
            }
            links.push(Span::styled(
                anchor.label(),
                Style::default().fg(theme.text_secondary),
            ));
        }

        let mut socials = Vec::new();
        socials.push(Span::raw(indent));
        for (i, social) in content.socials.iter().enumerate() {
            if i > 0 {
                socials.push(Span::styled("   ", Style::default()));
            }
            socials.push(Span::styled(
                social.label.clone(),
                Style::default().fg(theme.text_muted),
            ));
        }

        let rows: Vec<Line<'static>> = vec![
            Line::default(),
            Line::from(vec![
                Span::raw(indent),
                Span::styled("─".repeat(rule_width), Style::default().fg(theme.surface)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    content.profile.name.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ·  {}", content.profile.role),
                    Style::default().fg(theme.text_muted),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    content.profile.email.clone(),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
            Line::from(links),
            Line::from(socials),
            Line::default(),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    "Made with ♥ and lots of coffee",
                    Style::default().fg(theme.text_muted),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    format!("© 2026 {}. All rights reserved.", content.profile.name),
                    Style::default().fg(theme.text_muted),
                ),
            ]),
            Line::default(),
        ];

        let motion = self.timeline.sample(CONTENT);
        rows.into_iter()
            .enumerate()
            .map(|(i, line)| fx::reveal_line(line, &motion, i, theme))
            .collect()
    }
}

impl Default for FooterSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_stable_during_reveal() {
        let content = Content::default();
        let theme = Theme::dark();
        let mut footer = FooterSection::new();
        let hidden = footer.lines(80, &content, &theme).len();
        footer.timeline.play();
        footer.timeline.advance(0.4);
        let mid = footer.lines(80, &content, &theme).len();
        footer.timeline.finish();
        let shown = footer.lines(80, &content, &theme).len();
        assert_eq!(hidden, mid);
        assert_eq!(mid, shown);
    }

    #[test]
    fn test_brand_visible_when_played() {
        let content = Content::default();
        let theme = Theme::dark();
        let mut footer = FooterSection::new();
        footer.timeline.play();
        footer.timeline.finish();
        let text: String = footer
            .lines(80, &content, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains(&content.profile.name));
        assert!(text.contains("All rights reserved"));
    }
}
