//! Hero section: name, tagline, call to action.
//!
//! The hero is not scroll-gated; its entrance plays once, shortly after the
//! preloader hands over. Title, subtitle, and call-to-action overlap with
//! negative offsets, and a decorative terminal panel slides in from the right.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap;
use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::{fx, Theme};

// Timeline targets
const TITLE: usize = 0;
const SUBTITLE: usize = 1;
const CTA: usize = 2;
const PANEL: usize = 3;

/// Delay before the hero entrance begins, in seconds.
const START_DELAY_SECS: f32 = 0.3;

/// Minimum hero height so the next section starts below the first fold.
const MIN_LINES: usize = 30;

/// Hero section state.
#[derive(Debug)]
pub struct HeroSection {
    /// Entrance timeline, played once by the page root
    pub timeline: Timeline,
}

impl HeroSection {
    /// Builds the hero with its entrance choreography (paused).
    #[must_use]
    pub fn new() -> Self {
        let reveal = |dx: f32, duration: f32| {
            Tween::new(
                Motion::hidden().with_dx(dx),
                Motion::visible(),
                duration,
                Ease::PowerOut,
            )
        };
        let panel_in = Tween::new(
            Motion::hidden().with_dx(24.0).with_scale(0.8),
            Motion::visible(),
            1.5,
            Ease::PowerOut,
        );

        let timeline = Timeline::builder()
            .step(TITLE, reveal(8.0, 1.2), StepStart::At(START_DELAY_SECS))
            .step(SUBTITLE, reveal(8.0, 1.0), StepStart::Relative(-0.6))
            .step(CTA, reveal(8.0, 0.8), StepStart::Relative(-0.4))
            .step(PANEL, panel_in, StepStart::Relative(-1.0))
            .build();

        Self { timeline }
    }

    /// Renders the hero as page lines with the current reveal state applied.
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let mut rows: Vec<(usize, Line<'static>)> = Vec::new();
        let indent = "    ";

        for _ in 0..4 {
            rows.push((TITLE, Line::default()));
        }

        rows.push((
            TITLE,
            Line::from(vec![
                Span::raw(indent),
                Span::styled("Hi, I'm ", Style::default().fg(theme.text)),
                Span::styled(
                    content.profile.name.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        rows.push((
            TITLE,
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    content.profile.role.clone(),
                    Style::default()
                        .fg(theme.text_secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        rows.push((SUBTITLE, Line::default()));

        let body_width = width.saturating_sub(8).min(64);
        for text in wrap(&content.profile.tagline, body_width) {
            rows.push((
                SUBTITLE,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(text, Style::default().fg(theme.text_secondary)),
                ]),
            ));
        }

        rows.push((CTA, Line::default()));
        rows.push((
            CTA,
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    "[ Hire Me → ]",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ));

        rows.push((PANEL, Line::default()));
        let art_indent = " ".repeat(usize::from(width.saturating_sub(34).max(4)) / 2);
        let panel_style = Style::default().fg(theme.primary);
        let art = [
            "╭──────────────────────────╮",
            "│  ● ◦ ◦            tty:1  │",
            "│  $ cargo run --release   │",
            "│  rust · tui · motion     │",
            "╰──────────────────────────╯",
        ];
        for row in art {
            rows.push((
                PANEL,
                Line::from(vec![
                    Span::raw(art_indent.clone()),
                    Span::styled(row, panel_style),
                ]),
            ));
        }

        while rows.len() < MIN_LINES - 1 {
            rows.push((PANEL, Line::default()));
        }
        rows.push((
            SUBTITLE,
            Line::from(vec![
                Span::raw(indent),
                Span::styled("▼ scroll to explore", Style::default().fg(theme.text_muted)),
            ]),
        ));

        rows.into_iter()
            .enumerate()
            .map(|(i, (target, line))| {
                fx::reveal_line(line, &self.timeline.sample(target), i, theme)
            })
            .collect()
    }
}

impl Default for HeroSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_hidden_before_start() {
        let hero = HeroSection::new();
        let content = Content::default();
        let theme = Theme::dark();
        let lines = hero.lines(80, &content, &theme);
        // Nothing has played: no visible glyphs from the title.
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(!text.contains(&content.profile.name));
    }

    #[test]
    fn test_hero_visible_after_play() {
        let mut hero = HeroSection::new();
        hero.timeline.play();
        hero.timeline.finish();
        let content = Content::default();
        let theme = Theme::dark();
        let text: String = hero
            .lines(80, &content, &theme)
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains(&content.profile.name));
        assert!(text.contains("Hire Me"));
    }

    #[test]
    fn test_hero_min_height() {
        let hero = HeroSection::new();
        let content = Content::default();
        let theme = Theme::dark();
        assert!(hero.lines(80, &content, &theme).len() >= MIN_LINES);
    }
}
