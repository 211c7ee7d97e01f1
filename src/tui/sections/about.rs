//! About section: portrait, bio, and skill cards.
//!
//! Portrait block and body copy slide in from opposite sides; the skill cards
//! then pop in with a per-card stagger. The whole choreography is driven by
//! this section's scroll trigger gate.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap;
use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::{fx, Theme};

// Timeline targets
const IMAGE: usize = 0;
const BODY: usize = 1;
const SKILL_BASE: usize = 2;

/// About section state.
#[derive(Debug)]
pub struct AboutSection {
    /// Reveal timeline, gated on scroll position
    pub timeline: Timeline,
}

impl AboutSection {
    /// Builds the about reveal for `skill_count` skill cards (paused).
    #[must_use]
    pub fn new(skill_count: usize) -> Self {
        let image_in = Tween::new(
            Motion::hidden().with_dx(-12.0),
            Motion::visible(),
            1.2,
            Ease::PowerOut,
        );
        let body_in = Tween::new(
            Motion::hidden().with_dx(12.0),
            Motion::visible(),
            1.2,
            Ease::PowerOut,
        );
        let card_in = Tween::new(
            Motion::hidden().with_dx(4.0).with_scale(0.8),
            Motion::visible(),
            0.6,
            Ease::PowerOut,
        );

        let skills: Vec<usize> = (0..skill_count).map(|i| SKILL_BASE + i).collect();
        let timeline = Timeline::builder()
            .step(IMAGE, image_in, StepStart::After)
            .step(BODY, body_in, StepStart::Relative(-0.8))
            .stagger(&skills, card_in, 0.1, StepStart::Relative(-0.6))
            .build();

        Self { timeline }
    }

    /// Renders the section as page lines with the current reveal state.
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let mut rows: Vec<(usize, Line<'static>)> = Vec::new();
        let indent = "    ";
        let body_width = width.saturating_sub(8).min(72);

        rows.push((BODY, Line::default()));
        rows.push((
            BODY,
            Line::from(vec![
                Span::raw(indent),
                Span::styled("About ", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
                Span::styled(
                    "Me",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        rows.push((BODY, Line::default()));

        let portrait_style = Style::default().fg(theme.accent);
        let portrait = [
            "╭─────────╮",
            "│  ◠   ◠  │",
            "│    ▿    │",
            "│  ╰───╯  │",
            "╰─────────╯",
        ];
        for row in portrait {
            rows.push((
                IMAGE,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(row, portrait_style),
                ]),
            ));
        }
        rows.push((IMAGE, Line::default()));

        for paragraph in &content.profile.bio {
            for text in wrap(paragraph, body_width) {
                rows.push((
                    BODY,
                    Line::from(vec![
                        Span::raw(indent),
                        Span::styled(text, Style::default().fg(theme.text_secondary)),
                    ]),
                ));
            }
            rows.push((BODY, Line::default()));
        }

        rows.push((
            BODY,
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    "What I Do",
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        rows.push((BODY, Line::default()));

        for (i, skill) in content.skills.iter().enumerate() {
            rows.push((
                SKILL_BASE + i,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled("▪ ", Style::default().fg(theme.primary)),
                    Span::styled(skill.name.clone(), Style::default().fg(theme.text)),
                ]),
            ));
        }
        rows.push((BODY, Line::default()));
        rows.push((BODY, Line::default()));

        rows.into_iter()
            .enumerate()
            .map(|(i, (target, line))| {
                fx::reveal_line(line, &self.timeline.sample(target), i, theme)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_contains_all_skills_when_played() {
        let content = Content::default();
        let mut about = AboutSection::new(content.skills.len());
        about.timeline.play();
        about.timeline.finish();
        let theme = Theme::dark();
        let text: String = about
            .lines(100, &content, &theme)
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        for skill in &content.skills {
            assert!(text.contains(&skill.name), "missing skill {}", skill.name);
        }
    }

    #[test]
    fn test_stagger_reveals_cards_in_order() {
        let content = Content::default();
        let mut about = AboutSection::new(content.skills.len());
        about.timeline.play();
        // Advance into the card stagger window.
        for _ in 0..40 {
            about.timeline.advance(0.033);
        }
        let first = about.timeline.sample(SKILL_BASE).alpha;
        let last = about
            .timeline
            .sample(SKILL_BASE + content.skills.len() - 1)
            .alpha;
        assert!(first >= last, "first card should lead the stagger");
    }
}
