//! Projects section: title plus a staggered grid of project cards.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap;
use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::{fx, Theme};

// Timeline targets
const TITLE: usize = 0;
const CARD_BASE: usize = 1;

/// Projects section state.
#[derive(Debug)]
pub struct ProjectsSection {
    /// Reveal timeline, gated on scroll position
    pub timeline: Timeline,
}

impl ProjectsSection {
    /// Builds the projects reveal for `project_count` cards (paused).
    #[must_use]
    pub fn new(project_count: usize) -> Self {
        let title_in = Tween::new(
            Motion::hidden().with_dx(6.0),
            Motion::visible(),
            1.0,
            Ease::PowerOut,
        );
        let card_in = Tween::new(
            Motion::hidden().with_dx(8.0).with_scale(0.8),
            Motion::visible(),
            0.8,
            Ease::PowerOut,
        );

        let cards: Vec<usize> = (0..project_count).map(|i| CARD_BASE + i).collect();
        let timeline = Timeline::builder()
            .step(TITLE, title_in, StepStart::After)
            .stagger(&cards, card_in, 0.2, StepStart::Relative(-0.4))
            .build();

        Self { timeline }
    }

    /// Renders the section as page lines with the current reveal state.
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let mut rows: Vec<(usize, Line<'static>)> = Vec::new();
        let indent = "    ";
        let body_width = width.saturating_sub(10).min(68);

        rows.push((TITLE, Line::default()));
        rows.push((
            TITLE,
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    "Featured ",
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Projects",
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
                    "A showcase of recent work and the tools behind it.",
                    Style::default().fg(theme.text_muted),
                ),
            ]),
        ));
        rows.push((TITLE, Line::default()));

        for (i, project) in content.projects.iter().enumerate() {
            let card = CARD_BASE + i;
            rows.push((
                card,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled("▍", Style::default().fg(theme.accent)),
                    Span::styled(
                        project.title.clone(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        if project.repo.is_some() { "  ↗" } else { "" },
                        Style::default().fg(theme.primary),
                    ),
                ]),
            ));
            for text in wrap(&project.description, body_width) {
                rows.push((
                    card,
                    Line::from(vec![
                        Span::raw(indent),
                        Span::raw("  "),
                        Span::styled(text, Style::default().fg(theme.text_secondary)),
                    ]),
                ));
            }
            let tags = project
                .technologies
                .iter()
                .map(|t| format!("⟨{t}⟩"))
                .collect::<Vec<_>>()
                .join(" ");
            rows.push((
                card,
                Line::from(vec![
                    Span::raw(indent),
                    Span::raw("  "),
                    Span::styled(tags, Style::default().fg(theme.text_muted)),
                ]),
            ));
            rows.push((card, Line::default()));
        }
        rows.push((TITLE, Line::default()));

        rows.into_iter()
            .enumerate()
            .map(|(i, (target, line))| {
                fx::reveal_line(line, &self.timeline.sample(target), i, theme)
            })
            .collect()
    }
}
