//! Preloader overlay: one-shot startup sequence.
//!
//! Plays a fixed choreography exactly once: the name and role fade in
//! staggered, a progress bar fills from 0 to 100% with a synchronized integer
//! percent label, the texts fade back out, and finally the whole overlay fades
//! and shrinks before signalling completion. Scrolling stays locked for the
//! overlay's entire lifetime; the page root unlocks it when the completion
//! event arrives.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Gauge, Paragraph},
    Frame,
};

use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::component::Component;
use crate::tui::{fx, Theme};

// Timeline targets
const TITLE: usize = 0;
const SUBTITLE: usize = 1;
const BAR: usize = 2;
const OVERLAY: usize = 3;

// Choreography timings in seconds
const TEXT_IN_SECS: f32 = 1.0;
const TEXT_STAGGER_SECS: f32 = 0.2;
const FILL_SECS: f32 = 2.5;
const TEXT_OUT_SECS: f32 = 0.8;
const OVERLAY_OUT_SECS: f32 = 1.0;

/// Event emitted by the preloader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderEvent {
    /// The full sequence finished; the page may reveal its content
    Complete,
}

/// One-shot preloader overlay.
#[derive(Debug)]
pub struct Preloader {
    timeline: Timeline,
    reduced_motion: bool,
    title: String,
    subtitle: String,
}

impl Preloader {
    /// Creates the preloader and starts its sequence.
    #[must_use]
    pub fn new(content: &Content, reduced_motion: bool) -> Self {
        let slide_in = Tween::new(
            Motion::hidden().with_dx(6.0),
            Motion::visible(),
            TEXT_IN_SECS,
            Ease::PowerOut,
        );
        let fill = Tween::new(
            Motion::visible().with_scale(0.0),
            Motion::visible(),
            FILL_SECS,
            Ease::PowerOut,
        );
        let fade_out = Tween::new(
            Motion::visible(),
            Motion::hidden().with_dx(-6.0),
            TEXT_OUT_SECS,
            Ease::PowerIn,
        );
        let overlay_out = Tween::new(
            Motion::visible(),
            Motion::visible().with_alpha(0.0).with_scale(0.9),
            OVERLAY_OUT_SECS,
            Ease::PowerInOut,
        );

        let mut timeline = Timeline::builder()
            .stagger(
                &[TITLE, SUBTITLE],
                slide_in,
                TEXT_STAGGER_SECS,
                StepStart::After,
            )
            .step(BAR, fill, StepStart::Relative(-0.5))
            .step(TITLE, fade_out, StepStart::Relative(0.3))
            .step(SUBTITLE, fade_out, StepStart::Relative(-TEXT_OUT_SECS))
            .step(OVERLAY, overlay_out, StepStart::Relative(-0.4))
            .build();
        timeline.play();

        Self {
            timeline,
            reduced_motion,
            title: content.profile.name.clone(),
            subtitle: content.profile.role.to_uppercase(),
        }
    }

    /// Current integer progress percentage in [0, 100].
    ///
    /// Synchronized to the fill tween's eased progress, so it is monotone
    /// during the forward phase and sits at exactly 100 before the fade-out
    /// steps begin.
    #[must_use]
    pub fn percent(&self) -> u8 {
        (self.timeline.step_progress(BAR) * 100.0).round() as u8
    }

    /// Whether the sequence has run to its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished()
    }

    /// Cancels the sequence (page teardown). Completion will not fire.
    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }
}

impl Component for Preloader {
    type Event = PreloaderEvent;

    fn handle_input(&mut self, _key: KeyEvent) -> Option<Self::Event> {
        // Interaction is blocked while the preloader runs.
        None
    }

    fn tick(&mut self, dt: f32) -> Option<Self::Event> {
        if self.reduced_motion {
            return self.timeline.finish().then_some(PreloaderEvent::Complete);
        }
        self.timeline
            .advance(dt)
            .then_some(PreloaderEvent::Complete)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let overlay = self.timeline.sample(OVERLAY);

        // The final step shrinks the overlay box around its center.
        let width = (f32::from(area.width) * overlay.scale).round() as u16;
        let height = (f32::from(area.height) * overlay.scale).round() as u16;
        let boxed = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width: width.max(1),
            height: height.max(1),
        };

        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );
        if boxed.width < 8 || boxed.height < 6 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // title
                Constraint::Length(1), // subtitle
                Constraint::Length(1),
                Constraint::Length(1), // progress bar
                Constraint::Fill(2),
            ])
            .split(boxed);

        let mut title = self.timeline.sample(TITLE);
        let mut subtitle = self.timeline.sample(SUBTITLE);
        title.alpha *= overlay.alpha;
        subtitle.alpha *= overlay.alpha;

        let title_line = Line::styled(
            self.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
        let subtitle_line =
            Line::styled(self.subtitle.clone(), Style::default().fg(theme.text_secondary));
        f.render_widget(
            Paragraph::new(fx::reveal_line(title_line, &title, 0, theme))
                .alignment(Alignment::Center),
            rows[1],
        );
        f.render_widget(
            Paragraph::new(fx::reveal_line(subtitle_line, &subtitle, 1, theme))
                .alignment(Alignment::Center),
            rows[2],
        );

        // Progress bar, centered at half width.
        let bar_area = rows[4];
        let bar_width = (bar_area.width / 2).max(10).min(bar_area.width);
        let bar = Rect {
            x: bar_area.x + (bar_area.width - bar_width) / 2,
            y: bar_area.y,
            width: bar_width,
            height: 1,
        };
        let ratio = f64::from(self.timeline.step_progress(BAR)).clamp(0.0, 1.0);
        let gauge_fg = fx::fade_style(Style::default().fg(theme.primary), overlay.alpha, theme);
        let gauge = Gauge::default()
            .gauge_style(gauge_fg)
            .style(Style::default().bg(theme.background))
            .ratio(ratio)
            .label(format!("{}%", self.percent()));
        f.render_widget(gauge, bar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_preloader(reduced: bool) -> Preloader {
        Preloader::new(&Content::default(), reduced)
    }

    fn drive(preloader: &mut Preloader, seconds: f32) -> usize {
        let mut completions = 0;
        let steps = (seconds / 0.033).ceil() as usize;
        for _ in 0..steps {
            if preloader.tick(0.033) == Some(PreloaderEvent::Complete) {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn test_percent_monotone_and_bounded() {
        let mut preloader = new_preloader(false);
        let mut prev = 0;
        for _ in 0..400 {
            preloader.tick(0.033);
            let pct = preloader.percent();
            assert!(pct <= 100);
            assert!(pct >= prev, "percent regressed: {prev} -> {pct}");
            prev = pct;
        }
        assert_eq!(prev, 100);
    }

    #[test]
    fn test_reaches_100_before_finish() {
        let mut preloader = new_preloader(false);
        // Past the fill step but before the overlay fade ends.
        drive(&mut preloader, 4.0);
        assert_eq!(preloader.percent(), 100);
        assert!(!preloader.is_finished());
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut preloader = new_preloader(false);
        let completions = drive(&mut preloader, 12.0);
        assert_eq!(completions, 1);
        assert!(preloader.is_finished());
    }

    #[test]
    fn test_reduced_motion_completes_immediately() {
        let mut preloader = new_preloader(true);
        assert_eq!(preloader.tick(0.033), Some(PreloaderEvent::Complete));
        assert_eq!(preloader.percent(), 100);
        assert_eq!(preloader.tick(0.033), None);
    }

    #[test]
    fn test_cancel_suppresses_completion() {
        let mut preloader = new_preloader(false);
        preloader.tick(0.033);
        preloader.cancel();
        assert_eq!(drive(&mut preloader, 12.0), 0);
    }
}
