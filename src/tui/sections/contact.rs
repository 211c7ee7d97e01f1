//! Contact section: controlled form plus social links.
//!
//! The form is a placeholder for a future submission service: the
//! [`Submitter`] trait is the seam, and the shipped [`SimulatedSubmitter`]
//! completes after a fixed delay without sending anything. There are no retry
//! or error semantics: submission either starts (all fields valid) or is
//! blocked by validation.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap;
use crate::constants::SUBMIT_DELAY_SECS;
use crate::content::Content;
use crate::motion::{Ease, Motion, StepStart, Timeline, Tween};
use crate::tui::{fx, Theme};

// Timeline targets
const FORM: usize = 0;
const SOCIAL_BASE: usize = 1;

/// An outbound contact message handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

/// External collaborator that delivers contact messages.
///
/// `begin` starts a delivery and returns the delay in seconds after which it
/// completes. Implementations must not fail: the current design has no error
/// path, by intent.
pub trait Submitter {
    /// Starts a delivery, returning the completion delay in seconds.
    fn begin(&mut self, message: &OutboundMessage) -> f32;
}

/// Placeholder submitter: waits a fixed delay and delivers nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSubmitter;

impl Submitter for SimulatedSubmitter {
    fn begin(&mut self, _message: &OutboundMessage) -> f32 {
        SUBMIT_DELAY_SECS
    }
}

/// Fields of the contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
}

impl FormField {
    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Controlled contact form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Name field value
    pub name: String,
    /// Email field value
    pub email: String,
    /// Message field value
    pub message: String,
    /// Currently focused field
    pub active_field: FormField,
    /// Remaining seconds of the in-flight submission, if any
    submitting: Option<f32>,
}

impl ContactForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            active_field: FormField::Name,
            submitting: None,
        }
    }

    /// Get the active field's input string (mutable).
    pub const fn active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Move focus to the next field.
    pub const fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        };
    }

    /// Move focus to the previous field.
    pub const fn previous_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        };
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Required-field validation: all three fields populated and the email
    /// roughly addressable. Invalid forms never start a submission.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.email.contains('@')
    }

    /// Starts a submission through `submitter`.
    ///
    /// Returns true if the submission began; false when validation blocked it
    /// or one is already in flight (the control is disabled meanwhile).
    pub fn submit(&mut self, submitter: &mut dyn Submitter) -> bool {
        if self.is_submitting() || !self.is_valid() {
            return false;
        }
        let message = OutboundMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        self.submitting = Some(submitter.begin(&message));
        true
    }

    /// Counts down the in-flight submission.
    ///
    /// Returns true on the tick where it completes; all fields reset to empty
    /// and the control re-enables.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(remaining) = self.submitting.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.submitting = None;
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.active_field = FormField::Name;
                return true;
            }
        }
        false
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact section state.
#[derive(Debug)]
pub struct ContactSection {
    /// Reveal timeline, gated on scroll position
    pub timeline: Timeline,
    /// The controlled form
    pub form: ContactForm,
    /// Whether keyboard input is currently routed into the form
    pub form_focused: bool,
}

impl ContactSection {
    /// Builds the contact reveal for `social_count` links (paused).
    #[must_use]
    pub fn new(social_count: usize) -> Self {
        let form_in = Tween::new(
            Motion::hidden().with_dx(-12.0),
            Motion::visible(),
            1.2,
            Ease::PowerOut,
        );
        let social_in = Tween::new(
            Motion::hidden().with_dx(4.0).with_scale(0.8),
            Motion::visible(),
            0.6,
            Ease::PowerOut,
        );

        let socials: Vec<usize> = (0..social_count).map(|i| SOCIAL_BASE + i).collect();
        let timeline = Timeline::builder()
            .step(FORM, form_in, StepStart::After)
            .stagger(&socials, social_in, 0.1, StepStart::Relative(-0.5))
            .build();

        Self {
            timeline,
            form: ContactForm::new(),
            form_focused: false,
        }
    }

    fn field_line(&self, field: FormField, theme: &Theme) -> Line<'static> {
        let value = match field {
            FormField::Name => &self.form.name,
            FormField::Email => &self.form.email,
            FormField::Message => &self.form.message,
        };
        let focused = self.form_focused && self.form.active_field == field;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(format!("{:<8}", field.label()), label_style),
            Span::styled(value.clone(), Style::default().fg(theme.text)),
        ];
        if focused && !self.form.is_submitting() {
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    }

    /// Renders the section as page lines with the current reveal state.
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let mut rows: Vec<(usize, Line<'static>)> = Vec::new();
        let indent = "    ";
        let body_width = width.saturating_sub(8).min(64);

        rows.push((FORM, Line::default()));
        rows.push((
            FORM,
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    "Get In ",
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Touch",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        for text in wrap(
            "Have a project in mind or just want to say hi? Drop a line below.",
            body_width,
        ) {
            rows.push((
                FORM,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(text, Style::default().fg(theme.text_muted)),
                ]),
            ));
        }
        rows.push((FORM, Line::default()));

        rows.push((FORM, self.field_line(FormField::Name, theme)));
        rows.push((FORM, self.field_line(FormField::Email, theme)));
        rows.push((FORM, self.field_line(FormField::Message, theme)));
        rows.push((FORM, Line::default()));

        let submit = if self.form.is_submitting() {
            Span::styled(
                "  ⌛ Sending…",
                Style::default().fg(theme.text_muted),
            )
        } else {
            Span::styled(
                "  [ Send Message ]",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )
        };
        rows.push((FORM, Line::from(vec![Span::raw(indent), submit])));
        rows.push((FORM, Line::default()));

        for (i, social) in content.socials.iter().enumerate() {
            rows.push((
                SOCIAL_BASE + i,
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled("◆ ", Style::default().fg(theme.primary)),
                    Span::styled(
                        format!("{:<10}", social.label),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled(social.url.clone(), Style::default().fg(theme.text_muted)),
                ]),
            ));
        }
        rows.push((FORM, Line::default()));
        rows.push((FORM, Line::default()));

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

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello there".to_string();
        form
    }

    #[test]
    fn test_valid_submit_lifecycle() {
        let mut form = filled_form();
        let mut submitter = SimulatedSubmitter;
        assert!(form.submit(&mut submitter));
        assert!(form.is_submitting());

        // The fixed delay elapses; fields clear and the control re-enables.
        let mut completed = 0;
        for _ in 0..120 {
            if form.tick(0.033) {
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
        assert!(!form.is_submitting());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        let mut submitter = SimulatedSubmitter;
        for blank in [0, 1, 2] {
            let mut form = filled_form();
            match blank {
                0 => form.name.clear(),
                1 => form.email.clear(),
                _ => form.message.clear(),
            }
            assert!(!form.submit(&mut submitter));
            assert!(!form.is_submitting(), "submitting must never become true");
        }
    }

    #[test]
    fn test_double_submit_blocked_while_in_flight() {
        let mut form = filled_form();
        let mut submitter = SimulatedSubmitter;
        assert!(form.submit(&mut submitter));
        assert!(!form.submit(&mut submitter));
    }

    #[test]
    fn test_whitespace_only_fields_invalid() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_field_cycling() {
        let mut form = ContactForm::new();
        assert_eq!(form.active_field, FormField::Name);
        form.next_field();
        assert_eq!(form.active_field, FormField::Email);
        form.next_field();
        assert_eq!(form.active_field, FormField::Message);
        form.next_field();
        assert_eq!(form.active_field, FormField::Name);
        form.previous_field();
        assert_eq!(form.active_field, FormField::Message);
    }
}
