//! Applies sampled motion states to styled lines.
//!
//! This is where the abstract [`Motion`] fields become terminal effects:
//! `alpha` fades span colors toward the background, `dissolve` scrambles a
//! deterministic fraction of glyphs into shade characters, and `dx` shifts
//! the line horizontally. Line counts never change, so section heights stay
//! stable while animations run.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::motion::Motion;
use crate::tui::Theme;

/// Shade glyph used for unresolved characters.
const SCRAMBLE_GLYPH: char = '░';

/// Decides deterministically whether glyph `index` is still scrambled at the
/// given dissolve amount. Each glyph gets a stable pseudo-random rank from a
/// multiplicative hash, so glyphs resolve progressively in a fixed order as
/// the amount shrinks rather than flickering frame to frame.
#[must_use]
pub fn is_scrambled(index: usize, seed: usize, amount: f32) -> bool {
    if amount <= 0.0 {
        return false;
    }
    if amount >= 1.0 {
        return true;
    }
    let hash = (index.wrapping_add(seed.wrapping_mul(31)))
        .wrapping_mul(2_654_435_761)
        .rotate_left(13);
    let rank = (hash % 1000) as f32 / 1000.0;
    rank < amount
}

/// Applies a motion state to one line.
///
/// `seed` keys the scramble pattern (typically the line's index within its
/// section) so adjacent lines dissolve differently.
#[must_use]
pub fn reveal_line(line: Line<'static>, motion: &Motion, seed: usize, theme: &Theme) -> Line<'static> {
    if motion.alpha < 0.05 {
        // Invisible: keep the row, drop the content.
        return Line::default();
    }

    let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
    let shift = motion.dx.round() as i32;
    if shift > 0 {
        spans.push(Span::raw(" ".repeat(shift as usize)));
    }

    let mut glyph_index: usize = 0;
    // Chars to drop from the left for negative offsets.
    let mut to_trim = shift.min(0).unsigned_abs() as usize;

    for span in line.spans {
        let mut text = String::with_capacity(span.content.len());
        for ch in span.content.chars() {
            if to_trim > 0 {
                to_trim -= 1;
                glyph_index += 1;
                continue;
            }
            let scrambled =
                !ch.is_whitespace() && is_scrambled(glyph_index, seed, motion.dissolve);
            text.push(if scrambled { SCRAMBLE_GLYPH } else { ch });
            glyph_index += 1;
        }
        if !text.is_empty() {
            spans.push(Span::styled(text, fade_style(span.style, motion.alpha, theme)));
        }
    }

    Line::from(spans).alignment(line.alignment.unwrap_or(ratatui::layout::Alignment::Left))
}

/// Fades a style's foreground toward the background.
#[must_use]
pub fn fade_style(style: Style, alpha: f32, theme: &Theme) -> Style {
    match style.fg {
        Some(color) => match theme.fade(color, alpha) {
            Some(faded) => style.fg(faded),
            None => style.fg(theme.background),
        },
        None => match theme.fade(theme.text, alpha) {
            Some(faded) => style.fg(faded),
            None => style.fg(theme.background),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_invisible_line_is_blank_but_present() {
        let theme = Theme::dark();
        let line = Line::from("hello");
        let out = reveal_line(line, &Motion::hidden().with_alpha(0.0), 0, &theme);
        assert!(out.spans.iter().all(|s| s.content.trim().is_empty()));
    }

    #[test]
    fn test_resting_motion_preserves_text() {
        let theme = Theme::dark();
        let line = Line::from(Span::styled("hello", Style::default().fg(Color::Cyan)));
        let out = reveal_line(line, &Motion::visible(), 0, &theme);
        let text: String = out.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "hello");
        assert_eq!(out.spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_positive_dx_indents() {
        let theme = Theme::dark();
        let motion = Motion::visible().with_dx(4.0);
        let out = reveal_line(Line::from("hi"), &motion, 0, &theme);
        assert_eq!(out.spans[0].content.as_ref(), "    ");
    }

    #[test]
    fn test_negative_dx_trims_left() {
        let theme = Theme::dark();
        let motion = Motion::visible().with_dx(-2.0);
        let out = reveal_line(Line::from("hello"), &motion, 0, &theme);
        let text: String = out.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "llo");
    }

    #[test]
    fn test_scramble_is_deterministic_and_progressive() {
        // Full dissolve scrambles everything, zero dissolve nothing.
        assert!(is_scrambled(5, 1, 1.0));
        assert!(!is_scrambled(5, 1, 0.0));
        // Same inputs give the same answer.
        assert_eq!(is_scrambled(7, 3, 0.5), is_scrambled(7, 3, 0.5));
        // A glyph scrambled at a low amount stays scrambled at higher amounts.
        for i in 0..64 {
            if is_scrambled(i, 2, 0.3) {
                assert!(is_scrambled(i, 2, 0.8));
            }
        }
    }

    #[test]
    fn test_full_dissolve_hides_content() {
        let theme = Theme::dark();
        let motion = Motion::visible().with_alpha(1.0);
        let motion = Motion {
            dissolve: 1.0,
            ..motion
        };
        let out = reveal_line(Line::from("secret"), &motion, 0, &theme);
        let text: String = out.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains("secret"));
    }
}
