//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that
//! automatically detects the OS theme (dark/light mode), plus the alpha-fade
//! mapping the reveal renderer uses to approximate opacity in a terminal.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and overlays
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Self::light(),
            // Fall back to dark theme when the OS reports dark or no preference
            dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
        }
    }

    /// Resolves a theme from the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Magenta,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(24, 24, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(140, 40, 140),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Background color as RGB channels for blending.
    const fn background_rgb(&self) -> (u8, u8, u8) {
        match self.background {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::White => (255, 255, 255),
            _ => (0, 0, 0),
        }
    }

    /// Fades a foreground color toward the background by `alpha` (1 = fully
    /// opaque, 0 = invisible).
    ///
    /// RGB colors are blended channel-wise against the background; for named
    /// terminal colors the fade is quantized through the theme's muted and
    /// secondary text tiers. Returns `None` when the color is effectively
    /// invisible and the glyphs should not be drawn at all.
    #[must_use]
    pub fn fade(&self, color: Color, alpha: f32) -> Option<Color> {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha < 0.05 {
            return None;
        }
        if alpha > 0.95 {
            return Some(color);
        }
        if let Color::Rgb(r, g, b) = color {
            let (br, bg, bb) = self.background_rgb();
            let mix = |c: u8, back: u8| -> u8 {
                (f32::from(back) + (f32::from(c) - f32::from(back)) * alpha).round() as u8
            };
            return Some(Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb)));
        }
        // Quantized fallback for named colors.
        if alpha < 0.4 {
            Some(self.text_muted)
        } else if alpha < 0.75 {
            Some(self.text_secondary)
        } else {
            Some(color)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
