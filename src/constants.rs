//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and shared motion parameters.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Termfolio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "termfolio";

/// Viewport threshold at which a section's entrance reveal plays.
///
/// A section counts as "in view" once its top line rises above the point this
/// fraction of the way down the visible area (0.8 = 80% of viewport height).
pub const REVEAL_THRESHOLD: f32 = 0.8;

/// Later threshold for the footer, which sits at the very bottom of the page.
pub const FOOTER_THRESHOLD: f32 = 0.9;

/// Fixed delay simulating the contact form's network round trip, in seconds.
pub const SUBMIT_DELAY_SECS: f32 = 2.0;

/// Default event-loop tick interval in milliseconds (~30 fps).
pub const DEFAULT_TICK_RATE_MS: u64 = 33;
