//! Termfolio Library
//!
//! This library provides the building blocks for the Termfolio application:
//! a motion engine for timeline-driven terminal animation, a content model
//! for portfolio data, and the TUI components that render the page.

// Module declarations
pub mod config;
pub mod constants;
pub mod content;
pub mod motion;
pub mod tui;
