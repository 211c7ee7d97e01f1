//! Termfolio - Animated single-page portfolio for the terminal
//!
//! This application renders a personal portfolio as one scrollable page
//! with timeline-driven reveals, a slide-in menu, and a contact form.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use termfolio::config::{Config, ThemeMode};
use termfolio::constants::{APP_BINARY_NAME, APP_NAME};
use termfolio::content::Content;
use termfolio::tui;

/// Termfolio - Animated single-page portfolio for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a portfolio content TOML file
    #[arg(value_name = "FILE")]
    content_path: Option<PathBuf>,

    /// Theme override (auto detects the OS preference)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Skip animations; reveals snap to their final state
    #[arg(long)]
    reduced_motion: bool,

    /// Frame interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = if let Some(path) = cli.content_path {
        if !path.exists() {
            eprintln!("Error: Content file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a TOML content file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} portfolio.toml", APP_BINARY_NAME);
            eprintln!("  {} path/to/portfolio.toml", APP_BINARY_NAME);
            eprintln!();
            eprintln!("Run without arguments to use the built-in {APP_NAME} content.");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {} --help", APP_BINARY_NAME);
            std::process::exit(1);
        }
        Content::load(&path)?
    } else {
        Content::default()
    };

    let mut config = Config::load().unwrap_or_default();
    let has_overrides = cli.theme.is_some() || cli.reduced_motion || cli.tick_rate.is_some();
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }
    if cli.reduced_motion {
        config.motion.reduced = true;
    }
    if let Some(tick_rate) = cli.tick_rate {
        config.motion.tick_rate_ms = tick_rate.max(1);
    }
    // Persist explicit overrides, and write the defaults on first run so the
    // config file is there to edit.
    if has_overrides || !Config::exists() {
        config.save()?;
    }

    let mut state = tui::AppState::new(config, content);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
