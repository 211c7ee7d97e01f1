//! Terminal user interface: application state, input routing, and the
//! render loop.
//!
//! The portfolio renders as one tall page of lines windowed by a smooth
//! scroll offset. A preloader overlay owns the screen until its timeline
//! completes; only then do the navigation bar and page reveals start.

pub mod component;
pub mod fx;
pub mod help_overlay;
pub mod nav;
pub mod preloader;
pub mod sections;
pub mod status_bar;
pub mod theme;

pub use component::Component;
pub use help_overlay::HelpOverlay;
pub use nav::{NavEvent, Navigation};
pub use preloader::{Preloader, PreloaderEvent};
pub use status_bar::{StatusBar, StatusContext};
pub use theme::Theme;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::content::Content;
use crate::motion::{SmoothScroll, TriggerRegistry};
use sections::{Anchor, Page, SimulatedSubmitter, Submitter};

const NAV_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const LINE_SCROLL: f64 = 2.0;
const WHEEL_SCROLL: f64 = 3.0;
const SCROLL_SPEED: f64 = 10.0;

/// Which surface keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Scrolling the page
    Page,
    /// Typing into the contact form
    Form,
}

/// Single source of truth for the running application.
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Portfolio content
    pub content: Content,
    /// Active color theme
    pub theme: Theme,
    /// Whether the preloader still owns the screen
    pub loading: bool,
    /// Preloader overlay, dropped once loading completes
    pub preloader: Option<Preloader>,
    /// Navigation bar and menu panel
    pub nav: Navigation,
    /// The page sections
    pub page: Page,
    /// Scroll-position gates for section reveals
    pub triggers: TriggerRegistry,
    /// Smoothed scroll offset into the page
    pub scroll: SmoothScroll,
    /// Current input focus
    pub focus: Focus,
    /// Whether the help overlay is open
    pub help_open: bool,
    /// Set when the user quits
    pub should_quit: bool,
    submitter: Box<dyn Submitter>,
}

impl AppState {
    /// Creates the initial state: preloader running, scroll locked.
    #[must_use]
    pub fn new(config: Config, content: Content) -> Self {
        let reduced = config.motion.reduced;
        let mut triggers = TriggerRegistry::new();
        let page = Page::new(&content, &mut triggers, reduced);
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            config,
            content: content.clone(),
            theme,
            loading: true,
            preloader: Some(Preloader::new(&content, reduced)),
            nav: Navigation::new(reduced),
            page,
            triggers,
            scroll: SmoothScroll::new(SCROLL_SPEED),
            focus: Focus::Page,
            help_open: false,
            should_quit: false,
            submitter: Box::new(SimulatedSubmitter),
        }
    }

    /// Replaces the submitter collaborator.
    pub fn with_submitter(mut self, submitter: Box<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Ends the loading phase: drops the preloader, unlocks scrolling, and
    /// starts the navigation and hero entrances. Safe to call more than once.
    pub fn complete_loading(&mut self) {
        if !self.loading {
            return;
        }
        self.loading = false;
        self.preloader = None;
        self.nav.start_entrance();
        self.page.start_hero();
    }

    /// Scrolls so that `anchor`'s section heading is at the top.
    ///
    /// Unknown layout (width 0) leaves the offset untouched.
    pub fn jump_to(&mut self, anchor: Anchor, width: u16, viewport: u16) {
        if let Some(top) =
            self.page
                .anchor_top(anchor, width, &self.content, &self.theme)
        {
            let max = self.scroll_max(width, viewport);
            if self.config.motion.reduced {
                self.scroll.jump_to(top as f64, max);
            } else {
                self.scroll.scroll_to(top as f64, max);
            }
        }
    }

    fn scroll_max(&self, width: u16, viewport: u16) -> f64 {
        let total = self.page.total_height(width, &self.content, &self.theme);
        total.saturating_sub(usize::from(viewport)) as f64
    }

    /// Status bar context for the current input state.
    #[must_use]
    pub fn status_context(&self) -> StatusContext {
        if self.loading {
            StatusContext::Loading
        } else if self.help_open {
            StatusContext::Help
        } else if self.nav.is_menu_open() {
            StatusContext::Menu
        } else if self.focus == Focus::Form {
            StatusContext::Form
        } else {
            StatusContext::Page
        }
    }

    /// Advances all animation state by `dt` seconds.
    ///
    /// `width` and `viewport` are the page area's dimensions from the last
    /// draw, used for gate positions and scroll clamping.
    pub fn tick(&mut self, dt: f32, width: u16, viewport: u16) {
        if self.loading {
            if let Some(preloader) = self.preloader.as_mut() {
                if preloader.tick(dt) == Some(PreloaderEvent::Complete) {
                    self.complete_loading();
                }
            }
            return;
        }

        self.nav.tick(dt);
        self.scroll.tick(dt);
        #[allow(clippy::cast_possible_truncation)]
        self.page.tick(
            dt,
            &mut self.triggers,
            self.scroll.offset() as f32,
            viewport,
            width,
            &self.content,
            &self.theme,
        );
        if self.page.contact.form.tick(dt) {
            // Submission finished; return focus to the page.
            self.focus = Focus::Page;
            self.page.contact.form_focused = false;
        }
    }

    fn focus_form(&mut self, width: u16, viewport: u16) {
        self.jump_to(Anchor::Contact, width, viewport);
        self.focus = Focus::Form;
        self.page.contact.form_focused = true;
    }

    fn leave_form(&mut self) {
        self.focus = Focus::Page;
        self.page.contact.form_focused = false;
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.leave_form(),
            KeyCode::Tab | KeyCode::Down => self.page.contact.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.page.contact.form.previous_field(),
            KeyCode::Enter => {
                if self.page.contact.form.active_field == sections::FormField::Message {
                    self.page.contact.form.submit(self.submitter.as_mut());
                } else {
                    self.page.contact.form.next_field();
                }
            }
            KeyCode::Backspace => {
                self.page.contact.form.active_field_mut().pop();
            }
            KeyCode::Char(c) => {
                if !self.page.contact.form.is_submitting() {
                    self.page.contact.form.active_field_mut().push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent, width: u16, viewport: u16) {
        let max = self.scroll_max(width, viewport);
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char('m') => self.nav.toggle_menu(),
            KeyCode::Char('i') => self.focus_form(width, viewport),
            KeyCode::Tab => self.nav.select_next(),
            KeyCode::BackTab => self.nav.select_previous(),
            KeyCode::Enter => {
                let anchor = self.nav.selected_anchor();
                self.jump_to(anchor, width, viewport);
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_by(LINE_SCROLL, max),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_by(-LINE_SCROLL, max),
            KeyCode::PageDown => self.scroll.scroll_by(f64::from(viewport), max),
            KeyCode::PageUp => self.scroll.scroll_by(-f64::from(viewport), max),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.scroll_to(0.0, max),
            KeyCode::Char('G') | KeyCode::End => self.scroll.scroll_to(max, max),
            KeyCode::Char(c @ '1'..='4') => {
                let index = usize::from(u8::try_from(c).unwrap_or(b'1') - b'1');
                if let Some(anchor) = Anchor::ALL.get(index) {
                    self.jump_to(*anchor, width, viewport);
                }
            }
            _ => {}
        }
    }

    /// Routes a key event to the active surface.
    pub fn handle_key(&mut self, key: KeyEvent, width: u16, viewport: u16) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.loading {
            if key.code == KeyCode::Char('q') {
                if let Some(preloader) = self.preloader.as_mut() {
                    preloader.cancel();
                }
                self.should_quit = true;
            }
            return;
        }

        if self.help_open {
            self.help_open = false;
            return;
        }

        if self.nav.is_menu_open() {
            if let Some(NavEvent::Activate(anchor)) = self.nav.handle_input(key) {
                self.jump_to(anchor, width, viewport);
            }
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Page => self.handle_page_key(key, width, viewport),
        }
    }

    /// Routes a mouse event (wheel scrolling only).
    pub fn handle_mouse(&mut self, mouse: MouseEvent, width: u16, viewport: u16) {
        if self.loading {
            return;
        }
        let max = self.scroll_max(width, viewport);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll.scroll_by(WHEEL_SCROLL, max),
            MouseEventKind::ScrollUp => self.scroll.scroll_by(-WHEEL_SCROLL, max),
            _ => {}
        }
    }
}

/// The page area inside the full frame area.
fn page_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    chunks[1]
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    if state.loading {
        if let Some(preloader) = &state.preloader {
            preloader.render(f, f.area(), &state.theme);
        }
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    state
        .nav
        .render_bar(f, chunks[0], &state.content.profile.name, &state.theme);

    let page = chunks[1];
    let lines = state.page.lines(page.width, &state.content, &state.theme);
    let body = Paragraph::new(lines).scroll((state.scroll.line(), 0));
    f.render_widget(body, page);

    StatusBar::render(f, chunks[2], state.status_context(), &state.theme);

    if state.nav.is_menu_open() || state.nav.panel_progress() > 0.05 {
        state.nav.render_menu(f, page, &state.theme);
    }
    if state.help_open {
        HelpOverlay::render(f, page, &state.theme);
    }
}

/// Sets up the terminal for TUI rendering.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main TUI event loop: draw, poll input, advance animations.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.config.motion.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        let viewport = page_area(terminal.get_frame().area());

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => state.handle_key(key, viewport.width, viewport.height),
                Event::Mouse(mouse) => {
                    state.handle_mouse(mouse, viewport.width, viewport.height);
                }
                _ => {}
            }
        }

        let dt = last_tick.elapsed().as_secs_f32();
        if dt >= tick_rate.as_secs_f32() {
            state.tick(dt, viewport.width, viewport.height);
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
