//! Integration tests for the navigation bar and slide-in menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termfolio::config::Config;
use termfolio::content::Content;
use termfolio::tui::sections::Anchor;
use termfolio::tui::AppState;

const WIDTH: u16 = 80;
const VIEWPORT: u16 = 24;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_state() -> AppState {
    let mut config = Config::default();
    config.motion.reduced = true;
    let mut state = AppState::new(config, Content::default());
    state.tick(0.033, WIDTH, VIEWPORT);
    assert!(!state.loading);
    state
}

#[test]
fn test_menu_toggle() {
    let mut state = loaded_state();
    assert!(!state.nav.is_menu_open());
    state.handle_key(key(KeyCode::Char('m')), WIDTH, VIEWPORT);
    assert!(state.nav.is_menu_open());
    state.handle_key(key(KeyCode::Esc), WIDTH, VIEWPORT);
    assert!(!state.nav.is_menu_open());
}

#[test]
fn test_activation_from_menu_always_ends_closed() {
    // Every link, activated from the open menu, must leave the menu closed.
    for steps in 0..Anchor::ALL.len() {
        let mut state = loaded_state();
        state.handle_key(key(KeyCode::Char('m')), WIDTH, VIEWPORT);
        for _ in 0..steps {
            state.handle_key(key(KeyCode::Char('j')), WIDTH, VIEWPORT);
        }
        state.handle_key(key(KeyCode::Enter), WIDTH, VIEWPORT);
        assert!(
            !state.nav.is_menu_open(),
            "menu left open after activating link {steps}"
        );
    }
}

#[test]
fn test_menu_activation_scrolls_to_anchor() {
    let mut state = loaded_state();
    state.handle_key(key(KeyCode::Char('m')), WIDTH, VIEWPORT);
    // Move selection to About and activate.
    state.handle_key(key(KeyCode::Char('j')), WIDTH, VIEWPORT);
    state.handle_key(key(KeyCode::Enter), WIDTH, VIEWPORT);
    assert!(state.scroll.target() > 0.0);
}

#[test]
fn test_bar_link_cycling_and_activation() {
    let mut state = loaded_state();
    state.handle_key(key(KeyCode::Tab), WIDTH, VIEWPORT);
    assert_eq!(state.nav.selected_anchor(), Anchor::About);
    state.handle_key(key(KeyCode::Enter), WIDTH, VIEWPORT);
    assert!(state.scroll.target() > 0.0);

    state.handle_key(key(KeyCode::BackTab), WIDTH, VIEWPORT);
    assert_eq!(state.nav.selected_anchor(), Anchor::Home);
}

#[test]
fn test_scroll_keys_ignored_while_menu_open() {
    let mut state = loaded_state();
    state.handle_key(key(KeyCode::Char('m')), WIDTH, VIEWPORT);
    state.handle_key(key(KeyCode::Char('j')), WIDTH, VIEWPORT);
    // 'j' moved the menu selection, not the page.
    assert!(state.scroll.target() < f64::EPSILON);
}
