//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Focus switching and focus-dependent navigation
//! - Selector bounds and page switching
//! - Scroll clamping against reported layout metrics
//! - Key dispatch through the App

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use organic_guide::app::{App, AppState, ContentMetrics, Focus};
use organic_guide::{price_items, topics, Page, PageState, Settings};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn tall_page() -> ContentMetrics {
    ContentMetrics {
        total_rows: 100,
        visible_rows: 20,
        selector_row: Some(60),
    }
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_is_home_with_sidebar_focus() {
    let state = AppState::default();
    assert_eq!(state.page(), Page::Home);
    assert_eq!(state.focus, Focus::Sidebar);
    assert_eq!(state.scroll, 0);
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_has_welcome_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("Welcome"));
}

#[test]
fn test_app_state_default_selections_are_first_options() {
    let state = AppState::default();
    assert_eq!(state.page_state.item, price_items()[0]);
    assert_eq!(state.page_state.topic, topics()[0]);
}

// =============================================================================
// Focus and Navigation
// =============================================================================

#[test]
fn test_toggle_focus_round_trip() {
    let mut state = AppState::default();
    state.toggle_focus();
    assert_eq!(state.focus, Focus::Selector);
    state.toggle_focus();
    assert_eq!(state.focus, Focus::Sidebar);
}

#[test]
fn test_sidebar_navigation_switches_page() {
    let mut state = AppState::default();
    state.navigate_down();
    assert_eq!(state.page(), Page::ResourceGuide);
    state.navigate_down();
    assert_eq!(state.page(), Page::ResourceGuide);
    state.navigate_up();
    assert_eq!(state.page(), Page::Home);
    state.navigate_up();
    assert_eq!(state.page(), Page::Home);
}

#[test]
fn test_page_switch_resets_scroll() {
    let mut state = AppState::default();
    state.update_metrics(tall_page());
    state.scroll_down(15);
    assert_eq!(state.scroll, 15);
    state.select_page(Page::ResourceGuide);
    assert_eq!(state.scroll, 0);
}

#[test]
fn test_selector_steps_through_items_without_wrapping() {
    let mut state = AppState::default();
    state.toggle_focus();

    state.navigate_up();
    assert_eq!(state.page_state.item, price_items()[0]);

    for _ in 0..20 {
        state.navigate_down();
    }
    let last = *price_items().last().unwrap();
    assert_eq!(state.page_state.item, last);
    assert_eq!(state.selection_index(), price_items().len() - 1);
}

#[test]
fn test_selector_on_guide_changes_topic_only() {
    let mut state = AppState::new(PageState {
        page: Page::ResourceGuide,
        ..PageState::default()
    });
    state.toggle_focus();
    state.navigate_down();
    assert_eq!(state.page_state.topic, topics()[1]);
    assert_eq!(state.page_state.item, price_items()[0]);
    assert!(state.status_message.contains(topics()[1]));
}

#[test]
fn test_focusing_selector_reveals_it() {
    let mut state = AppState::default();
    state.update_metrics(tall_page());
    state.toggle_focus();
    assert!(state.scroll <= 60 && 60 < state.scroll + 20);
}

// =============================================================================
// Scrolling
// =============================================================================

#[test]
fn test_scroll_clamps_to_content() {
    let mut state = AppState::default();
    state.update_metrics(tall_page());

    state.scroll_down(500);
    assert_eq!(state.scroll, 80);
    state.scroll_up(500);
    assert_eq!(state.scroll, 0);

    state.scroll_to_bottom();
    assert_eq!(state.scroll, 80);
    state.scroll_to_top();
    assert_eq!(state.scroll, 0);
}

#[test]
fn test_smaller_content_reclamps_scroll() {
    let mut state = AppState::default();
    state.update_metrics(tall_page());
    state.scroll_to_bottom();
    state.update_metrics(ContentMetrics {
        total_rows: 30,
        visible_rows: 20,
        selector_row: None,
    });
    assert_eq!(state.scroll, 10);
}

#[test]
fn test_short_content_never_scrolls() {
    let mut state = AppState::default();
    state.update_metrics(ContentMetrics {
        total_rows: 5,
        visible_rows: 20,
        selector_row: None,
    });
    state.scroll_down(3);
    assert_eq!(state.scroll, 0);
}

// =============================================================================
// Key Dispatch
// =============================================================================

#[test]
fn test_number_keys_jump_to_pages() {
    let mut app = App::new(Settings::default()).unwrap();
    app.handle_key_event(press(KeyCode::Char('2'))).unwrap();
    assert_eq!(app.state().page(), Page::ResourceGuide);
    app.handle_key_event(press(KeyCode::Char('1'))).unwrap();
    assert_eq!(app.state().page(), Page::Home);
}

#[test]
fn test_tab_then_down_changes_item() {
    let mut app = App::new(Settings::default()).unwrap();
    app.handle_key_event(press(KeyCode::Tab)).unwrap();
    assert_eq!(app.state().focus, Focus::Selector);
    app.handle_key_event(press(KeyCode::Down)).unwrap();
    assert_eq!(app.state().page_state.item, price_items()[1]);
    assert!(app.current_view().is_ok());
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut app = App::new(Settings::default()).unwrap();
    let before = app.state().page_state.clone();
    assert!(!app.handle_key_event(press(KeyCode::Char('x'))).unwrap());
    assert_eq!(app.state().page_state, before);
}

#[test]
fn test_app_starts_from_settings() {
    let settings = Settings {
        initial_page: Page::ResourceGuide,
        initial_topic: Some("How do prices vary".to_string()),
        ..Settings::default()
    };
    let app = App::new(settings).unwrap();
    assert_eq!(app.state().page(), Page::ResourceGuide);
    assert_eq!(app.state().page_state.topic, "How do prices vary");
}
