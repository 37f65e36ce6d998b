//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Focus, ContentMetrics)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppState, ContentMetrics, Focus};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::Settings;
use crate::error::{GuideError, Result};
use crate::theme::UiConstants;
use crate::types::Page;
use crate::ui::UiRenderer;
use crate::view::{self, ViewModel};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Interval between input polls
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    settings: Settings,
}

impl App {
    /// Create a new application instance
    ///
    /// # Errors
    ///
    /// Fails if the initial selections from `settings` do not render.
    pub fn new(settings: Settings) -> Result<Self> {
        let page_state = settings.initial_state();
        view::render(&page_state)?;
        info!(page = %page_state.page, item = %page_state.item, topic = %page_state.topic, "Creating new App instance");

        Ok(Self {
            state: AppState::new(page_state),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            settings,
        })
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable application state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Re-render the current page from scratch
    pub fn current_view(&self) -> Result<ViewModel> {
        view::render(&self.state.page_state)
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            let view = self.current_view()?;
            let mut metrics = self.state.metrics;
            terminal.draw(|f| {
                metrics = self.ui_renderer.render(
                    f,
                    &self.state,
                    &view,
                    &self.keybinding_context,
                    &self.settings,
                );
            })
            .map_err(|e| GuideError::terminal(format!("Failed to draw frame: {}", e)))?;
            self.state.update_metrics(metrics);

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event)? {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        let action = self
            .keybinding_context
            .action_for(&self.state.focus, &key_event);
        debug!(?key_event, ?action, focus = %self.state.focus, "Key pressed");

        if self.state.help_visible {
            match (key_event.code, action) {
                (KeyCode::Esc, _) | (_, Some(KeyAction::Help)) => self.state.toggle_help(),
                (_, Some(KeyAction::Quit)) => return Ok(true),
                _ => {}
            }
            return Ok(false);
        }

        let Some(action) = action else {
            return Ok(false);
        };

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                return Ok(true);
            }
            KeyAction::Help => self.state.toggle_help(),
            KeyAction::SwitchFocus => {
                self.state.toggle_focus();
                self.state.status_message = format!("Focus: {}", self.state.focus);
            }
            KeyAction::NavigateUp => self.state.navigate_up(),
            KeyAction::NavigateDown => self.state.navigate_down(),
            KeyAction::ScrollUp => self.state.scroll_up(1),
            KeyAction::ScrollDown => self.state.scroll_down(1),
            KeyAction::PageUp => self.state.scroll_up(UiConstants::PAGE_SCROLL_SIZE),
            KeyAction::PageDown => self.state.scroll_down(UiConstants::PAGE_SCROLL_SIZE),
            KeyAction::Top => self.state.scroll_to_top(),
            KeyAction::Bottom => self.state.scroll_to_bottom(),
            KeyAction::ShowHome => self.state.select_page(Page::Home),
            KeyAction::ShowGuide => self.state.select_page(Page::ResourceGuide),
        }

        if let Err(e) = self.current_view() {
            warn!(error = %e, "Selection no longer renders");
            return Err(e);
        }
        Ok(false)
    }
}
