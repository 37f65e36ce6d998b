//! Title bar, status line and overlay rendering
//!
//! This module contains the widgets drawn around the page content:
//! the site title, the status line, the nav bar and the help popup.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::data::content::SITE_TITLE;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer holding the prebuilt title line
pub struct HeaderRenderer {
    title_line: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            title_line: Line::from(vec![
                Span::styled("🥬 ", Style::default().fg(Colors::SUCCESS)),
                Span::styled(SITE_TITLE, Styles::title()),
            ]),
        }
    }

    /// Render the site title bar
    pub fn render_title(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_widget = Paragraph::new(self.title_line.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_inactive()),
            )
            .alignment(Alignment::Center);
        f.render_widget(title_widget, area);
    }
}

/// Render the status message line
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Styles::text_muted()),
        Span::styled(state.status_message.clone(), Styles::text_secondary()),
    ]));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.focus);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.focus, keybinding_ctx);
    help_overlay.render(f, f.area());
}
