//! Bottom navigation bar showing the most important keybindings

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Single-line key hint bar
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Spans for the bar, `[Key] Label` pairs separated by spaces
    pub fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}]", item.key_display), Styles::nav_key()));
            spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
        }
        spans
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let bar = Paragraph::new(Line::from(self.spans())).style(Styles::panel_bg());
        f.render_widget(bar, area);
    }
}
