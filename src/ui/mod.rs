//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, status line, nav bar and help overlay
//! - `sidebar` - Page navigation
//! - `page` - View model blocks to styled lines
//! - `text` - Plain-text rendering for the `print` command

mod header;
pub mod page;
mod sidebar;
pub mod text;

use crate::app::{AppState, ContentMetrics, Focus};
use crate::components::keybindings::KeybindingContext;
use crate::config_file::Settings;
use crate::theme::{Styles, UiConstants};
use crate::view::ViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Padding},
    Frame,
};

pub use header::HeaderRenderer;
pub use page::{layout_page, PageLayout};
pub use text::render_text;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to the
/// submodules for each region of the screen.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI and report the content layout back to the caller
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        view: &ViewModel,
        keybinding_ctx: &KeybindingContext,
        settings: &Settings,
    ) -> ContentMetrics {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::STATUS_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(UiConstants::SIDEBAR_WIDTH),
                Constraint::Min(1),
            ])
            .split(main_chunks[1]);

        self.header.render_title(f, main_chunks[0]);
        sidebar::render_sidebar(f, state, body_chunks[0]);
        let metrics = render_content(f, state, view, settings, body_chunks[1]);
        header::render_status(f, state, main_chunks[2]);
        header::render_nav_bar(f, state, keybinding_ctx, main_chunks[3]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }

        metrics
    }
}

/// Render the scrollable page content
fn render_content(
    f: &mut Frame,
    state: &AppState,
    view: &ViewModel,
    settings: &Settings,
    area: Rect,
) -> ContentMetrics {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.page))
        .title_style(Styles::header())
        .border_style(Styles::border(state.focus == Focus::Selector))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let layout = layout_page(view, state.focus, settings, inner.width);
    let metrics = ContentMetrics {
        total_rows: layout.total_rows(inner.width),
        visible_rows: inner.height,
        selector_row: layout.selector_row(inner.width),
    };
    let scroll = state.scroll.min(metrics.max_scroll());

    let content = layout.paragraph().block(block).scroll((scroll, 0));
    f.render_widget(content, area);

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_reports_metrics() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let state = AppState::default();
        let view = render(&state.page_state).unwrap();
        let renderer = UiRenderer::new();
        let ctx = KeybindingContext::new();
        let settings = Settings::default();

        let mut metrics = ContentMetrics::default();
        terminal
            .draw(|f| metrics = renderer.render(f, &state, &view, &ctx, &settings))
            .unwrap();

        assert!(metrics.total_rows > metrics.visible_rows);
        assert!(metrics.selector_row.is_some());
        let screen = buffer_text(&terminal);
        assert!(screen.contains("Navigation"));
        assert!(screen.contains("(•) Home"));
    }

    #[test]
    fn test_help_overlay_drawn_when_visible() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut state = AppState::default();
        state.toggle_help();
        let view = render(&state.page_state).unwrap();
        let renderer = UiRenderer::new();
        let ctx = KeybindingContext::new();

        terminal
            .draw(|f| {
                renderer.render(f, &state, &view, &ctx, &Settings::default());
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Organic Guide Help"));
    }

    #[test]
    fn test_narrow_terminal_reports_wrapped_rows() {
        let state = AppState::default();
        let view = render(&state.page_state).unwrap();
        let renderer = UiRenderer::new();
        let ctx = KeybindingContext::new();
        let settings = Settings::default();

        let metrics_for = |width: u16| {
            let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
            let mut metrics = ContentMetrics::default();
            terminal
                .draw(|f| metrics = renderer.render(f, &state, &view, &ctx, &settings))
                .unwrap();
            metrics
        };

        let wide = metrics_for(140);
        let narrow = metrics_for(60);
        assert!(narrow.total_rows > wide.total_rows);
        assert!(narrow.selector_row.unwrap() > wide.selector_row.unwrap());
    }
}
