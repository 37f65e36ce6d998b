//! Application state definitions
//!
//! Contains the interactive state of the guide: which page is shown, which
//! control has keyboard focus, the current selections and the scroll offset.
//! All transitions are plain methods so they can be exercised without a
//! terminal.

use strum::{Display, EnumIter};

use crate::logic::resolver;
use crate::types::Page;
use crate::view::PageState;

/// Which control receives Up/Down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Focus {
    /// Sidebar page navigation
    #[default]
    #[strum(serialize = "Navigation")]
    Sidebar,
    /// The product or topic selector on the current page
    #[strum(serialize = "Selector")]
    Selector,
}

/// Layout facts reported back by the renderer after each draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentMetrics {
    /// Rows the page content occupies after wrapping
    pub total_rows: u16,
    /// Rows visible in the content viewport
    pub visible_rows: u16,
    /// Row of the selector block, if the page has one
    pub selector_row: Option<u16>,
}

impl ContentMetrics {
    /// Largest useful scroll offset
    pub fn max_scroll(&self) -> u16 {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Selections the current page is rendered from
    pub page_state: PageState,
    /// Control with keyboard focus
    pub focus: Focus,
    /// First visible content row
    pub scroll: u16,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Layout of the last drawn frame
    pub metrics: ContentMetrics,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}

impl AppState {
    /// Create state starting from the given selections
    pub fn new(page_state: PageState) -> Self {
        Self {
            page_state,
            focus: Focus::Sidebar,
            scroll: 0,
            help_visible: false,
            status_message: "Welcome! Press ? for help".to_string(),
            metrics: ContentMetrics::default(),
        }
    }

    /// Currently displayed page
    pub fn page(&self) -> Page {
        self.page_state.page
    }

    /// Switch to `page`, returning to the top of the content
    pub fn select_page(&mut self, page: Page) {
        if self.page_state.page != page {
            self.page_state.page = page;
            self.scroll = 0;
            self.status_message = format!("Viewing {}", page);
        }
    }

    /// Toggle keyboard focus between sidebar and page selector
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Selector,
            Focus::Selector => Focus::Sidebar,
        };
        if self.focus == Focus::Selector {
            self.reveal_selector();
        }
    }

    /// Move focus-dependent selection up
    pub fn navigate_up(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                let index = self.page().index();
                if index > 0 {
                    if let Some(page) = Page::from_index(index - 1) {
                        self.select_page(page);
                    }
                }
            }
            Focus::Selector => self.step_selection(-1),
        }
    }

    /// Move focus-dependent selection down
    pub fn navigate_down(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if let Some(page) = Page::from_index(self.page().index() + 1) {
                    self.select_page(page);
                }
            }
            Focus::Selector => self.step_selection(1),
        }
    }

    /// Index of the current selection in the current page's selector
    pub fn selection_index(&self) -> usize {
        let (options, current) = self.selector_options();
        options.iter().position(|o| *o == current).unwrap_or(0)
    }

    fn selector_options(&self) -> (Vec<&'static str>, &str) {
        match self.page() {
            Page::Home => (resolver::price_items(), self.page_state.item.as_str()),
            Page::ResourceGuide => (resolver::topics(), self.page_state.topic.as_str()),
        }
    }

    /// Move the selector by `delta`, clamped to the option list
    fn step_selection(&mut self, delta: isize) {
        let (options, _) = self.selector_options();
        let last = options.len().saturating_sub(1);
        let next = self
            .selection_index()
            .saturating_add_signed(delta)
            .min(last);
        let label = options[next].to_string();

        match self.page() {
            Page::Home => {
                if self.page_state.item != label {
                    self.status_message = format!("Selected product: {}", label);
                    self.page_state.item = label;
                }
            }
            Page::ResourceGuide => {
                if self.page_state.topic != label {
                    self.status_message = format!("Selected topic: {}", label);
                    self.page_state.topic = label;
                }
            }
        }
    }

    /// Scroll content up by `rows`
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Scroll content down by `rows`, stopping at the end of the page
    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.metrics.max_scroll());
    }

    /// Jump to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump to the bottom of the page
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.metrics.max_scroll();
    }

    /// Record the layout of the frame just drawn and re-clamp the scroll
    pub fn update_metrics(&mut self, metrics: ContentMetrics) {
        self.metrics = metrics;
        self.scroll = self.scroll.min(metrics.max_scroll());
    }

    /// Scroll so the selector is near the top of the viewport
    fn reveal_selector(&mut self) {
        if let Some(row) = self.metrics.selector_row {
            let visible = self.scroll..self.scroll.saturating_add(self.metrics.visible_rows);
            if !visible.contains(&row) {
                self.scroll = row.saturating_sub(2).min(self.metrics.max_scroll());
            }
        }
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}
