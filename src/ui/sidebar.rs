//! Sidebar page navigation

use crate::app::{AppState, Focus};
use crate::theme::Styles;
use crate::types::Page;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use strum::IntoEnumIterator;

/// Radio-style list of pages, current page marked
pub fn render_sidebar(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Sidebar;
    let items: Vec<ListItem> = Page::iter()
        .map(|page| {
            let current = page == state.page();
            let (marker, style) = match (current, focused) {
                (true, true) => ("(•) ", Styles::selected()),
                (true, false) => ("(•) ", Styles::focused()),
                (false, _) => ("( ) ", Styles::unselected()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(page.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navigation ")
            .title_style(Styles::header())
            .border_style(Styles::border(focused)),
    );
    f.render_widget(list, area);
}
