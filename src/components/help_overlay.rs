//! Help overlay component
//!
//! Displays context-sensitive help in a centered popup above the page.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::Focus;
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given focus
    pub fn new(focus: &Focus, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(focus);
        Self {
            content: Self::build_content(&sections, focus),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], focus: &Focus) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Organic Guide Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Focus: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(focus.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<14}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of content lines (used to size the popup)
    pub fn height(&self) -> u16 {
        u16::try_from(self.content.len()).unwrap_or(u16::MAX)
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(
            parent,
            UiConstants::HELP_WIDTH,
            self.height().saturating_add(2),
        );
        f.render_widget(Clear, area);
        let popup = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_style(Styles::title())
                    .border_style(Styles::border_active()),
            )
            .style(Styles::panel_bg());
        f.render_widget(popup, area);
    }
}

/// A `width` x `height` rectangle centered in `parent`, clipped to fit
pub fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}
