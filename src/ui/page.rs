//! Page content rendering
//!
//! Converts a `ViewModel` into styled lines for the content pane. Lines are
//! left unwrapped; the pane wraps them with `Paragraph::wrap` and counts the
//! resulting rows with `Paragraph::line_count`.

use crate::app::Focus;
use crate::config_file::Settings;
use crate::theme::Styles;
use crate::view::{Block, ViewModel};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Page content as logical lines, one per paragraph
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    /// Index into `lines` of the selector label, if the page has a selector
    pub selector_line: Option<usize>,
}

impl PageLayout {
    /// Paragraph that draws the lines wrapped at word boundaries
    pub fn paragraph(&self) -> Paragraph<'static> {
        wrapped(self.lines.clone())
    }

    /// Screen rows the content occupies in a pane `width` columns wide
    pub fn total_rows(&self, width: u16) -> u16 {
        row_count(&self.lines, width)
    }

    /// Screen row of the selector label in a pane `width` columns wide
    pub fn selector_row(&self, width: u16) -> Option<u16> {
        self.selector_line
            .and_then(|index| self.lines.get(..index))
            .map(|before| row_count(before, width))
    }
}

fn wrapped(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn row_count(lines: &[Line<'static>], width: u16) -> u16 {
    let rows = wrapped(lines.to_vec()).line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn styled(text: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), style))
}

fn labelled(label: &str, label_style: Style, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" "),
        Span::styled(text.to_string(), Styles::text()),
    ])
}

/// Lay out every block of `view` for a pane `width` columns wide
///
/// The width only sizes the divider rule; wrapping happens when drawing.
pub fn layout_page(view: &ViewModel, focus: Focus, settings: &Settings, width: u16) -> PageLayout {
    let width = usize::from(width.max(1));
    let mut layout = PageLayout::default();

    for block in &view.blocks {
        let lines = &mut layout.lines;
        match block {
            Block::Title(text) => lines.push(styled(text, Styles::title())),
            Block::Header(text) => lines.push(styled(text, Styles::header())),
            Block::Subheader(text) => lines.push(styled(text, Styles::subheader())),
            Block::Paragraph(text) => lines.push(styled(text, Styles::text())),
            Block::Divider => {
                lines.push(Line::from(Span::styled("─".repeat(width), Styles::text_muted())));
            }
            Block::MythFact { myth, fact } => {
                lines.push(labelled("❌ MYTH:", Styles::myth(), myth));
                lines.push(labelled("✅ FACT:", Styles::fact(), fact));
            }
            Block::Chart(chart) => {
                lines.push(Line::from(vec![
                    Span::styled("🖼  ", Styles::text_secondary()),
                    Span::styled(chart.caption().to_string(), Styles::text_bold()),
                ]));
                let mut path = vec![Span::styled(
                    format!("   {}", chart.relative_path()),
                    Styles::text_muted(),
                )];
                if !settings.chart_available(*chart) {
                    path.push(Span::styled(" (missing)", Styles::warning()));
                }
                lines.push(Line::from(path));
            }
            Block::Selector {
                label,
                options,
                selected,
            } => {
                layout.selector_line = Some(lines.len());
                lines.push(styled(label, Styles::text_bold()));
                if focus == Focus::Selector {
                    for (i, option) in options.iter().enumerate() {
                        let line = if i == *selected {
                            Line::from(Span::styled(format!(" ▸ {} ", option), Styles::selected()))
                        } else {
                            Line::from(Span::styled(format!("   {}", option), Styles::unselected()))
                        };
                        lines.push(line);
                    }
                } else {
                    let current = options.get(*selected).map(String::as_str).unwrap_or_default();
                    lines.push(Line::from(vec![
                        Span::styled(format!(" [ {} ▾ ]", current), Styles::focused()),
                        Span::styled("  Tab to change", Styles::text_muted()),
                    ]));
                }
            }
            Block::Metric { label, value } => {
                lines.push(styled(label, Styles::text_secondary()));
                lines.push(Line::from(Span::styled(value.clone(), Styles::metric())));
            }
            Block::Citation(record) => {
                lines.push(styled(record.citation, Styles::text_bold()));
                lines.push(Line::from(""));
                lines.push(labelled("Summary:", Styles::text_bold(), record.summary));
                lines.push(Line::from(""));
                lines.push(labelled("Why this matters:", Styles::text_bold(), record.why));
                lines.push(Line::from(vec![
                    Span::styled("Source: ", Styles::text_secondary()),
                    Span::styled(record.link.to_string(), Styles::link()),
                ]));
            }
            Block::Bullets(items) => {
                for (headline, detail) in items {
                    lines.push(labelled(&format!("• {}", headline), Styles::text_bold(), detail));
                }
            }
            Block::Info(text) => lines.push(styled(text, Styles::info())),
            Block::Caption(text) => lines.push(styled(text, Styles::text_muted())),
        }
        if !matches!(block, Block::Divider) {
            layout.lines.push(Line::from(""));
        }
    }

    layout
}
