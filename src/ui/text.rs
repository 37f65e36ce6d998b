//! Plain-text page rendering for non-interactive output

use crate::cli::ListKind;
use crate::config_file::Settings;
use crate::data::PRICE_TABLE;
use crate::logic::resolver;
use crate::view::{Block, ViewModel};
use textwrap::core::display_width;

/// Wrap `text` at word boundaries into lines at most `width` columns wide
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Render `view` as wrapped plain text, one block per paragraph
pub fn render_text(view: &ViewModel, settings: &Settings, width: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    let push_wrapped = |out: &mut Vec<String>, text: &str| {
        out.extend(wrap_lines(text, width));
    };

    for block in &view.blocks {
        match block {
            Block::Title(text) => {
                push_wrapped(&mut out, text);
                out.push("=".repeat(width.min(display_width(text).max(1))));
            }
            Block::Header(text) => {
                push_wrapped(&mut out, text);
                out.push("-".repeat(width.min(display_width(text).max(1))));
            }
            Block::Subheader(text) | Block::Paragraph(text) | Block::Caption(text) => {
                push_wrapped(&mut out, text);
            }
            Block::Info(text) => push_wrapped(&mut out, &format!("Note: {}", text)),
            Block::Divider => out.push("-".repeat(width)),
            Block::MythFact { myth, fact } => {
                push_wrapped(&mut out, &format!("MYTH: {}", myth));
                push_wrapped(&mut out, &format!("FACT: {}", fact));
            }
            Block::Chart(chart) => {
                let mut line = format!("[chart] {} ({})", chart.caption(), chart.relative_path());
                if !settings.chart_available(*chart) {
                    line.push_str(" (missing)");
                }
                push_wrapped(&mut out, &line);
            }
            Block::Selector {
                label,
                options,
                selected,
            } => {
                push_wrapped(&mut out, label);
                for (i, option) in options.iter().enumerate() {
                    let marker = if i == *selected { "(x)" } else { "( )" };
                    push_wrapped(&mut out, &format!("  {} {}", marker, option));
                }
            }
            Block::Metric { label, value } => {
                push_wrapped(&mut out, &format!("{}: {}", label, value));
            }
            Block::Citation(record) => {
                push_wrapped(&mut out, record.citation);
                push_wrapped(&mut out, &format!("Summary: {}", record.summary));
                push_wrapped(&mut out, &format!("Why this matters: {}", record.why));
                out.push(format!("Source: {}", record.link));
            }
            Block::Bullets(items) => {
                for (headline, detail) in items {
                    push_wrapped(&mut out, &format!("* {} {}", headline, detail));
                }
            }
        }
        if !matches!(block, Block::Divider) {
            out.push(String::new());
        }
    }

    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Render the `list` output: products with their premium, or topics
pub fn render_list(what: ListKind) -> String {
    let lines: Vec<String> = match what {
        ListKind::Items => PRICE_TABLE
            .iter()
            .map(|entry| format!("{:<16} {:>4}%", entry.item, entry.premium_percent))
            .collect(),
        ListKind::Topics => resolver::topics().iter().map(|t| t.to_string()).collect(),
    };
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Page;
    use crate::view::{render, PageState};

    #[test]
    fn test_home_text_marks_selected_item() {
        let state = PageState {
            item: "Chocolate".to_string(),
            ..PageState::default()
        };
        let view = render(&state).unwrap();
        let text = render_text(&view, &Settings::default(), 200);
        assert!(text.contains("(x) Chocolate"));
        assert!(text.contains("( ) Tea"));
        assert!(text.contains("Organic Premium for Chocolate: 180%"));
        assert!(text.contains("approximately 28.00 dollars"));
    }

    #[test]
    fn test_guide_text_lists_sources() {
        let state = PageState {
            page: Page::ResourceGuide,
            ..PageState::default()
        };
        let view = render(&state).unwrap();
        let text = render_text(&view, &Settings::default(), 100);
        assert!(text.contains("Source: https://"));
        assert!(text.ends_with('\n'));
        assert!(text.lines().all(|line| display_width(line) <= 100 || line.starts_with("Source:")));
    }

    #[test]
    fn test_wide_glyphs_counted_by_display_width() {
        let view = ViewModel {
            page: Page::ResourceGuide,
            blocks: vec![Block::Subheader("📑 ab".to_string())],
        };
        let text = render_text(&view, &Settings::default(), 2);
        assert_eq!(text, "📑\nab\n");
    }

    #[test]
    fn test_wrap_lines_keeps_words_in_order() {
        let lines = wrap_lines("organic food costs more", 10);
        assert_eq!(lines, ["organic", "food costs", "more"]);
    }

    #[test]
    fn test_item_list_shows_every_premium() {
        let text = render_list(ListKind::Items);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), PRICE_TABLE.len());
        assert_eq!(lines[0], "Dairy/Cereal       40%");
        assert!(lines.iter().any(|l| l.starts_with("Chocolate") && l.ends_with("180%")));
        assert!(lines.iter().any(|l| l.starts_with("Tea") && l.ends_with("200%")));
    }

    #[test]
    fn test_topic_list_follows_guide_order() {
        let text = render_list(ListKind::Topics);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, resolver::topics());
    }
}
