//! Page view models
//!
//! `render` turns the current selections into a flat list of display blocks.
//! Every interaction recomputes the whole page from scratch; there is no
//! incremental diffing and no state carried between calls.

use serde::Serialize;

use crate::data::content::{self, FOOTER};
use crate::data::{CitationRecord, DEFAULT_BASE_PRICE};
use crate::error::Result;
use crate::logic::resolver::{self, PremiumQuote};
use crate::types::{ChartAsset, Page};

/// The selections a page is rendered from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub page: Page,
    /// Selected product on the home page
    pub item: String,
    /// Selected topic on the resource guide
    pub topic: String,
    /// Conventional price used for the worked example
    pub base_price: f64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            item: resolver::price_items()[0].to_string(),
            topic: resolver::topics()[0].to_string(),
            base_price: DEFAULT_BASE_PRICE,
        }
    }
}

/// A single display element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    Header(String),
    Subheader(String),
    Paragraph(String),
    Divider,
    MythFact {
        myth: String,
        fact: String,
    },
    Chart(ChartAsset),
    Selector {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Metric {
        label: String,
        value: String,
    },
    Citation(CitationRecord),
    Bullets(Vec<(String, String)>),
    Info(String),
    Caption(String),
}

/// Display-ready content of one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub page: Page,
    pub blocks: Vec<Block>,
}

impl ViewModel {
    /// The selector block on this page, if any
    pub fn selector(&self) -> Option<(&str, &[String], usize)> {
        self.blocks.iter().find_map(|block| match block {
            Block::Selector {
                label,
                options,
                selected,
            } => Some((label.as_str(), options.as_slice(), *selected)),
            _ => None,
        })
    }

    /// Pretty-printed JSON for `print --json`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Citation records in display order
    pub fn citations(&self) -> Vec<&CitationRecord> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Citation(record) => Some(record),
                _ => None,
            })
            .collect()
    }
}

/// Render the page described by `state`.
///
/// # Errors
///
/// `UnknownKey` if the selection for the rendered page is not a known label.
/// Selections belonging to the other page are not consulted.
pub fn render(state: &PageState) -> Result<ViewModel> {
    let mut blocks = match state.page {
        Page::Home => render_home(state)?,
        Page::ResourceGuide => render_resource_guide(state)?,
    };
    blocks.push(Block::Divider);
    blocks.push(Block::Caption(FOOTER.to_string()));
    Ok(ViewModel {
        page: state.page,
        blocks,
    })
}

fn render_home(state: &PageState) -> Result<Vec<Block>> {
    let quote = PremiumQuote::for_item(&state.item, state.base_price)?;
    let items = resolver::price_items();
    let selected = selected_index(&items, &state.item);

    let mut blocks = vec![
        Block::Title(content::SITE_TITLE.to_string()),
        Block::Header(content::HOME_HEADER.to_string()),
        Block::Subheader(content::HOME_SUBHEADER.to_string()),
        Block::Paragraph(content::HOME_INTRO.to_string()),
        Block::Divider,
        Block::Header(content::MYTHS_HEADER.to_string()),
    ];
    blocks.extend(content::MYTHS.iter().map(|m| Block::MythFact {
        myth: m.myth.to_string(),
        fact: m.fact.to_string(),
    }));
    blocks.extend([
        Block::Divider,
        Block::Header(content::FREQUENCY_HEADER.to_string()),
        Block::Paragraph(content::FREQUENCY_TEXT.to_string()),
        Block::Chart(ChartAsset::Frequency),
        Block::Divider,
        Block::Header(content::SHARE_HEADER.to_string()),
        Block::Paragraph(content::SHARE_TEXT.to_string()),
        Block::Chart(ChartAsset::PieChart),
        Block::Divider,
        Block::Header(content::PRICE_HEADER.to_string()),
        Block::Paragraph(content::PRICE_TEXT.to_string()),
        Block::Selector {
            label: content::PRICE_SELECTOR_LABEL.to_string(),
            options: items.iter().map(|s| s.to_string()).collect(),
            selected,
        },
        Block::Metric {
            label: quote.metric_label(),
            value: quote.metric_value(),
        },
        Block::Paragraph(quote.sentence()),
        Block::Chart(ChartAsset::PriceComparison),
        Block::Paragraph(content::PRICE_VERDICT.to_string()),
        Block::Divider,
        Block::Header(content::LEARN_MORE_HEADER.to_string()),
        Block::Paragraph(content::LEARN_MORE_TEXT.to_string()),
    ]);
    Ok(blocks)
}

fn render_resource_guide(state: &PageState) -> Result<Vec<Block>> {
    let records = resolver::resolve_citations(&state.topic)?;
    let topics = resolver::topics();
    let selected = selected_index(&topics, &state.topic);

    let mut blocks = vec![
        Block::Title(content::GUIDE_TITLE.to_string()),
        Block::Paragraph(content::GUIDE_INTRO.to_string()),
        Block::Divider,
        Block::Selector {
            label: content::TOPIC_SELECTOR_LABEL.to_string(),
            options: topics.iter().map(|s| s.to_string()).collect(),
            selected,
        },
        Block::Subheader(format!("📑 {}", state.topic)),
    ];
    for record in records {
        blocks.push(Block::Citation(*record));
        blocks.push(Block::Divider);
    }
    blocks.extend([
        Block::Header(content::READING_HEADER.to_string()),
        Block::Paragraph(content::READING_TEXT.to_string()),
        Block::Bullets(
            content::READING_TIPS
                .iter()
                .map(|tip| (tip.headline.to_string(), tip.detail.to_string()))
                .collect(),
        ),
        Block::Info(content::READING_NOTE.to_string()),
    ]);
    Ok(blocks)
}

/// Position of a resolved label among the selector options.
///
/// Only called after the label resolved, so it is always present.
fn selected_index(options: &[&str], label: &str) -> usize {
    options.iter().position(|o| *o == label).unwrap_or_default()
}
