//! Static data tables
//!
//! Everything in this module is authored once and never mutated. The lookup
//! indexes are built lazily on first use and shared read-only for the rest of
//! the process.
//!
//! # Module Structure
//! - `prices` - organic premium table
//! - `citations` - topic-grouped citation catalog
//! - `content` - page prose, myths and reading tips

pub mod content;
mod citations;
mod prices;

pub use citations::TOPIC_GROUPS;
pub use prices::{DEFAULT_BASE_PRICE, PRICE_TABLE};

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One row of the price premium table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceEntry {
    /// Product label, unique within the table
    pub item: &'static str,
    /// Organic premium over the conventional price, in percent
    pub premium_percent: u32,
}

impl PriceEntry {
    pub const fn new(item: &'static str, premium_percent: u32) -> Self {
        Self {
            item,
            premium_percent,
        }
    }
}

/// One academic source in the resource guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitationRecord {
    pub citation: &'static str,
    pub summary: &'static str,
    /// Why the source matters for the page's claims
    pub why: &'static str,
    pub link: &'static str,
}

/// A myth and the fact that corrects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Myth {
    pub myth: &'static str,
    pub fact: &'static str,
}

/// A tip on reading nutrition research
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingTip {
    pub headline: &'static str,
    pub detail: &'static str,
}

/// Read-only lookup indexes over the static tables
pub struct Catalog {
    premiums: HashMap<&'static str, u32>,
    citations: HashMap<&'static str, &'static [CitationRecord]>,
}

impl Catalog {
    fn build() -> Self {
        let premiums = PRICE_TABLE
            .iter()
            .map(|entry| (entry.item, entry.premium_percent))
            .collect();
        let citations = TOPIC_GROUPS
            .iter()
            .map(|(topic, records)| (*topic, *records))
            .collect();
        Self {
            premiums,
            citations,
        }
    }

    /// Premium for an item label, exact match
    pub fn premium(&self, item: &str) -> Option<u32> {
        self.premiums.get(item).copied()
    }

    /// Records for a topic label, exact match
    pub fn citations(&self, topic: &str) -> Option<&'static [CitationRecord]> {
        self.citations.get(topic).copied()
    }
}

/// Process-wide catalog, built on first access
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Serializable snapshot of every static table, used by `export`
#[derive(Debug, Serialize)]
pub struct CatalogExport {
    pub prices: &'static [PriceEntry],
    pub topics: Vec<TopicExport>,
    pub myths: &'static [Myth],
    pub reading_tips: &'static [ReadingTip],
}

#[derive(Debug, Serialize)]
pub struct TopicExport {
    pub topic: &'static str,
    pub records: &'static [CitationRecord],
}

impl CatalogExport {
    /// Pretty-printed JSON of every table
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn snapshot() -> Self {
        Self {
            prices: PRICE_TABLE,
            topics: TOPIC_GROUPS
                .iter()
                .map(|(topic, records)| TopicExport {
                    topic: *topic,
                    records: *records,
                })
                .collect(),
            myths: content::MYTHS,
            reading_tips: content::READING_TIPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_price_items_are_unique() {
        let items: HashSet<_> = PRICE_TABLE.iter().map(|e| e.item).collect();
        assert_eq!(items.len(), PRICE_TABLE.len());
        assert_eq!(PRICE_TABLE.len(), 7);
    }

    #[test]
    fn test_topics_are_unique_and_non_empty() {
        let topics: HashSet<_> = TOPIC_GROUPS.iter().map(|(t, _)| *t).collect();
        assert_eq!(topics.len(), TOPIC_GROUPS.len());
        for (topic, records) in TOPIC_GROUPS {
            assert!(!records.is_empty(), "topic {topic} has no records");
        }
    }

    #[test]
    fn test_catalog_indexes_every_row() {
        for entry in PRICE_TABLE {
            assert_eq!(CATALOG.premium(entry.item), Some(entry.premium_percent));
        }
        for (topic, records) in TOPIC_GROUPS {
            assert_eq!(CATALOG.citations(topic), Some(*records));
        }
        assert_eq!(CATALOG.premium("chocolate"), None);
    }

    #[test]
    fn test_export_snapshot_serializes() {
        let json = serde_json::to_value(CatalogExport::snapshot()).unwrap();
        assert_eq!(json["prices"][3]["item"], "Chocolate");
        assert_eq!(json["prices"][3]["premium_percent"], 180);
        assert_eq!(json["topics"].as_array().unwrap().len(), TOPIC_GROUPS.len());
        assert_eq!(json["myths"].as_array().unwrap().len(), 4);
    }
}
