//! Selection resolvers
//!
//! Translates a label chosen in one of the page selectors into the data it
//! stands for: a premium percentage for a product, or the citation list for a
//! topic.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects, only table lookups
//! - **Closed sets**: Selectors only offer labels from `price_items()` and
//!   `topics()`, so a miss is a caller bug and fails with `UnknownKey`
//! - **No defaults**: An unknown label never maps to zero or an empty list
//!
//! # Pricing
//!
//! | Input            | Result |
//! |------------------|--------|
//! | `derived_price(10, 180)` | `28.0` → `"28.00"` |
//! | `derived_price(10, 0)`   | `10.0` → `"10.00"` |

use serde::Serialize;

use crate::data::{CATALOG, CitationRecord, PRICE_TABLE, TOPIC_GROUPS};
use crate::error::{GuideError, KeyKind, Result};

// ============================================================================
// Selection-to-Value
// ============================================================================

/// Resolve the organic premium (in percent) for a product label.
///
/// # Errors
///
/// `GuideError::UnknownKey` if `selection` is not one of `price_items()`.
/// Matching is exact: `"chocolate"` is not `"Chocolate"`.
pub fn resolve_premium(selection: &str) -> Result<u32> {
    CATALOG
        .premium(selection)
        .ok_or_else(|| GuideError::unknown(KeyKind::Item, selection))
}

/// Organic price for a conventional `base` price and a premium percentage.
pub fn derived_price(base: f64, premium_percent: f64) -> f64 {
    base * (1.0 + premium_percent / 100.0)
}

/// Format a price for display with exactly two decimals.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Product labels in selector order.
pub fn price_items() -> Vec<&'static str> {
    PRICE_TABLE.iter().map(|entry| entry.item).collect()
}

/// A resolved premium together with the worked price example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumQuote {
    pub item: String,
    pub premium_percent: u32,
    pub base_price: f64,
    pub organic_price: f64,
}

impl PremiumQuote {
    /// Resolve `item` and apply its premium to `base_price`.
    pub fn for_item(item: &str, base_price: f64) -> Result<Self> {
        let premium_percent = resolve_premium(item)?;
        Ok(Self {
            item: item.to_string(),
            premium_percent,
            base_price,
            organic_price: derived_price(base_price, f64::from(premium_percent)),
        })
    }

    /// Metric label, e.g. `Organic Premium for Tea`
    pub fn metric_label(&self) -> String {
        format!("Organic Premium for {}", self.item)
    }

    /// Metric value, e.g. `200%`
    pub fn metric_value(&self) -> String {
        format!("{}%", self.premium_percent)
    }

    /// The worked example sentence shown under the metric.
    pub fn sentence(&self) -> String {
        format!(
            "If a conventional {} costs {} dollars, the organic version would cost approximately {} dollars.",
            self.item.to_lowercase(),
            format_base(self.base_price),
            format_price(self.organic_price)
        )
    }
}

/// Whole-dollar bases print without decimals ("10"), others with two.
fn format_base(base: f64) -> String {
    if base.fract() == 0.0 && base.abs() < 1e15 {
        format!("{}", base as i64)
    } else {
        format_price(base)
    }
}

// ============================================================================
// Selection-to-Collection
// ============================================================================

/// Resolve the citation records for a topic label, in authored order.
///
/// The returned slice is the same on every call; records shared between
/// topics are returned unmodified under each of them.
///
/// # Errors
///
/// `GuideError::UnknownKey` if `topic` is not one of `topics()`.
pub fn resolve_citations(topic: &str) -> Result<&'static [CitationRecord]> {
    CATALOG
        .citations(topic)
        .ok_or_else(|| GuideError::unknown(KeyKind::Topic, topic))
}

/// Topic labels in selector order.
pub fn topics() -> Vec<&'static str> {
    TOPIC_GROUPS.iter().map(|(topic, _)| *topic).collect()
}
