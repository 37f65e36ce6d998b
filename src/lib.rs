//! Organic Guide Library
//!
//! Static survey content, price premiums and research citations about organic
//! food, with a pure page renderer and a terminal UI on top.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod data;
pub mod error;
pub mod logic;
pub mod theme;
pub mod types;
pub mod ui;
pub mod view;

// Re-export main types for convenience
pub use config_file::Settings;
pub use data::{CATALOG, CitationRecord, PriceEntry};
pub use error::{GuideError, KeyKind, Result};
pub use logic::resolver::{
    PremiumQuote, derived_price, format_price, price_items, resolve_citations, resolve_premium,
    topics,
};
pub use types::{ChartAsset, Page};
pub use view::{Block, PageState, ViewModel, render};
