//! Type-safe identifiers for pages and chart assets
//!
//! Pages and charts form closed sets, so they are enums rather than strings.
//! Price items and topics stay string-keyed because they are data, not code.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The two pages offered by the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Page {
    #[default]
    #[strum(to_string = "Home", serialize = "home")]
    Home,
    #[strum(to_string = "Resource Guide", serialize = "resource-guide", serialize = "guide")]
    ResourceGuide,
}

impl Page {
    /// Position of this page in the sidebar (0-indexed)
    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::ResourceGuide => 1,
        }
    }

    /// Page at a sidebar position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Number of pages in the sidebar
    pub fn count() -> usize {
        Self::iter().count()
    }
}

/// Pre-generated chart images embedded in the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartAsset {
    /// How often students buy organic
    Frequency,
    /// Share of groceries that are organic
    PieChart,
    /// Organic premium per product
    PriceComparison,
}

impl ChartAsset {
    /// Path of the image relative to the assets directory
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Frequency => "images/frequency.jpg",
            Self::PieChart => "images/pieChart.jpg",
            Self::PriceComparison => "images/priceComparison.jpg",
        }
    }

    /// Short caption shown in place of the image
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Frequency => "Frequency of buying organic",
            Self::PieChart => "Share of groceries that are organic",
            Self::PriceComparison => "Organic premium by product",
        }
    }
}
