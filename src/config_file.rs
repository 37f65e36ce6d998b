//! Settings file handling
//!
//! Settings are optional: every field has a default, a JSON file may override
//! some of them, and CLI flags override the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{DEFAULT_BASE_PRICE, PRICE_TABLE};
use crate::error::GuideError;
use crate::logic::resolver::{derived_price, resolve_citations, resolve_premium};
use crate::types::{ChartAsset, Page};
use crate::view::PageState;

/// User settings for the guide
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Conventional price used for the worked premium example
    pub base_price: f64,
    /// Directory the chart images are resolved against
    pub assets_dir: PathBuf,
    /// Page shown at startup
    pub initial_page: Page,
    /// Product selected at startup (first product when unset)
    pub initial_item: Option<String>,
    /// Topic selected at startup (first topic when unset)
    pub initial_topic: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            assets_dir: PathBuf::from("."),
            initial_page: Page::Home,
            initial_item: None,
            initial_topic: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Validate the settings
    ///
    /// The base price must be a finite, non-negative number whose derived
    /// price stays finite for every product, and initial selections must be
    /// labels the selectors actually offer.
    pub fn validate(&self) -> Result<()> {
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(GuideError::config(format!(
                "base price must be a non-negative number, got {}",
                self.base_price
            ))
            .into());
        }

        let max_premium = PRICE_TABLE
            .iter()
            .map(|entry| entry.premium_percent)
            .max()
            .unwrap_or_default();
        if !derived_price(self.base_price, f64::from(max_premium)).is_finite() {
            return Err(GuideError::config(format!(
                "base price {} is too large to apply a {}% premium",
                self.base_price, max_premium
            ))
            .into());
        }

        if let Some(item) = &self.initial_item {
            resolve_premium(item).context("Invalid initial item")?;
        }

        if let Some(topic) = &self.initial_topic {
            resolve_citations(topic).context("Invalid initial topic")?;
        }

        Ok(())
    }

    /// Absolute or assets-relative location of a chart image
    pub fn chart_path(&self, chart: ChartAsset) -> PathBuf {
        self.assets_dir.join(chart.relative_path())
    }

    /// Whether the chart image exists under the assets directory
    pub fn chart_available(&self, chart: ChartAsset) -> bool {
        self.chart_path(chart).is_file()
    }

    /// Initial page state described by these settings
    pub fn initial_state(&self) -> PageState {
        let mut state = PageState {
            page: self.initial_page,
            base_price: self.base_price,
            ..PageState::default()
        };
        if let Some(item) = &self.initial_item {
            state.item = item.clone();
        }
        if let Some(topic) = &self.initial_topic {
            state.topic = topic.clone();
        }
        state
    }
}
