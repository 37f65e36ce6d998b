//! Property-Based Tests for Organic Guide
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Enum string round-trips (to_string → parse)
//! - Derived price arithmetic
//! - Unknown labels never resolve
//! - Plain-text pages stay within the requested width

use organic_guide::ui::text::wrap_lines;
use organic_guide::ui::render_text;
use organic_guide::{
    Page, PageState, Settings, derived_price, format_price, price_items, render,
    resolve_citations, resolve_premium, topics,
};
use proptest::prelude::*;
use textwrap::core::display_width;

// =============================================================================
// Page Enum Property Tests
// =============================================================================

fn page_strategy() -> impl Strategy<Value = Page> {
    prop_oneof![Just(Page::Home), Just(Page::ResourceGuide)]
}

proptest! {
    /// Page: to_string → parse round-trip is identity
    #[test]
    fn page_roundtrip(page in page_strategy()) {
        let s = page.to_string();
        let parsed: Page = s.parse().expect("Should parse");
        prop_assert_eq!(page, parsed);
    }

    /// Page: index → from_index round-trip is identity
    #[test]
    fn page_index_roundtrip(page in page_strategy()) {
        prop_assert_eq!(Page::from_index(page.index()), Some(page));
    }
}

// =============================================================================
// Derived Price Property Tests
// =============================================================================

proptest! {
    /// Derived price is never below the base for a non-negative premium
    #[test]
    fn derived_price_not_below_base(base in 0.0f64..10_000.0, premium in 0u32..1_000) {
        prop_assert!(derived_price(base, f64::from(premium)) >= base);
    }

    /// Derived price grows with the premium
    #[test]
    fn derived_price_monotonic(base in 0.01f64..10_000.0, a in 0u32..1_000, b in 0u32..1_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(derived_price(base, f64::from(low)) <= derived_price(base, f64::from(high)));
    }

    /// Formatted prices always carry exactly two decimals
    #[test]
    fn formatted_price_has_two_decimals(value in 0.0f64..1_000_000.0) {
        let formatted = format_price(value);
        let (_, decimals) = formatted.split_once('.').expect("Should have a decimal point");
        prop_assert_eq!(decimals.len(), 2);
    }
}

// =============================================================================
// Lookup Property Tests
// =============================================================================

proptest! {
    /// Labels outside the price table never resolve
    #[test]
    fn unknown_items_are_rejected(label in "[a-z ]{0,20}") {
        prop_assume!(!price_items().contains(&label.as_str()));
        prop_assert!(resolve_premium(&label).unwrap_err().is_unknown_key());
    }

    /// Labels outside the topic list never resolve
    #[test]
    fn unknown_topics_are_rejected(label in "[A-Za-z ]{0,30}") {
        prop_assume!(!topics().contains(&label.as_str()));
        prop_assert!(resolve_citations(&label).is_err());
    }

    /// Every valid combination of selections renders
    #[test]
    fn valid_selections_render(
        page in page_strategy(),
        item in prop::sample::select(price_items()),
        topic in prop::sample::select(topics()),
        base_price in 0.0f64..1_000.0,
    ) {
        let state = PageState {
            page,
            item: item.to_string(),
            topic: topic.to_string(),
            base_price,
        };
        let view = render(&state).expect("Should render");
        prop_assert_eq!(view.page, page);
        prop_assert!(view.selector().is_some());
    }
}

// =============================================================================
// Wrapping Property Tests
// =============================================================================

proptest! {
    /// No wrapped line exceeds the width, wide glyphs included
    #[test]
    fn wrapped_lines_fit(text in "[a-zA-Z界📑 ]{0,200}", width in 2usize..80) {
        for line in wrap_lines(&text, width) {
            prop_assert!(display_width(&line) <= width);
        }
    }

    /// Wrapping keeps every word, in order
    #[test]
    fn wrapping_preserves_words(words in prop::collection::vec("[a-z]{1,12}", 0..40), width in 12usize..80) {
        let text = words.join("  ");
        let wrapped = wrap_lines(&text, width).join(" ");
        prop_assert_eq!(wrapped.split_whitespace().collect::<Vec<_>>(), words);
    }

    /// Printed pages fit the width apart from unbreakable source links
    #[test]
    fn printed_pages_fit_width(
        page in page_strategy(),
        item in prop::sample::select(price_items()),
        topic in prop::sample::select(topics()),
        width in 20usize..120,
    ) {
        let state = PageState {
            page,
            item: item.to_string(),
            topic: topic.to_string(),
            ..PageState::default()
        };
        let view = render(&state).expect("Should render");
        let text = render_text(&view, &Settings::default(), width);
        for line in text.lines().filter(|line| !line.starts_with("Source: ")) {
            prop_assert!(display_width(line) <= width, "{:?} wider than {}", line, width);
        }
    }
}
