//! Tests for page rendering
//!
//! These tests verify:
//! - The home page shows the selected product's premium and worked example
//! - The resource guide shows the selected topic's citations in order
//! - Rendering is pure and fails on unknown selections

use organic_guide::data::content::{FOOTER, MYTHS, SITE_TITLE};
use organic_guide::{render, resolve_citations, Block, ChartAsset, Page, PageState};

fn home(item: &str) -> PageState {
    PageState {
        item: item.to_string(),
        ..PageState::default()
    }
}

fn guide(topic: &str) -> PageState {
    PageState {
        page: Page::ResourceGuide,
        topic: topic.to_string(),
        ..PageState::default()
    }
}

// =============================================================================
// Home Page
// =============================================================================

#[test]
fn test_home_shows_selected_premium() {
    let view = render(&home("Chocolate")).unwrap();
    assert_eq!(view.page, Page::Home);
    assert!(view.blocks.contains(&Block::Metric {
        label: "Organic Premium for Chocolate".to_string(),
        value: "180%".to_string(),
    }));
    assert!(view.blocks.iter().any(|b| matches!(
        b,
        Block::Paragraph(text) if text.contains("approximately 28.00 dollars")
    )));
}

#[test]
fn test_home_selector_marks_current_item() {
    let view = render(&home("Tea")).unwrap();
    let (_, options, selected) = view.selector().unwrap();
    assert_eq!(options.len(), 7);
    assert_eq!(options[selected], "Tea");
}

#[test]
fn test_home_contains_every_myth_and_chart() {
    let view = render(&PageState::default()).unwrap();
    let myths = view
        .blocks
        .iter()
        .filter(|b| matches!(b, Block::MythFact { .. }))
        .count();
    assert_eq!(myths, MYTHS.len());

    for chart in [
        ChartAsset::Frequency,
        ChartAsset::PieChart,
        ChartAsset::PriceComparison,
    ] {
        assert!(view.blocks.contains(&Block::Chart(chart)));
    }
    assert_eq!(view.blocks.first(), Some(&Block::Title(SITE_TITLE.to_string())));
    assert_eq!(view.blocks.last(), Some(&Block::Caption(FOOTER.to_string())));
}

#[test]
fn test_home_has_no_citations() {
    let view = render(&PageState::default()).unwrap();
    assert!(view.citations().is_empty());
}

#[test]
fn test_home_rejects_unknown_item() {
    let err = render(&home("Kale")).unwrap_err();
    assert!(err.is_unknown_key());
}

#[test]
fn test_home_ignores_topic_selection() {
    let state = PageState {
        topic: "Gardening".to_string(),
        ..PageState::default()
    };
    assert!(render(&state).is_ok());
}

// =============================================================================
// Resource Guide
// =============================================================================

#[test]
fn test_guide_lists_topic_citations_in_order() {
    let topic = "How do prices vary";
    let view = render(&guide(topic)).unwrap();
    let expected: Vec<_> = resolve_citations(topic).unwrap().iter().collect();
    assert_eq!(view.citations(), expected);
    assert!(view
        .blocks
        .contains(&Block::Subheader(format!("📑 {}", topic))));
}

#[test]
fn test_guide_selector_marks_current_topic() {
    let view = render(&guide("Are organic foods actually healthier?")).unwrap();
    let (_, options, selected) = view.selector().unwrap();
    assert_eq!(options[selected], "Are organic foods actually healthier?");
}

#[test]
fn test_guide_rejects_unknown_topic() {
    let err = render(&guide("Gardening")).unwrap_err();
    assert_eq!(err.to_string(), "unknown topic: Gardening");
}

#[test]
fn test_guide_ignores_item_selection() {
    let state = PageState {
        item: "Kale".to_string(),
        ..guide("What are pesticides?")
    };
    assert!(render(&state).is_ok());
}

#[test]
fn test_guide_ends_with_reading_tips() {
    let view = render(&guide("What are pesticides?")).unwrap();
    assert!(view.blocks.iter().any(|b| matches!(b, Block::Bullets(tips) if tips.len() == 6)));
    assert!(view.blocks.iter().any(|b| matches!(b, Block::Info(_))));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_render_is_deterministic() {
    for state in [home("Juices"), guide("How to be safe from pesticides?")] {
        assert_eq!(render(&state).unwrap(), render(&state).unwrap());
    }
}

#[test]
fn test_view_serializes_to_json() {
    let view = render(&home("Chicken")).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["page"], "home");
    assert_eq!(json["blocks"][0]["kind"], "title");
}
