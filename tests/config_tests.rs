//! Tests for settings files
//!
//! These tests verify:
//! - Every field loads from a real file
//! - Partial files fall back to defaults
//! - Invalid JSON, unknown fields and invalid values are rejected

use organic_guide::{Page, Settings};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_settings(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_settings(
        r#"{
            "base_price": 4.25,
            "assets_dir": "/srv/guide",
            "initial_page": "resource-guide",
            "initial_item": "Tea",
            "initial_topic": "How do prices vary"
        }"#,
    );

    let loaded = Settings::load_from_file(file.path()).unwrap();
    assert_eq!(
        loaded,
        Settings {
            base_price: 4.25,
            assets_dir: PathBuf::from("/srv/guide"),
            initial_page: Page::ResourceGuide,
            initial_item: Some("Tea".to_string()),
            initial_topic: Some("How do prices vary".to_string()),
        }
    );
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_settings(r#"{ "initial_page": "resource-guide" }"#);
    let settings = Settings::load_from_file(file.path()).unwrap();
    assert_eq!(settings.initial_page, Page::ResourceGuide);
    assert_eq!(settings.base_price, 10.0);
    assert!(settings.initial_item.is_none());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_invalid_json_rejected() {
    let file = write_settings("{ not json");
    let err = Settings::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse settings JSON"));
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_settings(r#"{ "base_prise": 12.0 }"#);
    assert!(Settings::load_from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Settings::load_from_file(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_validate_rejects_bad_values() {
    let negative = Settings {
        base_price: -1.0,
        ..Settings::default()
    };
    assert!(negative.validate().is_err());

    let overflowing = Settings {
        base_price: f64::MAX,
        ..Settings::default()
    };
    assert!(overflowing.validate().is_err());

    let unknown_item = Settings {
        initial_item: Some("Kale".to_string()),
        ..Settings::default()
    };
    assert!(unknown_item.validate().is_err());

    let unknown_topic = Settings {
        initial_topic: Some("Gardening".to_string()),
        ..Settings::default()
    };
    assert!(unknown_topic.validate().is_err());
}

#[test]
fn test_initial_state_follows_settings() {
    let settings = Settings {
        base_price: 3.0,
        initial_item: Some("Juices".to_string()),
        ..Settings::default()
    };
    let state = settings.initial_state();
    assert_eq!(state.page, Page::Home);
    assert_eq!(state.item, "Juices");
    assert_eq!(state.base_price, 3.0);
}

#[test]
fn test_chart_availability_follows_assets_dir() {
    use organic_guide::ChartAsset;

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/frequency.jpg"), b"jpg").unwrap();

    let settings = Settings {
        assets_dir: dir.path().to_path_buf(),
        ..Settings::default()
    };
    assert!(settings.chart_available(ChartAsset::Frequency));
    assert!(!settings.chart_available(ChartAsset::PieChart));
}
