//! Configuration system tests
//!
//! Tests for config paths and highlighter config loading.

use std::fs;

use posthover::color::CssColor;
use posthover::config::HighlightConfig;
use posthover::config_paths;
use posthover::Selector;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("posthover"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Highlight Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = HighlightConfig::default();
    assert_eq!(config.selector, Selector::class("post"));
    assert_eq!(config.hover_color, CssColor::HOVER_DEFAULT);
    assert_eq!(config.neutral_color, CssColor::NEUTRAL_DEFAULT);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "selector: \"article.post, li.entry\"\nhover_color: \"#FFF3E0\"\napply_neutral_on_load: true\n",
    )
    .unwrap();

    let config = HighlightConfig::load_from(&path).unwrap();
    assert_eq!(config.selector.compounds().len(), 2);
    assert_eq!(config.hover_color.css_text(), "#fff3e0");
    assert_eq!(config.neutral_color.css_text(), "white");
    assert!(config.apply_neutral_on_load);
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HighlightConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.contains("Failed to read config"));
}

#[test]
fn test_load_from_invalid_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "hover_color: 12\n").unwrap();
    let err = HighlightConfig::load_from(&path).unwrap_err();
    assert!(err.contains("Failed to parse config"));
}

#[test]
fn test_config_serialize_deserialize() {
    let config = HighlightConfig {
        neutral_color: CssColor::parse("transparent").unwrap(),
        ..HighlightConfig::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("neutral_color: transparent"));
    let parsed: HighlightConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}
