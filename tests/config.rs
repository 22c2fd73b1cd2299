//! Configuration system tests
//!
//! Tests for config paths and shell config loading/saving.

use std::time::Duration;

use entity_replacer::config::EntityConfig;
use entity_replacer::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("entity-replacer"));
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
// Shell Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EntityConfig::default();
    assert_eq!(config.copy_feedback_ms, 2000);
    assert_eq!(config.copy_feedback(), Duration::from_secs(2));
    assert!(config.echo_document);
    assert_eq!(config.prompt, "> ");
    assert_eq!(config.status_width, 80);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EntityConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EntityConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "copy_feedback_ms: [not, a, number]").unwrap();
    assert_eq!(EntityConfig::load_from(&path), EntityConfig::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "echo_document: false\nprompt: \"entity> \"\n").unwrap();

    let config = EntityConfig::load_from(&path);
    assert!(!config.echo_document);
    assert_eq!(config.prompt, "entity> ");
    assert_eq!(config.copy_feedback_ms, 2000);
    assert_eq!(config.status_width, 80);
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EntityConfig {
        copy_feedback_ms: 500,
        echo_document: false,
        prompt: "$ ".to_string(),
        status_width: 100,
    };

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(EntityConfig::load_from(&path), config);
}

#[test]
fn test_first_load_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entity-replacer").join("config.yaml");

    let config = EntityConfig::load_or_create(&path);
    assert_eq!(config, EntityConfig::default());
    assert!(path.exists());

    // An existing file is read, not overwritten
    std::fs::write(&path, "status_width: 40\n").unwrap();
    assert_eq!(EntityConfig::load_or_create(&path).status_width, 40);
}
