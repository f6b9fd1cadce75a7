//! Configuration system tests
//!
//! Tests for config paths, editor config loading/saving and CLI overrides.

use jotter::cli::CliArgs;
use jotter::config::EditorConfig;
use jotter::config_paths;
use jotter::editable::{BufferLimits, MAX_NAME, MAX_TEXT};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("jotter"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.max_name_length, MAX_NAME);
    assert_eq!(config.max_text_length, MAX_TEXT);
    assert!(config.show_menu);
    assert_eq!(config.limits(), BufferLimits::default());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = EditorConfig {
        max_name_length: 20,
        max_text_length: 200,
        show_menu: false,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_text_length: [not a number").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        max_name_length: 16,
        max_text_length: 128,
        show_menu: false,
    };

    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "show_menu: false\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert!(!config.show_menu);
    assert_eq!(config.max_text_length, MAX_TEXT);
}

// ========================================================================
// CLI Override Tests
// ========================================================================

#[test]
fn test_cli_overrides_file_config() {
    use clap::Parser;

    let file_config = EditorConfig {
        max_name_length: 16,
        max_text_length: 128,
        show_menu: true,
    };
    let args = CliArgs::parse_from(["jotter", "--max-name", "8", "notes.txt"]);
    let startup = args.into_config(file_config).unwrap();

    assert_eq!(startup.editor.max_name_length, 8);
    assert_eq!(startup.editor.max_text_length, 128);
    assert!(startup.editor.show_menu);
    assert_eq!(startup.initial_name.as_deref(), Some("notes.txt"));
}

#[test]
fn test_cli_config_path() {
    use clap::Parser;

    let args = CliArgs::parse_from(["jotter", "--config", "/tmp/custom.yaml"]);
    assert_eq!(
        args.config_path().map(|p| p.to_string_lossy().into_owned()),
        Some("/tmp/custom.yaml".to_string())
    );
}
