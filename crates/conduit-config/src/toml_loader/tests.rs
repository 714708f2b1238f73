//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_conduit_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, conduit_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
name = "deepseek-chat"
max_tokens = 1024

[server]
python_command = "python3"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "deepseek-chat");
    assert_eq!(config.model.max_tokens, 1024);
    assert_eq!(config.server.python_command, "python3");
    // Defaults preserved
    assert_eq!(config.server.node_command, "node");
    assert_eq!(config.model.timeout_secs, 120);
    assert!(!config.conversation.persist_answers);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, conduit_common::ConfigError::ParseError(_)));
}

#[test]
fn load_does_not_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nmax_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.max_tokens, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conduit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4o");
    assert_eq!(config.server.request_timeout_secs, 30);
    assert_eq!(config.logging.level, LogLevel::Warn);
}

#[test]
fn default_config_path_ends_with_conduit() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("conduit/config.toml"));
    }
}

#[test]
fn logging_level_parses_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
}
