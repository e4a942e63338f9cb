//! Tests for configuration loading and graceful degradation
//!
//! Note: uses the serial_test crate to prevent ENV variable race
//! conditions. Tests that manipulate EVENTHUB_CONFIG or
//! EVENTHUB_DATA_DIR are marked with #[serial] so they run sequentially.

use std::env;
use std::path::{Path, PathBuf};

use serial_test::serial;

use eventhub_common::config::{
    self, TomlConfig, DEFAULT_HOST, DEFAULT_PORT, ENV_CONFIG_FILE, ENV_DATA_DIR,
};

#[test]
fn test_defaults() {
    let config = TomlConfig::default();
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert!(config.catalog.data_dir.is_none());
}

#[test]
fn test_parse_full_config() {
    let config = TomlConfig::parse(
        r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [catalog]
        data_dir = "/srv/eventhub/data"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.catalog.data_dir, Some(PathBuf::from("/srv/eventhub/data")));
}

#[test]
fn test_parse_partial_config_fills_defaults() {
    let config = TomlConfig::parse("[server]\nport = 9001\n").unwrap();
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert_eq!(config.server.port, 9001);
    assert!(config.catalog.data_dir.is_none());
}

#[test]
fn test_parse_rejects_malformed_toml() {
    assert!(TomlConfig::parse("[server\nport = ").is_err());
}

#[test]
#[serial]
fn test_missing_config_file_degrades_to_defaults() {
    env::remove_var(ENV_CONFIG_FILE);
    let config = config::load_config(Some(Path::new("/nonexistent/eventhub/config.toml")));
    assert_eq!(config.server.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_unreadable_config_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not toml = [").unwrap();

    let config = config::load_config(Some(&path));
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert_eq!(config.server.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_config_file_loaded_from_cli_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 6001\n").unwrap();

    let config = config::load_config(Some(&path));
    assert_eq!(config.server.port, 6001);
}

#[test]
#[serial]
fn test_config_path_env_var_used_when_no_cli_arg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 6002\n").unwrap();

    env::set_var(ENV_CONFIG_FILE, &path);
    let config = config::load_config(None);
    env::remove_var(ENV_CONFIG_FILE);

    assert_eq!(config.server.port, 6002);
}

#[test]
#[serial]
fn test_data_dir_priority_cli_over_env_over_file() {
    let mut config = TomlConfig::default();
    config.catalog.data_dir = Some(PathBuf::from("/from/config"));

    env::set_var(ENV_DATA_DIR, "/from/env");

    // CLI argument wins over both
    let resolved = config::resolve_data_dir(Some(Path::new("/from/cli")), &config);
    assert_eq!(resolved, Some(PathBuf::from("/from/cli")));

    // Then the environment variable
    let resolved = config::resolve_data_dir(None, &config);
    assert_eq!(resolved, Some(PathBuf::from("/from/env")));

    env::remove_var(ENV_DATA_DIR);

    // Then the config file
    let resolved = config::resolve_data_dir(None, &config);
    assert_eq!(resolved, Some(PathBuf::from("/from/config")));
}

#[test]
#[serial]
fn test_data_dir_defaults_to_embedded() {
    env::remove_var(ENV_DATA_DIR);
    let resolved = config::resolve_data_dir(None, &TomlConfig::default());
    assert!(resolved.is_none());
}
