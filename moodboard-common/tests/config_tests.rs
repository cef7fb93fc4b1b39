//! Integration tests for configuration loading
//!
//! Tests the implementation of:
//! - Missing TOML files SHALL NOT cause termination
//! - Malformed TOML files are reported as configuration errors
//! - Environment variables override TOML values
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate process environment are marked with #[serial].

use moodboard_common::config::{load_toml_config, BoardConfig, CliOverrides, TomlConfig};
use moodboard_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::time::Duration;

fn clear_board_env() {
    for key in [
        "PORT",
        "MOODBOARD_ENV",
        "DASHBOARD_URL",
        "ALLOWED_ORIGINS",
        "MOODBOARD_TICK_SECS",
        "SPOTIFY_CLIENT_ID",
        "SPOTIFY_CLIENT_SECRET",
        "SPOTIFY_REDIRECT_URI",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_missing_toml_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = load_toml_config(Some(&path)).expect("missing file must not be an error");
    assert!(config.is_none());
    assert!(load_toml_config(None).unwrap().is_none());
}

#[test]
fn test_full_toml_file_parses() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
port = 6001
production = true
dashboard_url = "https://board.example"
allowed_origins = ["https://board.example"]
tick_interval_secs = 5

[logging]
level = "debug"

[spotify]
client_id = "abc"
client_secret = "shh"
redirect_uri = "https://api.example/auth/callback"
"#
    )
    .unwrap();

    let config = load_toml_config(Some(file.path())).unwrap().unwrap();
    assert_eq!(config.port, Some(6001));
    assert_eq!(config.production, Some(true));
    assert_eq!(config.tick_interval_secs, Some(5));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.spotify.client_id.as_deref(), Some("abc"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number").unwrap();

    let result = load_toml_config(Some(file.path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_process_env_overrides_toml() {
    clear_board_env();
    env::set_var("PORT", "6123");
    env::set_var("SPOTIFY_REDIRECT_URI", "http://localhost:6123/auth/callback");
    env::set_var("MOODBOARD_TICK_SECS", "3");

    let toml = TomlConfig {
        port: Some(7000),
        ..Default::default()
    };
    let config = BoardConfig::resolve(&CliOverrides::default(), toml).unwrap();

    assert_eq!(config.port, 6123);
    assert_eq!(config.spotify.redirect_uri, "http://localhost:6123/auth/callback");
    assert_eq!(config.tick_interval, Duration::from_secs(3));

    clear_board_env();
}

#[test]
#[serial]
fn test_process_env_absent_falls_back_to_toml() {
    clear_board_env();

    let toml = TomlConfig {
        port: Some(7000),
        dashboard_url: Some("https://board.example".to_string()),
        ..Default::default()
    };
    let config = BoardConfig::resolve(&CliOverrides::default(), toml).unwrap();

    assert_eq!(config.port, 7000);
    assert_eq!(config.dashboard_url, "https://board.example");
    assert!(config
        .allowed_origins
        .contains(&"https://board.example".to_string()));
}
