//! Tests for configuration files and env overrides
//!
//! - Loading a TOML file from disk
//! - Env overrides on top of a file
//! - Invalid files surface as configuration errors
//! - show-config reflects the loaded file

use std::env;
use std::fs;

use reqtable::cli::commands::config::config_response;
use reqtable::cli::load_config;
use reqtable::{Config, TimeFormat};
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("reqtable.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [logger]
            show_client_ip = false
            time_format = "locale"

            [server]
            port = 4100
        "#,
    );

    let config = load_config(Some(&path)).unwrap();

    assert!(!config.logger.show_client_ip);
    assert!(config.logger.show_method);
    assert_eq!(config.logger.time_format, TimeFormat::Locale);
    assert_eq!(config.server.port, 4100);
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [logger]
            show_referrer = true
        "#,
    );

    env::set_var("REQTABLE_SHOW_REFERRER", "off");
    let config = Config::load_from(&path);
    env::remove_var("REQTABLE_SHOW_REFERRER");

    assert!(!config.unwrap().logger.show_referrer);
}

#[test]
#[serial]
fn test_env_config_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [logger]
            show_http_version = false
        "#,
    );

    env::set_var("REQTABLE_CONFIG", &path);
    let config = Config::load();
    env::remove_var("REQTABLE_CONFIG");

    assert!(!config.unwrap().logger.show_http_version);
}

#[test]
#[serial]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.is_config());
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [server]
            port = 0
        "#,
    );
    assert!(load_config(Some(&path)).unwrap_err().is_config());

    let path = write_config(
        &dir,
        r#"
            [logger]
            show_url = "yes please"
        "#,
    );
    assert!(load_config(Some(&path)).unwrap_err().is_config());
}

#[test]
#[serial]
fn test_show_config_reflects_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            [logger]
            show_timestamp = false
            show_response_size = false
        "#,
    );

    let config = load_config(Some(&path)).unwrap();
    let response = config_response(&config, true);

    let hidden: Vec<_> = response
        .columns
        .iter()
        .filter(|c| !c.visible)
        .map(|c| c.label)
        .collect();
    assert_eq!(hidden, vec!["Timestamp", "Response Size"]);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["columns"].as_array().unwrap().len(), 10);
    assert_eq!(json["time_format"], "iso");
}
