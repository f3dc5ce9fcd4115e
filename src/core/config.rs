//! Configuration management for reqtable.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults that show every column.

use crate::core::error::{Result, ReqtableError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// How the timestamp column is rendered
///
/// Parsed case-insensitively from both TOML and the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TimeFormat {
    /// ISO-8601 UTC with milliseconds, e.g. `2026-10-19T12:34:56.789Z`
    #[default]
    Iso,
    /// Local time of day, e.g. `3:04:05 PM`
    Locale,
}

impl FromStr for TimeFormat {
    type Err = ReqtableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(TimeFormat::Iso),
            "locale" => Ok(TimeFormat::Locale),
            other => Err(ReqtableError::ConfigError(format!(
                "Unknown time format '{other}' (expected 'iso' or 'locale')"
            ))),
        }
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = ReqtableError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::Iso => f.write_str("iso"),
            TimeFormat::Locale => f.write_str("locale"),
        }
    }
}

/// Per-column visibility and timestamp style for the request table
///
/// Read-only once handed to [`crate::create_http_logger`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggerConfig {
    #[serde(default = "default_true")]
    pub show_timestamp: bool,
    #[serde(default = "default_true")]
    pub show_method: bool,
    #[serde(default = "default_true")]
    pub show_url: bool,
    #[serde(default = "default_true")]
    pub show_status: bool,
    #[serde(default = "default_true")]
    pub show_response_time: bool,
    #[serde(default = "default_true")]
    pub show_client_ip: bool,
    #[serde(default = "default_true")]
    pub show_user_agent: bool,
    #[serde(default = "default_true")]
    pub show_referrer: bool,
    #[serde(default = "default_true")]
    pub show_response_size: bool,
    #[serde(default = "default_true")]
    pub show_http_version: bool,
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Demo server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_method: true,
            show_url: true,
            show_status: true,
            show_response_time: true,
            show_client_ip: true,
            show_user_agent: true,
            show_referrer: true,
            show_response_size: true,
            show_http_version: true,
            time_format: TimeFormat::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl LoggerConfig {
    /// Configuration with every column hidden
    pub fn none() -> Self {
        Self {
            show_timestamp: false,
            show_method: false,
            show_url: false,
            show_status: false,
            show_response_time: false,
            show_client_ip: false,
            show_user_agent: false,
            show_referrer: false,
            show_response_size: false,
            show_http_version: false,
            time_format: TimeFormat::default(),
        }
    }

    /// Number of visible columns
    pub fn visible_count(&self) -> usize {
        [
            self.show_timestamp,
            self.show_method,
            self.show_url,
            self.show_status,
            self.show_response_time,
            self.show_client_ip,
            self.show_user_agent,
            self.show_referrer,
            self.show_response_size,
            self.show_http_version,
        ]
        .iter()
        .filter(|shown| **shown)
        .count()
    }

    fn merge_env(&mut self) {
        let flags: [(&str, &mut bool); 10] = [
            ("REQTABLE_SHOW_TIMESTAMP", &mut self.show_timestamp),
            ("REQTABLE_SHOW_METHOD", &mut self.show_method),
            ("REQTABLE_SHOW_URL", &mut self.show_url),
            ("REQTABLE_SHOW_STATUS", &mut self.show_status),
            ("REQTABLE_SHOW_RESPONSE_TIME", &mut self.show_response_time),
            ("REQTABLE_SHOW_CLIENT_IP", &mut self.show_client_ip),
            ("REQTABLE_SHOW_USER_AGENT", &mut self.show_user_agent),
            ("REQTABLE_SHOW_REFERRER", &mut self.show_referrer),
            ("REQTABLE_SHOW_RESPONSE_SIZE", &mut self.show_response_size),
            ("REQTABLE_SHOW_HTTP_VERSION", &mut self.show_http_version),
        ];
        for (var, flag) in flags {
            if let Ok(value) = env::var(var) {
                if let Some(parsed) = parse_bool(&value) {
                    *flag = parsed;
                }
            }
        }

        if let Ok(time_format) = env::var("REQTABLE_TIME_FORMAT") {
            if let Ok(tf) = time_format.parse() {
                self.time_format = tf;
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ReqtableError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default location of the user config file
    ///
    /// `<config_dir>/reqtable/config.toml`, e.g.
    /// `~/.config/reqtable/config.toml` on Linux.
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reqtable").join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. REQTABLE_CONFIG env var
    /// 2. User config file (see [`Config::user_config_file`])
    /// 3. ./reqtable.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("REQTABLE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match Self::user_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ if Path::new("reqtable.toml").exists() => Self::from_file("reqtable.toml")?,
                _ => Self::default(),
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit file, then apply env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Values that fail to parse are ignored.
    pub fn merge_env(&mut self) {
        self.logger.merge_env();

        if let Ok(host) = env::var("REQTABLE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("REQTABLE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ReqtableError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ReqtableError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Visible columns: {} of 10",
            self.logger.visible_count()
        );
        tracing::info!("  Time format: {}", self.logger.time_format);
        tracing::info!("  Server: {}:{}", self.server.host, self.server.port);
    }
}
