//! Core formatting logic (framework-agnostic)
//!
//! Everything here works on the [`record::RequestTokens`] trait and never
//! touches an HTTP framework directly.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **columns**: Fixed column order, labels and widths
//! - **palette**: Color roles
//! - **record**: Token accessor trait and owned request snapshot
//! - **render**: Table renderer trait and `tabled` implementation
//! - **console**: stdout/stderr sink
//! - **formatter**: The per-request table logger

pub mod columns;
pub mod config;
pub mod console;
pub mod error;
pub mod formatter;
pub mod palette;
pub mod record;
pub mod render;

// Re-export key types for convenience
pub use config::{Config, LoggerConfig, TimeFormat};
pub use error::{ReqtableError, Result};
pub use formatter::{create_http_logger, HttpLogger};
