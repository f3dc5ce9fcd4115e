//! reqtable - colored per-request console tables
//!
//! Prints every completed HTTP request as a small bordered table with
//! one header row and one data row. Each of the ten columns can be
//! switched off through [`LoggerConfig`].
//!
//! # Architecture
//!
//! - **core**: Formatting logic (framework-agnostic)
//!   - config, error, columns, palette, record, render, console, formatter
//!
//! - **http**: axum middleware adapter (depends on core)
//!
//! - **cli**: Demo server and config inspection (depends on core, http)
//!
//! # Example
//!
//! ```no_run
//! use axum::{middleware, routing::get, Router};
//! use reqtable::{create_http_logger, http::middleware::log_request, LoggerConfig};
//!
//! let logger = create_http_logger(LoggerConfig {
//!     show_user_agent: false,
//!     ..LoggerConfig::default()
//! });
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .layer(middleware::from_fn_with_state(logger, log_request));
//! ```

// Core formatting logic (framework-agnostic)
pub mod core;

// axum adapter
pub mod http;

// Demo binary support
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::{Config, LoggerConfig, TimeFormat};
pub use crate::core::error::{ReqtableError, Result};
pub use crate::core::formatter::{create_http_logger, HttpLogger};
pub use crate::core::record::{RequestLogRecord, RequestTokens};
