//! Request table formatter
//!
//! Turns one completed request into a two-row table (labels, values),
//! prints it, and returns an empty string so the host emits nothing else.
//! Formatting failures are reported on stderr and never reach the host.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat, Utc};

use crate::core::columns::{Column, COLUMN_WIDTHS};
use crate::core::config::{LoggerConfig, TimeFormat};
use crate::core::console::{Console, StdConsole};
use crate::core::error::{Result, ReqtableError};
use crate::core::palette;
use crate::core::record::RequestTokens;
use crate::core::render::{TableRenderer, TabledRenderer};

/// Prefix of the diagnostic written to stderr when a line is dropped
pub const ERROR_PREFIX: &str = "Error generating HTTP log:";

/// Placeholder for a missing `User-Agent`
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// Placeholder for a missing `Referer`
pub const NO_REFERRER: &str = "N/A";

/// Placeholder for a missing `Content-Length`
pub const NO_CONTENT_LENGTH: &str = "0 B";

/// Coloring class of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Error,
}

/// Classify a status by its text: anything starting with `2` is a success
pub fn status_class(status: &str) -> StatusClass {
    if status.starts_with('2') {
        StatusClass::Success
    } else {
        StatusClass::Error
    }
}

/// Render `now` in the configured style (uncolored)
pub fn format_timestamp(now: DateTime<Utc>, format: TimeFormat) -> String {
    match format {
        TimeFormat::Iso => now.to_rfc3339_opts(SecondsFormat::Millis, true),
        TimeFormat::Locale => now.with_timezone(&Local).format("%-I:%M:%S %p").to_string(),
    }
}

/// Header and data rows for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRows {
    /// Visible columns, in display order
    pub columns: Vec<Column>,
    pub header: Vec<String>,
    pub data: Vec<String>,
}

impl LogRows {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Data cell for `column`, if visible
    pub fn cell(&self, column: Column) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .map(|index| self.data[index].as_str())
    }

    /// `[header, data]`
    pub fn grid(&self) -> Vec<Vec<String>> {
        vec![self.header.clone(), self.data.clone()]
    }
}

struct Inner {
    config: LoggerConfig,
    renderer: Box<dyn TableRenderer>,
    console: Box<dyn Console>,
}

/// Per-request table logger
///
/// Cheap to clone; clones share the same configuration, renderer and
/// console. Register [`HttpLogger::log`] with the host middleware, or use
/// [`crate::http::middleware::log_request`] for axum.
#[derive(Clone)]
pub struct HttpLogger {
    inner: Arc<Inner>,
}

/// Build a logger printing to stdout/stderr with the default renderer
pub fn create_http_logger(config: LoggerConfig) -> HttpLogger {
    HttpLogger::new(config)
}

impl HttpLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_parts(config, TabledRenderer, StdConsole)
    }

    /// Build a logger with an explicit renderer and console
    pub fn with_parts(
        config: LoggerConfig,
        renderer: impl TableRenderer + 'static,
        console: impl Console + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                renderer: Box::new(renderer),
                console: Box::new(console),
            }),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }

    /// Log one completed request
    ///
    /// Prints the table to the console and returns an empty string. On any
    /// failure (including a panicking accessor or renderer) a diagnostic is
    /// written to the error stream instead; the return value is the same.
    pub fn log(&self, tokens: &dyn RequestTokens) -> String {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<()> {
            let table = self.render(tokens)?;
            self.inner.console.out(&format!("{table}\n"))?;
            Ok(())
        }))
        .unwrap_or_else(|payload| Err(ReqtableError::FormattingFailure(panic_message(&*payload))));

        if let Err(err) = outcome {
            self.report(&err);
        }

        String::new()
    }

    /// Render the table for `tokens` without printing it
    pub fn render(&self, tokens: &dyn RequestTokens) -> Result<String> {
        let rows = self.build_rows(tokens)?;
        self.inner.renderer.render(&rows.grid(), &COLUMN_WIDTHS)
    }

    /// Header and data rows for `tokens`, stamped with the current time
    pub fn build_rows(&self, tokens: &dyn RequestTokens) -> Result<LogRows> {
        self.build_rows_at(tokens, Utc::now())
    }

    /// Header and data rows for `tokens`, stamped with `now`
    ///
    /// Tokens of hidden columns are never read.
    pub fn build_rows_at(&self, tokens: &dyn RequestTokens, now: DateTime<Utc>) -> Result<LogRows> {
        let columns = Column::visible(&self.inner.config);
        let mut header = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());

        for column in &columns {
            header.push(palette::info(column.label()).to_string());
            data.push(self.cell(*column, tokens, now)?);
        }

        Ok(LogRows {
            columns,
            header,
            data,
        })
    }

    fn cell(&self, column: Column, tokens: &dyn RequestTokens, now: DateTime<Utc>) -> Result<String> {
        let cell = match column {
            Column::Timestamp => {
                palette::timestamp(&format_timestamp(now, self.inner.config.time_format))
            }
            Column::Method => palette::method(&tokens.method()?),
            Column::Url => palette::url(&tokens.url()?),
            Column::Status => {
                let status = tokens.status()?;
                match status_class(&status) {
                    StatusClass::Success => palette::success(&status),
                    StatusClass::Error => palette::error(&status),
                }
            }
            Column::ResponseTime => palette::metric(&format!("{} ms", tokens.response_time()?)),
            Column::ClientIp => palette::info(&tokens.remote_addr()?),
            // Default terminal color
            Column::UserAgent => return Ok(or_placeholder(tokens.user_agent(), UNKNOWN_USER_AGENT)),
            Column::Referrer => palette::warn(&or_placeholder(tokens.referrer(), NO_REFERRER)),
            Column::ResponseSize => {
                palette::info(&or_placeholder(tokens.content_length(), NO_CONTENT_LENGTH))
            }
            Column::HttpVersion => palette::method(&format!("HTTP/{}", tokens.http_version()?)),
        };
        Ok(cell.to_string())
    }

    fn report(&self, err: &ReqtableError) {
        // Nowhere left to report a failing stderr.
        let _ = self.inner.console.err(&format!("{ERROR_PREFIX} {err}\n"));
        if err.is_formatting() {
            tracing::debug!(error = %err, "request log line dropped");
        } else {
            tracing::warn!(error = %err, "request log line could not be written");
        }
    }
}

impl fmt::Debug for HttpLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpLogger")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panic: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panic: {msg}")
    } else {
        "panic while formatting".to_string()
    }
}
