//! The fixed column set of the request table
//!
//! Column order never changes; configuration only decides which columns
//! survive. Widths are positional (see [`COLUMN_WIDTHS`]).

use crate::core::config::LoggerConfig;

/// Character widths applied to the first columns present, by position
///
/// The list is not re-derived when columns are hidden, so hiding a
/// leading column shifts the remaining ones into other slots' widths.
/// Columns past the end of the list are sized to their content.
pub const COLUMN_WIDTHS: [usize; 7] = [30, 10, 40, 10, 15, 20, 50];

/// One column of the request table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Timestamp,
    Method,
    Url,
    Status,
    ResponseTime,
    ClientIp,
    UserAgent,
    Referrer,
    ResponseSize,
    HttpVersion,
}

impl Column {
    /// Every column, in display order
    pub const ALL: [Column; 10] = [
        Column::Timestamp,
        Column::Method,
        Column::Url,
        Column::Status,
        Column::ResponseTime,
        Column::ClientIp,
        Column::UserAgent,
        Column::Referrer,
        Column::ResponseSize,
        Column::HttpVersion,
    ];

    /// Header label
    pub fn label(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Method => "Method",
            Column::Url => "URL",
            Column::Status => "Status",
            Column::ResponseTime => "Response Time",
            Column::ClientIp => "Client IP",
            Column::UserAgent => "User-Agent",
            Column::Referrer => "Referrer",
            Column::ResponseSize => "Response Size",
            Column::HttpVersion => "HTTP Version",
        }
    }

    /// Whether `config` shows this column
    pub fn is_visible(self, config: &LoggerConfig) -> bool {
        match self {
            Column::Timestamp => config.show_timestamp,
            Column::Method => config.show_method,
            Column::Url => config.show_url,
            Column::Status => config.show_status,
            Column::ResponseTime => config.show_response_time,
            Column::ClientIp => config.show_client_ip,
            Column::UserAgent => config.show_user_agent,
            Column::Referrer => config.show_referrer,
            Column::ResponseSize => config.show_response_size,
            Column::HttpVersion => config.show_http_version,
        }
    }

    /// Visible columns for `config`, in display order
    pub fn visible(config: &LoggerConfig) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| column.is_visible(config))
            .collect()
    }
}
