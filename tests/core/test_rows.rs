//! Tests for header/data row construction
//!
//! - Fixed column order with every flag on
//! - Hidden columns vanish from both rows
//! - Status coloring by textual prefix
//! - Placeholders for missing headers
//! - Timestamp formats

use chrono::{DateTime, TimeZone, Utc};
use reqtable::core::columns::Column;
use reqtable::core::palette;
use reqtable::{create_http_logger, HttpLogger, LoggerConfig, RequestLogRecord, TimeFormat};

use crate::common::{force_colors, sample_record, strip_ansi};

const LABELS: [&str; 10] = [
    "Timestamp",
    "Method",
    "URL",
    "Status",
    "Response Time",
    "Client IP",
    "User-Agent",
    "Referrer",
    "Response Size",
    "HTTP Version",
];

/// Logger built after colors are forced on, so expected strings built
/// with `palette` match the cells
fn colored_logger(config: LoggerConfig) -> HttpLogger {
    force_colors();
    create_http_logger(config)
}

fn plain(row: &[String]) -> Vec<String> {
    row.iter().map(|cell| strip_ansi(cell)).collect()
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// Every flag on: ten cells in both rows, fixed order
#[test]
fn test_all_columns_in_fixed_order() {
    let logger = colored_logger(LoggerConfig::default());
    let rows = logger.build_rows_at(&sample_record(), noon()).unwrap();

    assert_eq!(rows.header.len(), 10);
    assert_eq!(rows.data.len(), 10);
    assert_eq!(plain(&rows.header), LABELS.to_vec());
    assert_eq!(
        plain(&rows.data),
        vec![
            "2026-10-19T12:00:00.000Z",
            "GET",
            "/api/v1/items?page=2",
            "200",
            "3.142 ms",
            "192.168.1.20",
            "Mozilla/5.0 (X11; Linux x86_64)",
            "https://example.com/start",
            "512",
            "HTTP/1.1",
        ]
    );
}

/// Header labels use the info color
#[test]
fn test_header_colored_as_info() {
    let logger = colored_logger(LoggerConfig::default());
    let rows = logger.build_rows_at(&sample_record(), noon()).unwrap();
    for (cell, label) in rows.header.iter().zip(LABELS) {
        assert_eq!(cell, &palette::info(label).to_string());
    }
}

/// Each single hidden flag removes exactly its column from both rows
#[test]
fn test_each_flag_hides_its_column() {
    for hidden in Column::ALL {
        let mut config = LoggerConfig::default();
        match hidden {
            Column::Timestamp => config.show_timestamp = false,
            Column::Method => config.show_method = false,
            Column::Url => config.show_url = false,
            Column::Status => config.show_status = false,
            Column::ResponseTime => config.show_response_time = false,
            Column::ClientIp => config.show_client_ip = false,
            Column::UserAgent => config.show_user_agent = false,
            Column::Referrer => config.show_referrer = false,
            Column::ResponseSize => config.show_response_size = false,
            Column::HttpVersion => config.show_http_version = false,
        }

        let logger = colored_logger(config);
        let rows = logger.build_rows_at(&sample_record(), noon()).unwrap();

        assert_eq!(rows.header.len(), 9, "hiding {hidden:?}");
        assert_eq!(rows.data.len(), 9, "hiding {hidden:?}");
        assert!(!plain(&rows.header).contains(&hidden.label().to_string()));
        assert!(rows.cell(hidden).is_none());
    }
}

/// Arbitrary subsets: row lengths equal the number of enabled flags
#[test]
fn test_subsets_keep_rows_aligned() {
    // Walk every subset of the ten flags
    for mask in 0u16..(1 << 10) {
        let bit = |i: u16| mask & (1 << i) != 0;
        let config = LoggerConfig {
            show_timestamp: bit(0),
            show_method: bit(1),
            show_url: bit(2),
            show_status: bit(3),
            show_response_time: bit(4),
            show_client_ip: bit(5),
            show_user_agent: bit(6),
            show_referrer: bit(7),
            show_response_size: bit(8),
            show_http_version: bit(9),
            time_format: TimeFormat::Iso,
        };
        let expected = mask.count_ones() as usize;

        let logger = colored_logger(config.clone());
        let rows = logger.build_rows_at(&sample_record(), noon()).unwrap();

        assert_eq!(rows.header.len(), expected);
        assert_eq!(rows.data.len(), expected);
        assert_eq!(rows.len(), config.visible_count());

        let expected_labels: Vec<String> = LABELS
            .iter()
            .enumerate()
            .filter(|(i, _)| bit(*i as u16))
            .map(|(_, l)| l.to_string())
            .collect();
        assert_eq!(plain(&rows.header), expected_labels);
    }
}

/// Status coloring is a prefix check on the text
#[test]
fn test_status_colors() {
    force_colors();
    assert_ne!(
        palette::success("200").to_string(),
        palette::error("200").to_string()
    );

    let logger = colored_logger(LoggerConfig::default());

    for (status, success) in [("200", true), ("201", true), ("404", false), ("500", false)] {
        let record = RequestLogRecord::new("GET", "/", status);
        let rows = logger.build_rows_at(&record, noon()).unwrap();
        let cell = rows.cell(Column::Status).unwrap();
        let expected = if success {
            palette::success(status)
        } else {
            palette::error(status)
        };
        assert_eq!(cell, expected.to_string(), "status {status}");
    }
}

/// Missing headers render their placeholders
#[test]
fn test_placeholders() {
    let logger = colored_logger(LoggerConfig::default());
    let record = RequestLogRecord::new("GET", "/", "200");
    let rows = logger.build_rows_at(&record, noon()).unwrap();

    assert_eq!(rows.cell(Column::UserAgent), Some("Unknown"));
    assert_eq!(
        rows.cell(Column::Referrer).unwrap(),
        palette::warn("N/A").to_string()
    );
    assert_eq!(
        rows.cell(Column::ResponseSize).unwrap(),
        palette::info("0 B").to_string()
    );
}

/// Empty header values count as missing
#[test]
fn test_empty_headers_use_placeholders() {
    let logger = colored_logger(LoggerConfig::default());
    let record = RequestLogRecord::new("GET", "/", "200")
        .with_user_agent("")
        .with_referrer("")
        .with_content_length("");
    let rows = logger.build_rows_at(&record, noon()).unwrap();

    let data = plain(&rows.data);
    assert_eq!(data[6], "Unknown");
    assert_eq!(data[7], "N/A");
    assert_eq!(data[8], "0 B");
}

/// User-Agent keeps the default terminal color
#[test]
fn test_user_agent_uncolored() {
    let logger = colored_logger(LoggerConfig::default());
    let rows = logger.build_rows_at(&sample_record(), noon()).unwrap();
    assert_eq!(
        rows.cell(Column::UserAgent),
        Some("Mozilla/5.0 (X11; Linux x86_64)")
    );
}

#[test]
fn test_http_version_prefix() {
    let logger = colored_logger(LoggerConfig::default());
    let record = RequestLogRecord::new("GET", "/", "200").with_http_version("1.1");
    let rows = logger.build_rows_at(&record, noon()).unwrap();
    assert_eq!(
        rows.cell(Column::HttpVersion).unwrap(),
        palette::method("HTTP/1.1").to_string()
    );
}

/// ISO timestamps parse as RFC 3339
#[test]
fn test_iso_timestamp_parses() {
    let logger = colored_logger(LoggerConfig::default());
    let rows = logger.build_rows(&sample_record()).unwrap();
    let ts = strip_ansi(rows.cell(Column::Timestamp).unwrap());
    assert!(DateTime::parse_from_rfc3339(&ts).is_ok(), "got {ts}");
    assert!(ts.ends_with('Z'));
}

/// Locale timestamps are time-of-day strings, not ISO
#[test]
fn test_locale_timestamp_is_not_iso() {
    let logger = colored_logger(LoggerConfig {
        time_format: TimeFormat::Locale,
        ..LoggerConfig::default()
    });
    let rows = logger.build_rows(&sample_record()).unwrap();
    let ts = strip_ansi(rows.cell(Column::Timestamp).unwrap());
    assert!(DateTime::parse_from_rfc3339(&ts).is_err(), "got {ts}");
    assert!(ts.ends_with("AM") || ts.ends_with("PM"), "got {ts}");
}

#[test]
fn test_timestamp_absent_when_hidden() {
    let logger = colored_logger(LoggerConfig {
        show_timestamp: false,
        ..LoggerConfig::default()
    });
    let rows = logger.build_rows(&sample_record()).unwrap();
    assert!(rows.cell(Column::Timestamp).is_none());
    assert_eq!(strip_ansi(&rows.header[0]), "Method");
}
