//! Color roles for the request table
//!
//! Every cell is colored by role rather than by a literal color so the
//! formatter reads in terms of what a value is. Honors `NO_COLOR` and
//! `CLICOLOR_FORCE` through `colored`.

use colored::{ColoredString, Colorize};

/// Style for header labels, client IP and response size
pub fn info(s: &str) -> ColoredString {
    s.cyan()
}

/// Style for the HTTP method and protocol version
pub fn method(s: &str) -> ColoredString {
    s.blue()
}

/// Style for the request URL
pub fn url(s: &str) -> ColoredString {
    s.yellow()
}

/// Style for 2xx statuses
pub fn success(s: &str) -> ColoredString {
    s.green()
}

/// Style for every other status
pub fn error(s: &str) -> ColoredString {
    s.red()
}

/// Style for timings
pub fn metric(s: &str) -> ColoredString {
    s.magenta()
}

/// Style for the referrer
pub fn warn(s: &str) -> ColoredString {
    s.yellow()
}

/// Style for the timestamp
pub fn timestamp(s: &str) -> ColoredString {
    s.green()
}

/// SGR prefix and suffix of the dim style used on table borders
pub const DIM: (&str, &str) = ("\u{1b}[2m", "\u{1b}[22m");

/// Whether color output is on (`NO_COLOR`, `CLICOLOR`, overrides)
pub fn enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Force colors on for the rest of the test process
///
/// Only ever switches colors on, and only once, so tests comparing
/// colored strings never observe a flip mid-test.
#[cfg(test)]
pub(crate) fn force_colors() {
    static FORCE: std::sync::Once = std::sync::Once::new();
    FORCE.call_once(|| colored::control::set_override(true));
}
