//! Per-request token access
//!
//! [`RequestTokens`] is what a host middleware hands the formatter for one
//! completed request. [`RequestLogRecord`] is an owned snapshot that
//! implements it; the axum adapter builds one per request.

use crate::core::error::Result;

/// Read-only accessors for a single completed request
///
/// Required values are fallible: an accessor that cannot produce one
/// returns an error, which the formatter reports and swallows. Header
/// values are optional and fall back to placeholders when absent.
pub trait RequestTokens {
    /// HTTP method, e.g. `GET`
    fn method(&self) -> Result<String>;

    /// Request path including the query string
    fn url(&self) -> Result<String>;

    /// Status code as text, e.g. `"200"`
    fn status(&self) -> Result<String>;

    /// Elapsed time in milliseconds, without unit
    fn response_time(&self) -> Result<String>;

    /// Remote address of the client
    fn remote_addr(&self) -> Result<String>;

    /// Protocol version without the `HTTP/` prefix, e.g. `"1.1"`
    fn http_version(&self) -> Result<String>;

    fn user_agent(&self) -> Option<String>;

    fn referrer(&self) -> Option<String>;

    /// Response `Content-Length`
    fn content_length(&self) -> Option<String>;
}

/// Owned snapshot of one completed request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLogRecord {
    pub method: String,
    pub url: String,
    pub status: String,
    pub response_time: String,
    pub remote_addr: String,
    pub http_version: String,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub content_length: Option<String>,
}

impl RequestLogRecord {
    /// Snapshot with the required fields set and no optional headers
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            status: status.into(),
            response_time: "0.000".to_string(),
            remote_addr: "-".to_string(),
            http_version: "1.1".to_string(),
            ..Self::default()
        }
    }

    pub fn with_response_time(mut self, ms: impl Into<String>) -> Self {
        self.response_time = ms.into();
        self
    }

    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = addr.into();
        self
    }

    pub fn with_http_version(mut self, version: impl Into<String>) -> Self {
        self.http_version = version.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_content_length(mut self, len: impl Into<String>) -> Self {
        self.content_length = Some(len.into());
        self
    }
}

impl RequestTokens for RequestLogRecord {
    fn method(&self) -> Result<String> {
        Ok(self.method.clone())
    }

    fn url(&self) -> Result<String> {
        Ok(self.url.clone())
    }

    fn status(&self) -> Result<String> {
        Ok(self.status.clone())
    }

    fn response_time(&self) -> Result<String> {
        Ok(self.response_time.clone())
    }

    fn remote_addr(&self) -> Result<String> {
        Ok(self.remote_addr.clone())
    }

    fn http_version(&self) -> Result<String> {
        Ok(self.http_version.clone())
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }

    fn content_length(&self) -> Option<String> {
        self.content_length.clone()
    }
}
