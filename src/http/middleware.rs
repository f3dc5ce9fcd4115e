//! Request table middleware for axum
//!
//! Snapshots each request/response pair, times the inner service and hands
//! the snapshot to an [`HttpLogger`].

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, Version},
    middleware::Next,
    response::Response,
};

use crate::core::formatter::HttpLogger;
use crate::core::record::RequestLogRecord;

/// Request logging middleware
///
/// Register with `axum::middleware::from_fn_with_state(logger, log_request)`.
/// The client address is taken from `ConnectInfo<SocketAddr>`, so serve the
/// router with `into_make_service_with_connect_info::<SocketAddr>()` to
/// populate it; without it the column shows `-`.
///
/// Formatting never affects the response: the logger swallows its own
/// failures.
pub async fn log_request(State(logger): State<HttpLogger>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let url = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let http_version = version_number(request.version());
    let remote_addr = client_addr(&request);
    let user_agent = header_value(request.headers(), header::USER_AGENT.as_str());
    let referrer = header_value(request.headers(), header::REFERER.as_str())
        .or_else(|| header_value(request.headers(), "referrer"));
    let start = Instant::now();

    // Process request
    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let content_length = header_value(response.headers(), header::CONTENT_LENGTH.as_str())
        .or_else(|| response.body().size_hint().exact().map(|len| len.to_string()));

    let record = RequestLogRecord {
        method,
        url,
        status: response.status().as_u16().to_string(),
        response_time: format!("{elapsed_ms:.3}"),
        remote_addr,
        http_version,
        user_agent,
        referrer,
        content_length,
    };
    logger.log(&record);

    response
}

/// Protocol version without the `HTTP/` prefix
pub fn version_number(version: Version) -> String {
    match version {
        Version::HTTP_09 => "0.9".to_string(),
        Version::HTTP_10 => "1.0".to_string(),
        Version::HTTP_11 => "1.1".to_string(),
        Version::HTTP_2 => "2.0".to_string(),
        Version::HTTP_3 => "3.0".to_string(),
        other => format!("{other:?}").trim_start_matches("HTTP/").to_string(),
    }
}

fn client_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
