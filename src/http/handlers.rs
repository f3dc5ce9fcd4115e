//! Demo handlers served by `reqtable serve`
//!
//! A handful of routes that exercise the interesting table cells:
//! success and error statuses, sized and unsized bodies, path parameters.

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Health check response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn index_handler() -> &'static str {
    "reqtable demo: try /health, /echo/{name}, /missing or /boom\n"
}

/// Echo the path parameter back
pub async fn echo_handler(Path(name): Path<String>) -> String {
    format!("hello, {name}\n")
}

pub async fn missing_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing here\n")
}

pub async fn boom_handler() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "simulated failure\n")
}

/// Router with every demo route (no middleware)
pub fn demo_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/echo/{name}", get(echo_handler))
        .route("/missing", get(missing_handler))
        .route("/boom", get(boom_handler))
}
