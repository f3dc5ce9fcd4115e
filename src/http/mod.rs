//! axum adapter
//!
//! Depends only on core/. Provides the request logging middleware and the
//! handlers served by the demo binary.

pub mod handlers;
pub mod middleware;

pub use handlers::*;
