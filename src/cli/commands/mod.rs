//! CLI command implementations

pub mod config;
pub mod serve;

pub use config::ConfigArgs;
pub use serve::ServeArgs;
