//! reqtable - demo server for the request table middleware
//!
//! # Examples
//!
//! ```bash
//! # Serve demo routes on the configured address
//! reqtable serve
//!
//! # Serve on another port, hiding columns via env
//! REQTABLE_SHOW_USER_AGENT=false reqtable serve --port 8080
//!
//! # Show the effective configuration
//! reqtable show-config --format json
//! ```

use clap::Parser;
use reqtable::cli::{output, run, Cli};
use reqtable::ReqtableError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Tracing goes to stderr so stdout carries only the tables
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reqtable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        // 2 for bad configuration, 1 for everything else
        let code = match e.downcast_ref::<ReqtableError>() {
            Some(err) if err.is_config() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
