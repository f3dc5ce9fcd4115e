//! Serve command - demo HTTP server with request tables

use std::net::SocketAddr;

use axum::middleware;
use clap::Args;

use crate::core::config::Config;
use crate::core::formatter::create_http_logger;
use crate::http::{demo_router, middleware::log_request};

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Apply command-line overrides to the loaded configuration
pub fn apply_overrides(args: &ServeArgs, mut config: Config) -> crate::core::error::Result<Config> {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = apply_overrides(&args, config)?;
    config.log_config();

    let logger = create_http_logger(config.logger.clone());
    let app = demo_router().layer(middleware::from_fn_with_state(logger, log_request));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
