//! CLI adapter for reqtable
//!
//! Runs a small demo server with the request table middleware attached,
//! and prints the effective configuration.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |   (formatter)    |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      http/       |
//!              | (axum adapter)   |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;

/// reqtable - colored per-request console tables
///
/// Serves a few demo routes and prints each request as a table.
#[derive(Parser, Debug)]
#[command(name = "reqtable")]
#[command(version)]
#[command(about = "Colored per-request console tables", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file (defaults to REQTABLE_CONFIG, the user config dir, then ./reqtable.toml)
    #[arg(long, short = 'c', global = true, env = "REQTABLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve demo routes with request tables on stdout
    Serve(commands::ServeArgs),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

/// Load configuration, preferring an explicit file
pub fn load_config(path: Option<&PathBuf>) -> crate::core::error::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
    }
}
