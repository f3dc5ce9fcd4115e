//! Config command - show current configuration

use crate::cli::output::{colors, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::columns::Column;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the user config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_config_file: Option<String>,
    pub columns: Vec<ColumnState>,
    pub time_format: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize)]
pub struct ColumnState {
    pub label: &'static str,
    pub visible: bool,
}

/// Build the response for `config`
pub fn config_response(config: &Config, all: bool) -> ConfigResponse {
    ConfigResponse {
        user_config_file: if all {
            Config::user_config_file().map(|p| p.to_string_lossy().into_owned())
        } else {
            None
        },
        columns: Column::ALL
            .iter()
            .map(|column| ColumnState {
                label: column.label(),
                visible: column.is_visible(&config.logger),
            })
            .collect(),
        time_format: config.logger.time_format.to_string(),
        host: config.server.host.clone(),
        port: config.server.port,
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = config_response(config, args.all);

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            if let Some(path) = &response.user_config_file {
                println!("  user config file: {}", colors::file_path(path));
            }
            println!("  columns:");
            for column in &response.columns {
                let state = if column.visible {
                    colors::success("shown")
                } else {
                    colors::dim("hidden")
                };
                println!("    {:<14} {}", column.label, state);
            }
            println!("  time_format: {}", response.time_format);
            println!("  server: {}:{}", response.host, response.port);
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
