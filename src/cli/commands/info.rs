//! Info command - show version and catalog information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Version and catalog information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub restaurants: usize,
    pub rules: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = InfoResponse {
        name: "bistro".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restaurants: services.catalog.len(),
        rules: services.selector.rules().len(),
        fallback: args
            .detailed
            .then(|| services.selector.fallback().to_string()),
    };

    match format {
        OutputFormat::Human => {
            println!("bistro {}", info.version);
            println!("Restaurants: {}", info.restaurants);
            println!("Routing rules: {}", info.rules);
            if let Some(fallback) = &info.fallback {
                println!("Fallback: {fallback}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
