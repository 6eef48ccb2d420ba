//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub presentation: PresentationView,
    pub catalog_file: Option<String>,
    pub routing: RoutingView,
}

#[derive(Debug, Serialize)]
pub struct PresentationView {
    pub typing_delay_ms: u64,
    pub pause: bool,
    pub wrap_width: usize,
}

#[derive(Debug, Serialize)]
pub struct RoutingView {
    pub rules: Vec<RuleView>,
    pub fallback: String,
}

#[derive(Debug, Serialize)]
pub struct RuleView {
    pub keyword: String,
    pub target: String,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let response = ConfigResponse {
        presentation: PresentationView {
            typing_delay_ms: config.presentation.typing_delay_ms,
            pause: config.presentation.pause,
            wrap_width: config.presentation.wrap_width,
        },
        catalog_file: config
            .catalog
            .file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        routing: RoutingView {
            rules: config
                .routing
                .rules
                .iter()
                .map(|r| RuleView {
                    keyword: r.keyword.clone(),
                    target: r.target.clone(),
                })
                .collect(),
            fallback: config.routing.fallback.clone(),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  presentation:");
            println!(
                "    typing_delay_ms: {}",
                response.presentation.typing_delay_ms
            );
            println!("    pause: {}", response.presentation.pause);
            println!("    wrap_width: {}", response.presentation.wrap_width);
            println!(
                "  catalog_file: {}",
                response.catalog_file.as_deref().unwrap_or("(built-in sample)")
            );
            println!("  routing:");
            for rule in &response.routing.rules {
                println!("    '{}' -> {}", rule.keyword, rule.target);
            }
            println!("    fallback -> {}", response.routing.fallback);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
