//! List command - print the restaurant catalog

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::Restaurant;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show restaurant names
    #[arg(long)]
    pub names_only: bool,
}

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub restaurants: Vec<Restaurant>,
}

/// Execute the list command
pub async fn execute(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ListResponse {
        count: services.catalog.len(),
        restaurants: services.catalog.iter().cloned().collect(),
    };

    match format {
        OutputFormat::Human => {
            if args.names_only {
                for restaurant in &response.restaurants {
                    println!("{}", restaurant.name);
                }
                return Ok(());
            }

            println!(
                "Catalog: {} restaurant(s)\n",
                colors::label(&response.count.to_string())
            );
            let wrap_width = services.config.presentation.wrap_width;
            for restaurant in &response.restaurants {
                for line in output::render_restaurant(restaurant, wrap_width) {
                    println!("{line}");
                }
                println!("   {}", colors::dim(&restaurant.cuisine));
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
