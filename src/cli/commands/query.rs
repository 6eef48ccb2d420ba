//! Query command - route a single query through the selector

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Natural-language query (any content; empty hits the fallback)
    pub text: String,

    /// Only show the selected restaurant name
    #[arg(long)]
    pub name_only: bool,
}

/// Execute the query command
///
/// Routing is total: every input yields a recommendation, so the only
/// failures here are output-side.
pub async fn execute(
    args: QueryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let recommendation = services.selector.recommend(&args.text);

    match format {
        OutputFormat::Human => {
            if args.name_only {
                println!("{}", recommendation.restaurant.name);
                return Ok(());
            }

            println!(
                "{} {}",
                colors::dim("query:"),
                colors::label(&args.text)
            );
            println!();
            println!("{}", colors::success(&recommendation.intro));
            println!();
            let wrap_width = services.config.presentation.wrap_width;
            for line in output::render_restaurant(&recommendation.restaurant, wrap_width) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
    }

    Ok(())
}
