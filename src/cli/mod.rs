//! CLI adapter for bistro
//!
//! Provides the command-line interface over the core routing logic.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
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
pub mod presenter;

use clap::{Parser, Subcommand};

/// bistro - Keyword-routed restaurant recommendation demo
///
/// Walks through a scripted recommendation flow, or routes one-shot
/// queries: an ordered keyword rule list is matched against the query,
/// first match wins, with a guaranteed fallback record.
#[derive(Parser, Debug)]
#[command(name = "bistro")]
#[command(version)]
#[command(about = "Keyword-routed restaurant recommendation demo", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full scripted walkthrough
    Demo(commands::DemoArgs),

    /// Route a single query and show the recommendation
    Query(commands::QueryArgs),

    /// List the restaurant catalog
    List(commands::ListArgs),

    /// Show current configuration
    Config(commands::ConfigArgs),

    /// Show version and catalog information
    Info(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  bistro completions bash > ~/.local/share/bash-completion/completions/bistro
    ///   zsh:   bistro completions zsh > ~/.zfunc/_bistro
    ///   fish:  bistro completions fish > ~/.config/fish/completions/bistro.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match command {
        Commands::Demo(args) => {
            let presenter = commands::demo::console_presenter(&args, &services);
            commands::demo::execute(args, &services, &presenter).await
        }
        Commands::Query(args) => commands::query::execute(args, &services, cli.format).await,
        Commands::List(args) => commands::list::execute(args, &services, cli.format).await,
        Commands::Config(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Info(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
