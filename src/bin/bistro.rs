//! bistro CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Run the scripted walkthrough
//! bistro demo
//!
//! # Route a one-shot query
//! bistro query "Where can I find good pizza in New York?"
//!
//! # List the catalog as JSON
//! bistro list --format json
//! ```

use bistro::cli::{run, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Quiet by default so demo output stays clean; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bistro=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
