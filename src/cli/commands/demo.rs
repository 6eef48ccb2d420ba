//! Demo command - the full scripted walkthrough
//!
//! Narrates a restaurant recommendation flow section by section:
//! overview, architecture, catalog loading, the sample queries routed
//! through the selector, and closing notes. All output goes through
//! the presenter so the script is testable without a terminal.

use crate::cli::output::{self, colors};
use crate::cli::presenter::{ConsolePresenter, Presenter};
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Skip the typed-output effect and section pauses
    #[arg(long)]
    pub fast: bool,
}

/// Sample queries narrated by the walkthrough
pub const SAMPLE_QUERIES: [&str; 3] = [
    "Where can I find good pizza in New York?",
    "I want fancy Japanese food for a special occasion",
    "Quick casual lunch under $20?",
];

const ARCHITECTURE_DIAGRAM: &str = r#"
    +-----------------+     +-----------------+
    |   User Query    |---->|  Query Parser   |
    | "Pizza in NYC"  |     |                 |
    +-----------------+     +--------+--------+
                                     |
                                     v
    +-----------------+     +-----------------+
    |     Catalog     |<----|     Router      |
    |  (read-only)    |---->| (keyword rules) |
    +-----------------+     +--------+--------+
                                     |
                                     v
                            +-----------------+
                            |    Rendered     |
                            | Recommendation  |
                            +-----------------+
"#;

/// Build the console presenter for the demo from config and args
pub fn console_presenter(args: &DemoArgs, services: &Arc<Services>) -> ConsolePresenter {
    if args.fast {
        ConsolePresenter::fast()
    } else {
        ConsolePresenter::new(
            services.config.presentation.typing_delay_ms,
            services.config.presentation.pause,
        )
    }
}

/// Execute the demo command
///
/// Human narration only; the global `--format` flag applies to the
/// other commands.
pub async fn execute(
    _args: DemoArgs,
    services: &Arc<Services>,
    presenter: &dyn Presenter,
) -> Result<(), Box<dyn std::error::Error>> {
    banner(presenter, "🍕 Restaurant Recommendation Demo").await;

    presenter
        .announce("This demo walks through a restaurant recommendation flow")
        .await;
    presenter
        .announce("driven by natural-language queries.")
        .await;
    presenter.show("").await;
    presenter.show("Key pieces:").await;
    presenter.show("  • A fixed, read-only restaurant catalog").await;
    presenter
        .show("  • Ordered keyword rules, first match wins")
        .await;
    presenter
        .show("  • A guaranteed fallback, so every query gets an answer")
        .await;
    presenter
        .wait_for_continue("\nPress Enter to start the demo...")
        .await;

    banner(presenter, "Architecture Overview").await;
    presenter.show(ARCHITECTURE_DIAGRAM).await;
    presenter
        .wait_for_continue("\nPress Enter to load the catalog...")
        .await;

    banner(presenter, "Step 1: Load the Catalog").await;
    step(presenter, 1, "Load the sample restaurant data").await;
    code(presenter, "let services = Services::new(Config::load()?)?;").await;
    presenter.show("").await;
    for restaurant in services.catalog.iter() {
        presenter
            .show(&format!(
                "  {} Added: {} ({}) - {}",
                colors::success("✓"),
                colors::name(&restaurant.name),
                restaurant.cuisine,
                output::format_rating(restaurant.rating)
            ))
            .await;
    }
    presenter
        .wait_for_continue("\nPress Enter to run queries...")
        .await;

    banner(presenter, "Step 2: Natural Language Queries").await;
    let total = SAMPLE_QUERIES.len();
    for (i, query) in SAMPLE_QUERIES.iter().enumerate() {
        step(presenter, i + 1, &format!("Query: \"{query}\"")).await;
        code(presenter, &format!("services.selector.select(\"{query}\")")).await;
        presenter.show("").await;

        let selection = services.selector.select(query);
        presenter
            .show(&colors::success(selection.intro).to_string())
            .await;
        presenter.show("").await;
        let wrap_width = services.config.presentation.wrap_width;
        for line in output::render_restaurant(selection.restaurant, wrap_width) {
            presenter.show(&line).await;
        }
        presenter.show("").await;

        if i + 1 < total {
            presenter
                .wait_for_continue("Press Enter for next query...")
                .await;
        }
    }

    banner(presenter, "How Routing Works").await;
    presenter
        .announce("Rules are checked in order against the lower-cased query:")
        .await;
    presenter.show("").await;
    for (i, rule) in services.selector.rules().iter().enumerate() {
        presenter
            .show(&format!(
                "  {}. contains \"{}\" -> {}",
                i + 1,
                colors::label(&rule.keyword),
                colors::name(&rule.target)
            ))
            .await;
    }
    presenter
        .show(&format!(
            "  {}. anything else -> {} (fallback)",
            services.selector.rules().len() + 1,
            colors::name(services.selector.fallback())
        ))
        .await;
    presenter.show("").await;
    presenter
        .announce("The fallback makes routing total: no query can fail.")
        .await;
    presenter
        .wait_for_continue("\nPress Enter to wrap up...")
        .await;

    banner(presenter, "Demo Complete! 🎉").await;
    presenter.show("Key takeaways:").await;
    presenter.show("").await;
    presenter
        .show("  1. Deterministic: the same query always selects the same record")
        .await;
    presenter
        .show("  2. Total: empty or unrelated queries hit the fallback, never an error")
        .await;
    presenter
        .show("  3. Configurable: rules, fallback, and catalog load from bistro.toml")
        .await;
    presenter.show("").await;

    Ok(())
}

async fn banner(presenter: &dyn Presenter, title: &str) {
    let rule = "=".repeat(60);
    presenter.show("").await;
    presenter.show(&colors::banner(&rule).to_string()).await;
    presenter
        .show(&colors::banner(&format!("{title:^60}")).to_string())
        .await;
    presenter.show(&colors::banner(&rule).to_string()).await;
    presenter.show("").await;
}

async fn step(presenter: &dyn Presenter, number: usize, text: &str) {
    presenter
        .show(&format!(
            "{} {text}",
            colors::step(&format!("[Step {number}]"))
        ))
        .await;
}

async fn code(presenter: &dyn Presenter, text: &str) {
    presenter
        .show(&colors::code(&format!(">>> {text}")).to_string())
        .await;
}
