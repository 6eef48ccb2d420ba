//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod completions;
pub mod config;
pub mod demo;
pub mod info;
pub mod list;
pub mod query;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use demo::DemoArgs;
pub use info::InfoArgs;
pub use list::ListArgs;
pub use query::QueryArgs;
