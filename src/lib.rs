//! bistro - Keyword-Routed Restaurant Recommendation Demo
//!
//! An interactive CLI that walks through a scripted restaurant
//! recommendation flow. Queries are routed deterministically: an
//! ordered list of keyword rules is checked against the lower-cased
//! query, first match wins, and a mandatory fallback record covers
//! everything else.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - catalog (read-only restaurant records)
//!   - selector (ordered keyword dispatch)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output, presenter
//!
//! # Key Properties
//!
//! - Selection is total: every query, including the empty string,
//!   yields exactly one record
//! - The catalog is constructed once at startup and never mutated
//! - Pacing effects (typed output, pauses) live behind an injectable
//!   presenter so routing is testable without a terminal

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::catalog::Catalog;
pub use core::config::Config;
pub use core::error::{BistroError, Result};
pub use core::selector::{Rule, Selection, Selector};
pub use core::services::Services;
pub use core::types::*;
