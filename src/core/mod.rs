//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent
//! of how the program is driven (CLI commands, scripted walkthrough).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **catalog**: Read-only restaurant catalog
//! - **selector**: Ordered keyword dispatch
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod selector;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{BistroError, Result};
pub use selector::{Rule, Selection, Selector};
pub use services::Services;
