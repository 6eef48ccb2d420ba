//! Unified service container for bistro
//!
//! Provides shared access to all core services.

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::selector::Selector;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone, Debug)]
pub struct Services {
    /// Read-only restaurant catalog
    pub catalog: Arc<Catalog>,

    /// Query router over the catalog
    pub selector: Arc<Selector>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Loads the catalog (file or built-in sample) and builds the
    /// selector from the routing section, validating rule targets
    /// against the loaded catalog.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = match &config.catalog.file {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::sample(),
        };
        let catalog = Arc::new(catalog);

        let selector = Selector::new(
            (*catalog).clone(),
            config.routing.rules.clone(),
            config.routing.fallback.clone(),
            config.routing.fallback_intro.clone(),
        )?;

        Ok(Self {
            catalog,
            selector: Arc::new(selector),
            config: Arc::new(config),
        })
    }
}
