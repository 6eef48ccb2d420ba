//! Read-only restaurant catalog.
//!
//! The catalog is constructed once at startup, validated, and never
//! mutated afterwards. A catalog comes from either the built-in sample
//! set or a TOML file with `[[restaurants]]` tables.

use crate::core::error::{BistroError, Result};
use crate::core::types::{PriceTier, Restaurant};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum rating on the five-star scale
pub const MAX_RATING: f32 = 5.0;

static SAMPLE_RECORDS: Lazy<Vec<Restaurant>> = Lazy::new(|| {
    vec![
        Restaurant {
            name: "Joe's Pizza".to_string(),
            cuisine: "Italian, Pizza".to_string(),
            location: "New York, NY".to_string(),
            rating: 4.5,
            price: PriceTier::Moderate,
            description: "Classic NYC slice joint since 1975. Famous for thin crust pizza."
                .to_string(),
        },
        Restaurant {
            name: "Sushi Nakazawa".to_string(),
            cuisine: "Japanese, Sushi".to_string(),
            location: "New York, NY".to_string(),
            rating: 4.8,
            price: PriceTier::Luxury,
            description: "Omakase experience from Jiro Dreams of Sushi apprentice.".to_string(),
        },
        Restaurant {
            name: "Shake Shack".to_string(),
            cuisine: "American, Burgers".to_string(),
            location: "New York, NY".to_string(),
            rating: 4.3,
            price: PriceTier::Moderate,
            description: "Modern roadside burger stand with quality ingredients.".to_string(),
        },
    ]
});

/// TOML shape for a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    restaurants: Vec<Restaurant>,
}

/// Read-only collection of restaurant records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Restaurant>,
}

impl Catalog {
    /// Build the built-in sample catalog
    pub fn sample() -> Self {
        // Sample data satisfies the invariants; validation cannot fail here.
        Self {
            records: SAMPLE_RECORDS.clone(),
        }
    }

    /// Build a catalog from records, validating invariants
    ///
    /// Invariants: at least one record, non-empty names, names unique
    /// case-insensitively, ratings within [0.0, 5.0].
    pub fn from_records(records: Vec<Restaurant>) -> Result<Self> {
        if records.is_empty() {
            return Err(BistroError::CatalogError(
                "Catalog must contain at least one restaurant".to_string(),
            ));
        }

        let mut seen: Vec<String> = Vec::with_capacity(records.len());
        for record in &records {
            let name = record.name.trim();
            if name.is_empty() {
                return Err(BistroError::CatalogError(
                    "Restaurant name must be non-empty".to_string(),
                ));
            }

            let folded = name.to_lowercase();
            if seen.contains(&folded) {
                return Err(BistroError::CatalogError(format!(
                    "Duplicate restaurant name: {name}"
                )));
            }
            seen.push(folded);

            if !(0.0..=MAX_RATING).contains(&record.rating) {
                return Err(BistroError::CatalogError(format!(
                    "Rating {} for '{}' is outside [0.0, {MAX_RATING:.1}]",
                    record.rating, record.name
                )));
            }
        }

        Ok(Self { records })
    }

    /// Load a catalog from a TOML file with `[[restaurants]]` tables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BistroError::CatalogError(format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ))
        })?;

        let file: CatalogFile = toml::from_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            records = file.restaurants.len(),
            "Loaded catalog file"
        );
        Self::from_records(file.restaurants)
    }

    /// Look up a record by name (case-insensitive exact match)
    pub fn get(&self, name: &str) -> Option<&Restaurant> {
        let folded = name.to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == folded)
    }

    /// Iterate over all records in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.records.iter()
    }

    /// All records in catalog order
    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    /// All record names in catalog order
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
