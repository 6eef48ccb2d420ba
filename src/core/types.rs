//! Core data types for bistro.
//!
//! This module defines the data structures used throughout the
//! application: restaurant records, price tiers, and the
//! recommendation shape returned by the selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single restaurant record
///
/// Records are constructed once at startup (built-in sample set or a
/// TOML catalog file) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name, unique within a catalog
    pub name: String,

    /// Comma-separated cuisine labels
    pub cuisine: String,

    /// Free-text place description
    pub location: String,

    /// Rating in [0.0, 5.0], rendered with one decimal place
    pub rating: f32,

    /// Ordinal price tier
    pub price: PriceTier,

    /// Free-text description, rendered unmodified
    pub description: String,
}

/// Ordinal price tier, encoded as dollar-sign tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// The dollar-sign token for this tier
    pub fn token(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(PriceTier::Budget),
            "$$" => Ok(PriceTier::Moderate),
            "$$$" => Ok(PriceTier::Upscale),
            "$$$$" => Ok(PriceTier::Luxury),
            other => Err(format!("invalid price tier '{other}' (expected $ to $$$$)")),
        }
    }
}

/// Recommendation produced by routing a query through the selector
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// The query as supplied by the user
    pub query: String,

    /// Keyword of the rule that matched, absent for the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,

    /// Headline printed above the record
    pub intro: String,

    /// The selected record
    pub restaurant: Restaurant,
}
