//! Ordered keyword dispatch over the catalog.
//!
//! A query is routed by checking an ordered rule list: each rule probes
//! the lower-cased query for a substring keyword, first match wins, and
//! a mandatory fallback record covers everything else. Selection is
//! total: every string input, including the empty string, yields a
//! record.

use crate::core::catalog::Catalog;
use crate::core::error::{BistroError, Result};
use crate::core::types::{Recommendation, Restaurant};
use serde::{Deserialize, Serialize};

/// A single routing rule: keyword containment probe -> catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Substring keyword, matched case-insensitively
    pub keyword: String,

    /// Name of the catalog record this rule selects
    pub target: String,

    /// Headline printed above the rendered record
    pub intro: String,
}

impl Rule {
    pub fn new(keyword: &str, target: &str, intro: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            target: target.to_string(),
            intro: intro.to_string(),
        }
    }
}

/// Result of routing a single query
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// The selected record
    pub restaurant: &'a Restaurant,

    /// The rule that matched, `None` for the fallback
    pub rule: Option<&'a Rule>,

    /// Headline for rendering (the rule's intro, or the fallback intro)
    pub intro: &'a str,
}

/// Deterministic first-match-wins query router
///
/// Owns the catalog and a validated rule list. Stateless after
/// construction: `select` never mutates and never fails.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Catalog,
    rules: Vec<Rule>,
    /// Catalog index per rule, resolved at construction
    targets: Vec<usize>,
    fallback: String,
    fallback_index: usize,
    fallback_intro: String,
}

impl Selector {
    /// Default rule set matching the sample catalog
    pub fn default_rules() -> Vec<Rule> {
        vec![
            Rule::new("pizza", "Joe's Pizza", "Based on your query, I recommend:"),
            Rule::new(
                "japanese",
                "Sushi Nakazawa",
                "For a special Japanese dining experience:",
            ),
        ]
    }

    /// Default fallback target for the sample catalog
    pub fn default_fallback() -> (String, String) {
        (
            "Shake Shack".to_string(),
            "For a quick casual lunch:".to_string(),
        )
    }

    /// Build a selector, validating rules against the catalog
    ///
    /// Every rule target and the fallback must name a catalog record.
    /// Keywords are stored lower-cased so matching only folds the query.
    pub fn new(
        catalog: Catalog,
        rules: Vec<Rule>,
        fallback: String,
        fallback_intro: String,
    ) -> Result<Self> {
        let resolve = |name: &str| -> Result<usize> {
            catalog
                .iter()
                .position(|r| r.name.to_lowercase() == name.to_lowercase())
                .ok_or_else(|| BistroError::UnknownRestaurant {
                    name: name.to_string(),
                    available: catalog.names(),
                })
        };

        let mut targets = Vec::with_capacity(rules.len());
        for rule in &rules {
            if rule.keyword.trim().is_empty() {
                return Err(BistroError::ConfigError(format!(
                    "Routing rule for '{}' has an empty keyword",
                    rule.target
                )));
            }
            targets.push(resolve(&rule.target)?);
        }

        let fallback_index = resolve(&fallback)?;

        let rules = rules
            .into_iter()
            .map(|r| Rule {
                keyword: r.keyword.to_lowercase(),
                ..r
            })
            .collect();

        Ok(Self {
            catalog,
            rules,
            targets,
            fallback,
            fallback_index,
            fallback_intro,
        })
    }

    /// Build the default selector over the sample catalog
    pub fn with_defaults(catalog: Catalog) -> Result<Self> {
        let (fallback, fallback_intro) = Self::default_fallback();
        Self::new(catalog, Self::default_rules(), fallback, fallback_intro)
    }

    /// Route a query to exactly one record
    ///
    /// Total over all string inputs: rules are checked in order against
    /// the lower-cased query, and the fallback covers everything else.
    pub fn select(&self, query: &str) -> Selection<'_> {
        let folded = query.to_lowercase();

        for (rule, &target) in self.rules.iter().zip(&self.targets) {
            if folded.contains(&rule.keyword) {
                tracing::debug!(keyword = %rule.keyword, target = %rule.target, "Rule matched");
                return Selection {
                    restaurant: &self.catalog.records()[target],
                    rule: Some(rule),
                    intro: &rule.intro,
                };
            }
        }

        tracing::debug!(target = %self.fallback, "No rule matched, using fallback");
        Selection {
            restaurant: &self.catalog.records()[self.fallback_index],
            rule: None,
            intro: &self.fallback_intro,
        }
    }

    /// Route a query and package the result as an owned recommendation
    pub fn recommend(&self, query: &str) -> Recommendation {
        let selection = self.select(query);
        Recommendation {
            query: query.to_string(),
            matched_keyword: selection.rule.map(|r| r.keyword.clone()),
            intro: selection.intro.to_string(),
            restaurant: selection.restaurant.clone(),
        }
    }

    /// The catalog this selector routes over
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Name of the fallback record
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
