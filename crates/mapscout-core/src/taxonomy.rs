//! The category → query-term taxonomy driving hotspot searches.
//!
//! The taxonomy is immutable after load. A built-in default covers the seven
//! standard categories; an optional YAML file can replace it.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Built-in taxonomy. Order matters: categories and their query terms are
/// searched in this order.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "tourist_attractions",
        &[
            "tourist attraction",
            "monument",
            "museum",
            "temple",
            "church",
            "historical place",
        ],
    ),
    (
        "restaurants",
        &["restaurant", "cafe", "food court", "bar", "pub"],
    ),
    (
        "shopping",
        &["shopping mall", "market", "shopping center", "store"],
    ),
    (
        "entertainment",
        &[
            "movie theater",
            "amusement park",
            "night club",
            "sports complex",
        ],
    ),
    ("accommodation", &["hotel", "resort", "guest house"]),
    (
        "services",
        &["hospital", "bank", "ATM", "gas station", "pharmacy"],
    ),
    ("parks", &["park", "garden", "zoo", "lake", "beach"]),
];

/// A named grouping of related search query terms.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub queries: Vec<String>,
}

/// An ordered, validated set of [`Category`] entries.
#[derive(Debug, Clone)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    categories: Vec<Category>,
}

impl CategoryTaxonomy {
    /// Builds a taxonomy from explicit categories, validating them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if there are no categories, a
    /// category name is empty, a category has no query terms, or two
    /// categories share a name (case-insensitive).
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// The built-in default taxonomy.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, queries)| Category {
                name: (*name).to_string(),
                queries: queries.iter().map(|q| (*q).to_string()).collect(),
            })
            .collect();
        // The built-in table is known-valid.
        Self { categories }
    }

    /// Loads and validates a taxonomy from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::TaxonomyFileIo {
                path: path.display().to_string(),
                source: e,
            })?;
        let file: TaxonomyFile = serde_yaml::from_str(&content)?;
        Self::new(file.categories)
    }

    /// Categories in taxonomy order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Looks up a category by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate(categories: &[Category]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "taxonomy must contain at least one category".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }
        if category.queries.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has no query terms",
                category.name
            )));
        }
        if !seen.insert(category.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }
    }

    Ok(())
}
