//! Keyword categorizer
//!
//! Assigns a spending category to a free-text description by scanning the
//! keyword table in order. The first category with any matching keyword
//! wins; there is no scoring.

use serde::Serialize;
use tracing::debug;

use crate::models::{CategoryKeywordTable, CategorySource, OTHER_CATEGORY};

/// Outcome of the creation-time categorization policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAssignment {
    /// Category to store on the transaction
    pub category: String,
    /// What the classifier predicted
    pub predicted: String,
    pub source: CategorySource,
}

/// Classifies descriptions using an injected keyword table
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    table: CategoryKeywordTable,
}

impl Categorizer {
    pub fn new(table: CategoryKeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryKeywordTable {
        &self.table
    }

    /// Return the category label for a description
    ///
    /// Blank descriptions and descriptions with no matching keyword map to
    /// [`OTHER_CATEGORY`].
    ///
    /// ```
    /// use budgetwise::engine::Categorizer;
    /// let categorizer = Categorizer::default();
    /// assert_eq!(categorizer.classify("Dominos Pizza order"), "Food & Dining");
    /// assert_eq!(categorizer.classify("   "), "Other");
    /// ```
    pub fn classify(&self, description: &str) -> &str {
        if description.trim().is_empty() {
            return OTHER_CATEGORY;
        }

        let lowered = description.to_lowercase();

        for rule in self.table.rules() {
            if let Some(keyword) = rule.keywords.iter().find(|k| lowered.contains(k.as_str())) {
                debug!(category = %rule.category, keyword = %keyword, "description matched");
                return &rule.category;
            }
        }

        debug!("no keyword matched, falling back to {}", OTHER_CATEGORY);
        OTHER_CATEGORY
    }

    /// Decide the stored category and its provenance
    ///
    /// A manual category that is absent, blank, or identical to the
    /// prediction yields the prediction with [`CategorySource::Auto`].
    /// Anything else is kept verbatim as [`CategorySource::Manual`].
    pub fn assign(&self, description: &str, manual: Option<&str>) -> CategoryAssignment {
        let predicted = self.classify(description).to_string();

        match manual {
            Some(category) if !category.trim().is_empty() && category != predicted => {
                CategoryAssignment {
                    category: category.to_string(),
                    predicted,
                    source: CategorySource::Manual,
                }
            }
            _ => CategoryAssignment {
                category: predicted.clone(),
                predicted,
                source: CategorySource::Auto,
            },
        }
    }
}
