//! Categorization provenance statistics
//!
//! Counts how often the stored category came from the classifier versus a
//! user override, overall and per category.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CategorySource, Transaction};

/// Auto/manual counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub auto: usize,
    pub manual: usize,
}

impl SourceCounts {
    pub fn total(&self) -> usize {
        self.auto + self.manual
    }

    /// Percentage of auto-categorized transactions, `None` when empty
    pub fn auto_share(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.auto as f64 / total as f64 * 100.0),
        }
    }

    fn record(&mut self, source: CategorySource) {
        match source {
            CategorySource::Auto => self.auto += 1,
            CategorySource::Manual => self.manual += 1,
        }
    }
}

/// Provenance statistics for a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorizationStats {
    pub overall: SourceCounts,
    /// Keyed by the stored category
    pub by_category: BTreeMap<String, SourceCounts>,
}

impl CategorizationStats {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut stats = Self::default();
        for txn in transactions {
            stats.overall.record(txn.category_source);
            stats
                .by_category
                .entry(txn.category.clone())
                .or_default()
                .record(txn.category_source);
        }
        stats
    }

    /// Share of transactions whose category was kept as predicted
    pub fn auto_share(&self) -> Option<f64> {
        self.overall.auto_share()
    }
}
