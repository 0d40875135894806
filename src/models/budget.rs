//! Budget model
//!
//! A per-category spending limit, optionally scoped to a single month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::money::Money;
use super::period::Period;

/// Unique key of a budget row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BudgetKey {
    pub user_id: UserId,
    pub category: String,
    /// `None` for a budget that applies to every month
    pub period: Option<Period>,
}

impl BudgetKey {
    pub fn new(user_id: UserId, category: impl Into<String>, period: Option<Period>) -> Self {
        Self {
            user_id,
            category: category.into(),
            period,
        }
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.period {
            Some(period) => write!(f, "{} ({})", self.category, period),
            None => write!(f, "{}", self.category),
        }
    }
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub user_id: UserId,

    pub category: String,

    /// Maximum intended spend for the category
    pub limit: Money,

    /// Month this budget is restricted to, if any
    #[serde(default)]
    pub period: Option<Period>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        user_id: UserId,
        category: impl Into<String>,
        limit: Money,
        period: Option<Period>,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            category: category.into(),
            limit,
            period,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> BudgetKey {
        BudgetKey::new(self.user_id, self.category.clone(), self.period)
    }

    /// Whether this budget applies to the given month
    pub fn applies_to(&self, period: &Period) -> bool {
        self.period.map_or(true, |p| p == *period)
    }

    /// Overwrite the limit
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        Ok(())
    }
}

/// Budget-vs-actual for one category in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative when overspent
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn new(category: impl Into<String>, limit: Money, spent: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            spent,
            remaining: limit - spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the limit already spent, as a percentage
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        self.spent.cents() as f64 / self.limit.cents() as f64 * 100.0
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Limit {} | Spent {} | Remaining {}",
            self.category, self.limit, self.spent, self.remaining
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
