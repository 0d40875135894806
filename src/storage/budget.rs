//! Budget repository
//!
//! Budgets are keyed by `(user, category, period)`. Upserts hold the write
//! lock across the lookup and the write, so concurrent upserts of the same
//! key never produce two rows.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BudgetwiseError;
use crate::models::{Budget, BudgetKey, Money, Period, UserId};

/// Repository for budgets
#[derive(Debug, Default)]
pub struct BudgetRepository {
    budgets: RwLock<HashMap<BudgetKey, Budget>>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a key, creating the budget if it doesn't exist
    pub fn upsert(
        &self,
        user_id: UserId,
        category: &str,
        period: Option<Period>,
        limit: Money,
    ) -> Result<Budget, BudgetwiseError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key = BudgetKey::new(user_id, category, period);
        let budget = budgets
            .entry(key)
            .and_modify(|b| b.set_limit(limit))
            .or_insert_with(|| Budget::new(user_id, category, limit, period));

        Ok(budget.clone())
    }

    pub fn get(&self, key: &BudgetKey) -> Result<Option<Budget>, BudgetwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(key).cloned())
    }

    /// All budgets of a user, ordered by category then period
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<Budget>, BudgetwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.key().cmp(&b.key()));
        Ok(list)
    }

    /// Remove a budget, returning it if it existed
    pub fn delete(&self, key: &BudgetKey) -> Result<Option<Budget>, BudgetwiseError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(key))
    }

    pub fn count(&self) -> Result<usize, BudgetwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}
