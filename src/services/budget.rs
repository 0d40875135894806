//! Budget service
//!
//! Budget upserts and budget-vs-actual evaluation for one user.

use tracing::info;

use crate::engine;
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{Budget, BudgetKey, BudgetStatus, Money, Period, UserId};
use crate::storage::Store;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Set the limit for a category, creating the budget if needed
    pub fn upsert(
        &self,
        user_id: UserId,
        category: &str,
        period: Option<Period>,
        limit: Money,
    ) -> BudgetwiseResult<Budget> {
        let category = category.trim();
        Budget::new(user_id, category, limit, period)
            .validate()
            .map_err(|e| BudgetwiseError::Validation(e.to_string()))?;

        let budget = self.store.budgets.upsert(user_id, category, period, limit)?;

        info!(
            user = %user_id,
            budget = %budget.key(),
            limit = %budget.limit,
            "upserted budget"
        );
        Ok(budget)
    }

    /// Delete a budget; `NotFound` if the key has no row
    pub fn delete(
        &self,
        user_id: UserId,
        category: &str,
        period: Option<Period>,
    ) -> BudgetwiseResult<Budget> {
        let key = BudgetKey::new(user_id, category.trim(), period);
        let removed = self
            .store
            .budgets
            .delete(&key)?
            .ok_or_else(|| BudgetwiseError::budget_not_found(key.to_string()))?;

        info!(user = %user_id, budget = %key, "deleted budget");
        Ok(removed)
    }

    pub fn list(&self, user_id: UserId) -> BudgetwiseResult<Vec<Budget>> {
        self.store.budgets.get_by_user(user_id)
    }

    /// Budget-vs-actual for every budget applying to `period`
    pub fn evaluate(&self, user_id: UserId, period: &Period) -> BudgetwiseResult<Vec<BudgetStatus>> {
        let budgets = self.list(user_id)?;
        let transactions = self.store.transactions.get_by_user(user_id)?;
        Ok(engine::evaluate(&budgets, &transactions, period))
    }

    /// Budget-vs-actual for one category
    pub fn evaluate_category(
        &self,
        user_id: UserId,
        period: &Period,
        category: &str,
    ) -> BudgetwiseResult<BudgetStatus> {
        let budgets = self.list(user_id)?;
        let transactions = self.store.transactions.get_by_user(user_id)?;
        engine::evaluate_category(&budgets, &transactions, period, category.trim())
    }
}
