//! Transaction service
//!
//! Applies the categorization policy on creation and exposes the
//! aggregation views over a single user's transactions.

use tracing::info;

use crate::engine::{self, BalancePoint, CategorizationStats, Categorizer, MonthlySummary, Summary};
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{NewTransaction, Period, Transaction, TransactionId, UserId};
use crate::storage::Store;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a Store,
    categorizer: &'a Categorizer,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a Store, categorizer: &'a Categorizer) -> Self {
        Self { store, categorizer }
    }

    /// Validate, categorize and store a new transaction
    pub fn create(&self, draft: NewTransaction) -> BudgetwiseResult<Transaction> {
        draft
            .validate()
            .map_err(|e| BudgetwiseError::Validation(e.to_string()))?;

        let assignment = self
            .categorizer
            .assign(&draft.description, draft.category.as_deref());
        let txn = self.store.transactions.insert(draft, assignment)?;

        info!(
            id = %txn.id,
            user = %txn.user_id,
            category = %txn.category,
            source = %txn.category_source,
            "created transaction"
        );
        Ok(txn)
    }

    /// Delete a transaction owned by `user_id`
    ///
    /// A transaction owned by someone else is reported as not found.
    pub fn delete(&self, user_id: UserId, id: TransactionId) -> BudgetwiseResult<Transaction> {
        match self.store.transactions.get(id)? {
            Some(txn) if txn.user_id == user_id => {}
            _ => return Err(BudgetwiseError::transaction_not_found(id.to_string())),
        }

        let removed = self
            .store
            .transactions
            .delete(id)?
            .ok_or_else(|| BudgetwiseError::transaction_not_found(id.to_string()))?;

        info!(id = %id, user = %user_id, "deleted transaction");
        Ok(removed)
    }

    /// A user's transactions, newest first
    pub fn list(&self, user_id: UserId) -> BudgetwiseResult<Vec<Transaction>> {
        self.store.transactions.get_by_user(user_id)
    }

    /// Category the classifier would assign to a description
    pub fn predict_category(&self, description: &str) -> String {
        self.categorizer.classify(description).to_string()
    }

    /// Totals for a user, optionally restricted to one month
    pub fn summary(&self, user_id: UserId, period: Option<&Period>) -> BudgetwiseResult<Summary> {
        let transactions = self.list(user_id)?;
        Ok(engine::summarize(&transactions, period))
    }

    pub fn monthly_summary(
        &self,
        user_id: UserId,
        period: &Period,
    ) -> BudgetwiseResult<MonthlySummary> {
        let transactions = self.list(user_id)?;
        Ok(engine::monthly_summary(&transactions, period))
    }

    pub fn running_balance(&self, user_id: UserId) -> BudgetwiseResult<Vec<BalancePoint>> {
        let transactions = self.list(user_id)?;
        Ok(engine::running_balance(&transactions))
    }

    pub fn categorization_stats(&self, user_id: UserId) -> BudgetwiseResult<CategorizationStats> {
        let transactions = self.list(user_id)?;
        Ok(CategorizationStats::from_transactions(&transactions))
    }
}
