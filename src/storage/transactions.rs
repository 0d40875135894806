//! Transaction repository
//!
//! In-memory transactions indexed by owner. Insertion assigns the id and a
//! strictly increasing `created_at`, so insertion order can always be
//! recovered from timestamps.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Local, Utc};

use crate::engine::CategoryAssignment;
use crate::error::BudgetwiseError;
use crate::models::{NewTransaction, Transaction, TransactionId, UserId};

#[derive(Debug, Default)]
struct TransactionTable {
    rows: HashMap<TransactionId, Transaction>,
    /// Index: user_id -> transaction_ids
    by_user: HashMap<UserId, Vec<TransactionId>>,
    last_created_at: Option<DateTime<Utc>>,
}

impl TransactionTable {
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(stamp);
        stamp
    }

    fn index(&mut self, txn: Transaction) {
        self.by_user.entry(txn.user_id).or_default().push(txn.id);
        self.rows.insert(txn.id, txn);
    }
}

/// Repository for transactions
#[derive(Debug, Default)]
pub struct TransactionRepository {
    table: RwLock<TransactionTable>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated draft with its categorization outcome
    ///
    /// The date defaults to today in local time, the same clock used for
    /// the current month.
    pub fn insert(
        &self,
        draft: NewTransaction,
        assignment: CategoryAssignment,
    ) -> Result<Transaction, BudgetwiseError> {
        let mut table = self.table.write().map_err(|e| {
            BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let created_at = table.next_timestamp();
        let txn = Transaction {
            id: TransactionId::new(),
            user_id: draft.user_id,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            category: assignment.category,
            predicted_category: assignment.predicted,
            category_source: assignment.source,
            date: draft.date.unwrap_or_else(|| Local::now().date_naive()),
            created_at,
        };

        table.index(txn.clone());
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetwiseError> {
        let table = self.table.read().map_err(|e| {
            BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(table.rows.get(&id).cloned())
    }

    /// Transactions for a user, newest first
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, BudgetwiseError> {
        let table = self.table.read().map_err(|e| {
            BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = table
            .by_user
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids
            .iter()
            .filter_map(|id| table.rows.get(id).cloned())
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Remove a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetwiseError> {
        let mut table = self.table.write().map_err(|e| {
            BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = table.rows.remove(&id);
        if let Some(txn) = &removed {
            if let Some(ids) = table.by_user.get_mut(&txn.user_id) {
                ids.retain(|&other| other != id);
            }
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, BudgetwiseError> {
        let table = self.table.read().map_err(|e| {
            BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(table.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorySource, Money, Period};
    use chrono::NaiveDate;

    fn auto(category: &str) -> CategoryAssignment {
        CategoryAssignment {
            category: category.into(),
            predicted: category.into(),
            source: CategorySource::Auto,
        }
    }

    #[test]
    fn test_insert_assigns_id_and_default_date() {
        let repo = TransactionRepository::new();
        let user = UserId::new();

        let txn = repo
            .insert(
                NewTransaction::expense(user, "Coffee", Money::from_cents(350)),
                auto("Food & Dining"),
            )
            .unwrap();

        assert_eq!(txn.date, Local::now().date_naive());
        assert_eq!(txn.category, "Food & Dining");
        assert_eq!(repo.get(txn.id).unwrap(), Some(txn));
    }

    #[test]
    fn test_default_date_falls_in_current_month() {
        let repo = TransactionRepository::new();
        let txn = repo
            .insert(
                NewTransaction::expense(UserId::new(), "Bus fare", Money::from_cents(275)),
                auto("Transport"),
            )
            .unwrap();

        assert!(Period::current_month().contains(txn.date));
    }

    #[test]
    fn test_created_at_strictly_increases() {
        let repo = TransactionRepository::new();
        let user = UserId::new();

        let stamps: Vec<_> = (0..50)
            .map(|i| {
                repo.insert(
                    NewTransaction::expense(user, format!("item {}", i), Money::from_cents(100)),
                    auto("Other"),
                )
                .unwrap()
                .created_at
            })
            .collect();

        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_get_by_user_newest_first() {
        let repo = TransactionRepository::new();
        let user = UserId::new();
        let other = UserId::new();
        let jan = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();

        let early = repo
            .insert(
                NewTransaction::expense(user, "early", Money::from_cents(1)).on(jan(1)),
                auto("Other"),
            )
            .unwrap();
        let late = repo
            .insert(
                NewTransaction::expense(user, "late", Money::from_cents(1)).on(jan(20)),
                auto("Other"),
            )
            .unwrap();
        let same_day = repo
            .insert(
                NewTransaction::expense(user, "same day", Money::from_cents(1)).on(jan(20)),
                auto("Other"),
            )
            .unwrap();
        repo.insert(
            NewTransaction::expense(other, "someone else", Money::from_cents(1)),
            auto("Other"),
        )
        .unwrap();

        let ids: Vec<_> = repo.get_by_user(user).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![same_day.id, late.id, early.id]);
        assert_eq!(repo.count().unwrap(), 4);
    }

    #[test]
    fn test_delete() {
        let repo = TransactionRepository::new();
        let user = UserId::new();
        let txn = repo
            .insert(
                NewTransaction::income(user, "Salary", Money::from_cents(100_000)),
                auto("Other"),
            )
            .unwrap();

        assert!(repo.delete(txn.id).unwrap().is_some());
        assert!(repo.delete(txn.id).unwrap().is_none());
        assert!(repo.get_by_user(user).unwrap().is_empty());
    }
}
