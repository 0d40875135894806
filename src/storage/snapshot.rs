//! Snapshot documents
//!
//! A snapshot is a JSON document of draft records used to seed an empty
//! store. Transactions go through the same categorization policy as live
//! creation, in file order, so `created_at` follows the document order.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::Categorizer;
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{Money, NewTransaction, Period, SavingsGoal, SavingsGoalId, UserId};
use crate::services::{BudgetService, TransactionService};

use super::file_io::read_json_required;
use super::Store;

/// A budget row in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub user_id: UserId,
    pub category: String,
    pub limit: Money,
    #[serde(default)]
    pub period: Option<Period>,
}

/// A savings goal in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEntry {
    #[serde(default)]
    pub id: Option<SavingsGoalId>,
    pub user_id: UserId,
    pub name: String,
    pub target_amount: Money,
    /// Defaults to the day the snapshot is loaded
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

/// Seed data for a [`Store`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<NewTransaction>,
    #[serde(default)]
    pub budgets: Vec<BudgetEntry>,
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
}

impl Snapshot {
    /// Read a snapshot file
    pub fn load(path: impl AsRef<Path>) -> BudgetwiseResult<Self> {
        read_json_required(path)
    }

    /// Every user referenced by the snapshot
    pub fn user_ids(&self) -> BTreeSet<UserId> {
        self.transactions
            .iter()
            .map(|t| t.user_id)
            .chain(self.budgets.iter().map(|b| b.user_id))
            .chain(self.goals.iter().map(|g| g.user_id))
            .collect()
    }

    /// Build a store populated with this snapshot's records
    pub fn into_store(self, categorizer: &Categorizer) -> BudgetwiseResult<Store> {
        let store = Store::new();
        self.seed(&store, categorizer)?;
        Ok(store)
    }

    /// Insert every record into `store`
    ///
    /// Stops at the first invalid record.
    pub fn seed(self, store: &Store, categorizer: &Categorizer) -> BudgetwiseResult<()> {
        let transaction_service = TransactionService::new(store, categorizer);
        let budget_service = BudgetService::new(store);

        let counts = (self.transactions.len(), self.budgets.len(), self.goals.len());

        for draft in self.transactions {
            transaction_service.create(draft)?;
        }

        for entry in self.budgets {
            budget_service.upsert(entry.user_id, &entry.category, entry.period, entry.limit)?;
        }

        for entry in self.goals {
            let start_date = entry
                .start_date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut goal =
                SavingsGoal::new(entry.user_id, entry.name, entry.target_amount, start_date);
            goal.target_date = entry.target_date;
            if let Some(id) = entry.id {
                goal.id = id;
            }
            goal.validate()
                .map_err(|e| BudgetwiseError::Validation(e.to_string()))?;
            store.goals.insert(goal)?;
        }

        info!(
            transactions = counts.0,
            budgets = counts.1,
            goals = counts.2,
            "seeded store from snapshot"
        );
        Ok(())
    }
}
