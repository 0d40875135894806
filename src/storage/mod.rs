//! Storage layer for BudgetWise
//!
//! In-memory repositories guarded by `RwLock`, plus JSON helpers for
//! snapshots and settings. Nothing here is written back durably.

pub mod budget;
pub mod file_io;
pub mod goals;
pub mod snapshot;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{read_json, read_json_required, read_yaml_required, write_json_atomic};
pub use goals::GoalRepository;
pub use snapshot::{BudgetEntry, GoalEntry, Snapshot};
pub use transactions::TransactionRepository;

/// Coordinator that owns all repositories
#[derive(Debug, Default)]
pub struct Store {
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no records at all
    pub fn is_empty(&self) -> Result<bool, crate::error::BudgetwiseError> {
        Ok(self.transactions.count()? == 0
            && self.budgets.count()? == 0
            && self.goals.count()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty().unwrap());
    }
}
