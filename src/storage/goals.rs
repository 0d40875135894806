//! Savings goal repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BudgetwiseError;
use crate::models::{SavingsGoal, SavingsGoalId, UserId};

/// Repository for savings goals
#[derive(Debug, Default)]
pub struct GoalRepository {
    goals: RwLock<HashMap<SavingsGoalId, SavingsGoal>>,
}

impl GoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new goal, rejecting an id that is already taken
    pub fn insert(&self, goal: SavingsGoal) -> Result<(), BudgetwiseError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if goals.contains_key(&goal.id) {
            return Err(BudgetwiseError::Storage(format!(
                "Duplicate goal id: {}",
                goal.id
            )));
        }

        goals.insert(goal.id, goal);
        Ok(())
    }

    /// Replace a stored goal
    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), BudgetwiseError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.insert(goal.id, goal);
        Ok(())
    }

    pub fn get(&self, id: SavingsGoalId) -> Result<Option<SavingsGoal>, BudgetwiseError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.get(&id).cloned())
    }

    /// Goals of a user, oldest first
    pub fn get_by_user(&self, user_id: UserId) -> Result<Vec<SavingsGoal>, BudgetwiseError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals
            .values()
            .filter(|g| g.is_owned_by(user_id))
            .cloned()
            .collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    pub fn delete(&self, id: SavingsGoalId) -> Result<Option<SavingsGoal>, BudgetwiseError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(goals.remove(&id))
    }

    pub fn count(&self) -> Result<usize, BudgetwiseError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| BudgetwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(goals.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn goal(user: UserId, name: &str) -> SavingsGoal {
        SavingsGoal::new(
            user,
            name,
            Money::from_cents(10_000),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_insert_upsert_get_delete() {
        let repo = GoalRepository::new();
        let user = UserId::new();
        let mut g = goal(user, "Bike");

        repo.insert(g.clone()).unwrap();
        g.name = "Road bike".into();
        repo.upsert(g.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(g.id).unwrap().unwrap().name, "Road bike");
        assert!(repo.delete(g.id).unwrap().is_some());
        assert_eq!(repo.get(g.id).unwrap(), None);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let repo = GoalRepository::new();
        let owner = UserId::new();
        let first = goal(owner, "Bike");
        let mut clash = goal(UserId::new(), "Car");
        clash.id = first.id;

        repo.insert(first.clone()).unwrap();
        let err = repo.insert(clash).unwrap_err();
        assert!(matches!(err, BudgetwiseError::Storage(_)));

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get_by_user(owner).unwrap(), vec![first]);
    }

    #[test]
    fn test_get_by_user_filters_owner() {
        let repo = GoalRepository::new();
        let user = UserId::new();
        repo.insert(goal(user, "Bike")).unwrap();
        repo.insert(goal(user, "Trip")).unwrap();
        repo.insert(goal(UserId::new(), "Car")).unwrap();

        assert_eq!(repo.get_by_user(user).unwrap().len(), 2);
    }
}
