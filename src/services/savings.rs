//! Savings goal service
//!
//! Goals are owned by a single user. Any access through another user is
//! answered with `NotFound`, the same as for a missing id.

use chrono::Local;
use tracing::info;

use crate::engine;
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{GoalProgress, GoalUpdate, Money, SavingsGoal, SavingsGoalId, UserId};
use crate::storage::Store;

/// Service for savings goals
pub struct SavingsService<'a> {
    store: &'a Store,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a goal starting today
    pub fn create(
        &self,
        user_id: UserId,
        name: &str,
        target_amount: Money,
        target_date: Option<chrono::NaiveDate>,
    ) -> BudgetwiseResult<SavingsGoal> {
        let mut goal = SavingsGoal::new(
            user_id,
            name.trim(),
            target_amount,
            Local::now().date_naive(),
        );
        goal.target_date = target_date;
        goal.validate()
            .map_err(|e| BudgetwiseError::Validation(e.to_string()))?;

        self.store.goals.insert(goal.clone())?;
        info!(id = %goal.id, user = %user_id, target = %goal.target_amount, "created savings goal");
        Ok(goal)
    }

    /// Fetch a goal owned by `user_id`
    pub fn get(&self, user_id: UserId, id: SavingsGoalId) -> BudgetwiseResult<SavingsGoal> {
        self.store
            .goals
            .get(id)?
            .filter(|g| g.is_owned_by(user_id))
            .ok_or_else(|| BudgetwiseError::goal_not_found(id.to_string()))
    }

    /// Replace the mutable fields of a goal
    pub fn update(
        &self,
        user_id: UserId,
        id: SavingsGoalId,
        update: GoalUpdate,
    ) -> BudgetwiseResult<SavingsGoal> {
        let mut goal = self.get(user_id, id)?;
        goal.apply(GoalUpdate {
            name: update.name.trim().to_string(),
            ..update
        });
        goal.validate()
            .map_err(|e| BudgetwiseError::Validation(e.to_string()))?;

        self.store.goals.upsert(goal.clone())?;
        info!(id = %id, user = %user_id, "updated savings goal");
        Ok(goal)
    }

    pub fn delete(&self, user_id: UserId, id: SavingsGoalId) -> BudgetwiseResult<SavingsGoal> {
        self.get(user_id, id)?;
        let removed = self
            .store
            .goals
            .delete(id)?
            .ok_or_else(|| BudgetwiseError::goal_not_found(id.to_string()))?;

        info!(id = %id, user = %user_id, "deleted savings goal");
        Ok(removed)
    }

    pub fn list(&self, user_id: UserId) -> BudgetwiseResult<Vec<SavingsGoal>> {
        self.store.goals.get_by_user(user_id)
    }

    /// Progress towards a goal, recomputed from the owner's transactions
    pub fn progress(&self, user_id: UserId, id: SavingsGoalId) -> BudgetwiseResult<GoalProgress> {
        let goal = self.get(user_id, id)?;
        let summary = self.owner_summary(user_id)?;
        Ok(engine::progress(
            &goal,
            summary.total_income,
            summary.total_expenses,
        ))
    }

    /// Every goal of a user with its progress
    pub fn list_with_progress(
        &self,
        user_id: UserId,
    ) -> BudgetwiseResult<Vec<(SavingsGoal, GoalProgress)>> {
        let summary = self.owner_summary(user_id)?;
        Ok(self
            .list(user_id)?
            .into_iter()
            .map(|goal| {
                let progress =
                    engine::progress(&goal, summary.total_income, summary.total_expenses);
                (goal, progress)
            })
            .collect())
    }

    fn owner_summary(&self, user_id: UserId) -> BudgetwiseResult<engine::Summary> {
        let transactions = self.store.transactions.get_by_user(user_id)?;
        Ok(engine::summarize(&transactions, None))
    }
}
