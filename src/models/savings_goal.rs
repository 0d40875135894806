//! Savings goal model
//!
//! A goal only stores its target. How much has been saved towards it is
//! derived from the owner's transactions on every read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{SavingsGoalId, UserId};
use super::money::Money;

/// A savings target owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub user_id: UserId,
    pub name: String,
    pub target_amount: Money,
    /// Set at creation and never changed
    pub start_date: NaiveDate,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal starting on `start_date`
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        target_amount: Money,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SavingsGoalId::new(),
            user_id,
            name: name.into(),
            target_amount,
            start_date,
            target_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update; the start date is left untouched
    pub fn apply(&mut self, update: GoalUpdate) {
        self.name = update.name;
        self.target_amount = update.target_amount;
        self.target_date = update.target_date;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if let Some(target_date) = self.target_date {
            if target_date < self.start_date {
                return Err(GoalValidationError::TargetBeforeStart {
                    start: self.start_date,
                    target: target_date,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (target {})", self.name, self.target_amount)
    }
}

/// Mutable fields of a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: Money,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

/// Derived progress towards a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub saved_amount: Money,
    pub remaining_amount: Money,
}

impl GoalProgress {
    pub fn is_reached(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    TargetBeforeStart { start: NaiveDate, target: NaiveDate },
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be positive, got {}", amount)
            }
            Self::TargetBeforeStart { start, target } => write!(
                f,
                "Target date {} is before start date {}",
                target, start
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_apply_keeps_start_date() {
        let mut goal = SavingsGoal::new(
            UserId::new(),
            "Laptop",
            Money::from_cents(100_000),
            date(2025, 1, 1),
        );
        goal.apply(GoalUpdate {
            name: "Gaming laptop".into(),
            target_amount: Money::from_cents(150_000),
            target_date: Some(date(2025, 6, 30)),
        });

        assert_eq!(goal.name, "Gaming laptop");
        assert_eq!(goal.target_amount, Money::from_cents(150_000));
        assert_eq!(goal.start_date, date(2025, 1, 1));
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let mut goal = SavingsGoal::new(UserId::new(), "", Money::from_cents(1), date(2025, 1, 1));
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        goal.name = "Trip".into();
        goal.target_amount = Money::zero();
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));

        goal.target_amount = Money::from_cents(500);
        goal.target_date = Some(date(2024, 12, 31));
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::TargetBeforeStart { .. })
        ));
    }
}
