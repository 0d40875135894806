//! Savings goal progress
//!
//! Progress is derived from the owner's net surplus. Every goal belonging to
//! a user reports the same saved amount.

use crate::models::{GoalProgress, Money, SavingsGoal};

/// Compute progress towards `goal` from the owner's income and expense totals
pub fn progress(goal: &SavingsGoal, total_income: Money, total_expenses: Money) -> GoalProgress {
    let saved_amount = (total_income - total_expenses).non_negative();
    let remaining_amount = (goal.target_amount - saved_amount).non_negative();

    GoalProgress {
        saved_amount,
        remaining_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use chrono::NaiveDate;

    fn goal(target: i64) -> SavingsGoal {
        SavingsGoal::new(
            UserId::new(),
            "Emergency fund",
            Money::from_cents(target),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_deficit_saves_nothing() {
        let p = progress(&goal(500), Money::from_cents(1_000), Money::from_cents(1_200));
        assert_eq!(p.saved_amount, Money::zero());
        assert_eq!(p.remaining_amount, Money::from_cents(500));
        assert!(!p.is_reached());
    }

    #[test]
    fn test_partial_progress() {
        let p = progress(&goal(5_000), Money::from_cents(10_000), Money::from_cents(7_000));
        assert_eq!(p.saved_amount, Money::from_cents(3_000));
        assert_eq!(p.remaining_amount, Money::from_cents(2_000));
    }

    #[test]
    fn test_surplus_beyond_target_clamps_remaining() {
        let p = progress(&goal(5_000), Money::from_cents(20_000), Money::from_cents(1_000));
        assert_eq!(p.saved_amount, Money::from_cents(19_000));
        assert_eq!(p.remaining_amount, Money::zero());
        assert!(p.is_reached());
    }
}
