//! Budget-vs-actual evaluation
//!
//! Compares each budgeted category's limit against what was spent in a
//! month. Categories without a budget row are not reported.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{Budget, BudgetStatus, Period, Transaction};

use super::aggregator::summarize;

/// Evaluate every budget that applies to `period`
///
/// A budget scoped to `period` takes precedence over an unscoped budget for
/// the same category. Results are ordered by category label.
pub fn evaluate(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: &Period,
) -> Vec<BudgetStatus> {
    let applicable = applicable_budgets(budgets, period);
    if applicable.is_empty() {
        return Vec::new();
    }

    let summary = summarize(transactions, Some(period));

    let statuses: Vec<BudgetStatus> = applicable
        .into_iter()
        .map(|(category, budget)| {
            BudgetStatus::new(category, budget.limit, summary.spent_in(category))
        })
        .collect();

    debug!(%period, budgets = statuses.len(), "evaluated budgets");
    statuses
}

/// Evaluate the budget for a single category
///
/// Returns `NotFound` when no budget applies, which is distinct from a
/// budget with nothing spent against it.
pub fn evaluate_category(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: &Period,
    category: &str,
) -> BudgetwiseResult<BudgetStatus> {
    let applicable = applicable_budgets(budgets, period);
    let budget = applicable
        .get(category)
        .ok_or_else(|| BudgetwiseError::budget_not_found(format!("{} ({})", category, period)))?;

    let spent = summarize(transactions, Some(period)).spent_in(category);
    Ok(BudgetStatus::new(category, budget.limit, spent))
}

/// The effective budget per category for a month
fn applicable_budgets<'a>(
    budgets: &'a [Budget],
    period: &Period,
) -> BTreeMap<&'a str, &'a Budget> {
    let mut applicable: BTreeMap<&str, &Budget> = BTreeMap::new();

    for budget in budgets.iter().filter(|b| b.applies_to(period)) {
        // An already-selected month-scoped budget is kept
        let scoped_selected = applicable
            .get(budget.category.as_str())
            .map_or(false, |existing| existing.period.is_some());
        if !scoped_selected {
            applicable.insert(budget.category.as_str(), budget);
        }
    }

    applicable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorySource, Money, TransactionId, TransactionKind, UserId};
    use chrono::{NaiveDate, Utc};

    fn jan() -> Period {
        Period::monthly(2025, 1).unwrap()
    }

    fn expense(user: UserId, cents: i64, category: &str, day: u32) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            user_id: user,
            description: category.to_lowercase(),
            amount: Money::from_cents(cents),
            kind: TransactionKind::Expense,
            category: category.to_string(),
            predicted_category: category.to_string(),
            category_source: CategorySource::Auto,
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_budgeted_categories_are_reported() {
        let user = UserId::new();
        let budgets = vec![Budget::new(user, "Food & Dining", Money::from_cents(10_000), None)];
        let transactions = vec![
            expense(user, 4_000, "Food & Dining", 3),
            expense(user, 9_000, "Shopping", 4),
        ];

        let statuses = evaluate(&budgets, &transactions, &jan());
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].category, "Food & Dining");
        assert_eq!(statuses[0].spent, Money::from_cents(4_000));
        assert_eq!(statuses[0].remaining, Money::from_cents(6_000));
    }

    #[test]
    fn test_overspend_is_negative() {
        let user = UserId::new();
        let budgets = vec![Budget::new(user, "Shopping", Money::from_cents(5_000), None)];
        let transactions = vec![expense(user, 7_500, "Shopping", 10)];

        let statuses = evaluate(&budgets, &transactions, &jan());
        assert_eq!(statuses[0].remaining, Money::from_cents(-2_500));
        assert!(statuses[0].is_over_budget());
    }

    #[test]
    fn test_budget_without_spend_reports_zero() {
        let user = UserId::new();
        let budgets = vec![Budget::new(user, "Health", Money::from_cents(3_000), None)];

        let statuses = evaluate(&budgets, &[], &jan());
        assert_eq!(statuses[0].spent, Money::zero());
        assert_eq!(statuses[0].remaining, Money::from_cents(3_000));
    }

    #[test]
    fn test_spend_outside_period_is_ignored() {
        let user = UserId::new();
        let budgets = vec![Budget::new(user, "Travel", Money::from_cents(3_000), None)];
        let mut february = expense(user, 2_000, "Travel", 1);
        february.date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let statuses = evaluate(&budgets, &[february], &jan());
        assert_eq!(statuses[0].spent, Money::zero());
    }

    #[test]
    fn test_scoped_budget_overrides_unscoped() {
        let user = UserId::new();
        let budgets = vec![
            Budget::new(user, "Travel", Money::from_cents(50_000), Some(jan())),
            Budget::new(user, "Travel", Money::from_cents(10_000), None),
            Budget::new(
                user,
                "Health",
                Money::from_cents(1_000),
                Period::monthly(2025, 2),
            ),
        ];

        let statuses = evaluate(&budgets, &[], &jan());
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].limit, Money::from_cents(50_000));

        let february = evaluate(&budgets, &[], &jan().next());
        let limits: Vec<_> = february.iter().map(|s| (s.category.as_str(), s.limit)).collect();
        assert_eq!(
            limits,
            vec![
                ("Health", Money::from_cents(1_000)),
                ("Travel", Money::from_cents(10_000)),
            ]
        );
    }

    #[test]
    fn test_evaluate_category_not_found() {
        let user = UserId::new();
        let budgets = vec![Budget::new(user, "Health", Money::from_cents(3_000), None)];

        let err = evaluate_category(&budgets, &[], &jan(), "Shopping").unwrap_err();
        assert!(err.is_not_found());

        let status = evaluate_category(&budgets, &[], &jan(), "Health").unwrap();
        assert_eq!(status.spent, Money::zero());
    }
}
