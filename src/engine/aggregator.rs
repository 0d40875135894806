//! Transaction aggregation
//!
//! Reduces a user's transactions into totals, per-category expense
//! breakdowns, monthly statistics and a running balance. Every function here
//! is pure: empty input produces zero-valued results, never an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::{Money, Period, Transaction, TransactionId};

/// Income/expense totals for a set of transactions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`; negative when spending exceeds income
    pub balance: Money,
    /// Expense totals by category. Categories without expenses are absent.
    pub expenses_by_category: BTreeMap<String, Money>,
}

impl Summary {
    /// Spend recorded for a category, zero if none
    pub fn spent_in(&self, category: &str) -> Money {
        self.expenses_by_category
            .get(category)
            .copied()
            .unwrap_or_default()
    }
}

/// The expense with the highest amount in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargestExpense {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl From<&Transaction> for LargestExpense {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            description: txn.description.clone(),
            amount: txn.amount,
            date: txn.date,
        }
    }
}

/// Monthly statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub period: Period,
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub expenses_by_category: BTreeMap<String, Money>,
    /// Mean of the individual expense amounts, zero without expenses
    pub avg_expense: Money,
    /// `total_expenses / days_in_month`
    pub avg_daily_expense: Money,
    pub largest_expense: Option<LargestExpense>,
    pub income_count: usize,
    pub expense_count: usize,
}

/// One step of the running balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    pub transaction_id: TransactionId,
    pub date: NaiveDate,
    /// Signed change (income positive, expense negative)
    pub delta: Money,
    pub balance: Money,
}

/// Sum income and expenses, optionally restricted to one month
pub fn summarize(transactions: &[Transaction], period: Option<&Period>) -> Summary {
    let mut summary = Summary::default();

    for txn in in_period(transactions, period) {
        if txn.is_income() {
            summary.total_income += txn.amount;
        } else {
            summary.total_expenses += txn.amount;
            *summary
                .expenses_by_category
                .entry(txn.category.clone())
                .or_default() += txn.amount;
        }
    }

    // Amounts are positive, but a zero entry must never be reported
    summary.expenses_by_category.retain(|_, total| !total.is_zero());
    summary.balance = summary.total_income - summary.total_expenses;

    debug!(
        transactions = transactions.len(),
        income = %summary.total_income,
        expenses = %summary.total_expenses,
        "summarized transactions"
    );

    summary
}

/// Compute the monthly summary for `period`
pub fn monthly_summary(transactions: &[Transaction], period: &Period) -> MonthlySummary {
    let summary = summarize(transactions, Some(period));

    let expenses: Vec<&Transaction> = in_period(transactions, Some(period))
        .filter(|t| t.is_expense())
        .collect();
    let income_count = in_period(transactions, Some(period))
        .filter(|t| t.is_income())
        .count();

    let avg_expense = summary.total_expenses.div_round(expenses.len() as i64);
    let avg_daily_expense = summary
        .total_expenses
        .div_round(i64::from(period.days_in_month()));

    // max_by returns the last of equal elements, so exact ties on both
    // amount and created_at resolve to the later entry in the input
    let largest_expense = expenses
        .iter()
        .max_by(|a, b| {
            a.amount
                .cmp(&b.amount)
                .then_with(|| a.created_at.cmp(&b.created_at))
        })
        .map(|txn| LargestExpense::from(*txn));

    MonthlySummary {
        period: *period,
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
        balance: summary.balance,
        expenses_by_category: summary.expenses_by_category,
        avg_expense,
        avg_daily_expense,
        largest_expense,
        income_count,
        expense_count: expenses.len(),
    }
}

/// Cumulative balance after each transaction, oldest first
///
/// Ordering is by `(date, created_at)` so back-dated entries slot into the
/// right place.
pub fn running_balance(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let mut balance = Money::zero();
    ordered
        .into_iter()
        .map(|txn| {
            let delta = txn.signed_amount();
            balance += delta;
            BalancePoint {
                transaction_id: txn.id,
                date: txn.date,
                delta,
                balance,
            }
        })
        .collect()
}

fn in_period<'a>(
    transactions: &'a [Transaction],
    period: Option<&'a Period>,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions
        .iter()
        .filter(move |t| period.map_or(true, |p| p.contains(t.date)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorySource, TransactionKind, UserId};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
    }

    fn txn(
        kind: TransactionKind,
        cents: i64,
        category: &str,
        date: (i32, u32, u32),
        seq: i64,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            user_id: UserId::new(),
            description: format!("{} {}", category, seq),
            amount: Money::from_cents(cents),
            kind,
            category: category.to_string(),
            predicted_category: category.to_string(),
            category_source: CategorySource::Auto,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            created_at: base_time() + Duration::seconds(seq),
        }
    }

    fn expense(cents: i64, category: &str, date: (i32, u32, u32), seq: i64) -> Transaction {
        txn(TransactionKind::Expense, cents, category, date, seq)
    }

    fn income(cents: i64, date: (i32, u32, u32), seq: i64) -> Transaction {
        txn(TransactionKind::Income, cents, "Salary", date, seq)
    }

    fn jan() -> Period {
        Period::monthly(2025, 1).unwrap()
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], None);
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert!(summary.expenses_by_category.is_empty());
    }

    #[test]
    fn test_summarize_totals_and_categories() {
        let transactions = vec![
            income(200_000, (2025, 1, 1), 1),
            expense(5_000, "Food & Dining", (2025, 1, 2), 2),
            expense(2_500, "Food & Dining", (2025, 1, 3), 3),
            expense(10_000, "Transport", (2025, 1, 4), 4),
        ];

        let summary = summarize(&transactions, None);
        assert_eq!(summary.total_income, Money::from_cents(200_000));
        assert_eq!(summary.total_expenses, Money::from_cents(17_500));
        assert_eq!(summary.balance, Money::from_cents(182_500));
        assert_eq!(summary.spent_in("Food & Dining"), Money::from_cents(7_500));
        assert_eq!(summary.spent_in("Transport"), Money::from_cents(10_000));
        assert_eq!(summary.spent_in("Salary"), Money::zero());
        assert!(!summary.expenses_by_category.contains_key("Salary"));
    }

    #[test]
    fn test_balance_may_be_negative() {
        let transactions = vec![
            income(1_000, (2025, 1, 1), 1),
            expense(3_000, "Shopping", (2025, 1, 2), 2),
        ];
        let summary = summarize(&transactions, None);
        assert_eq!(summary.balance, Money::from_cents(-2_000));
        assert_eq!(summary.balance, summary.total_income - summary.total_expenses);
    }

    #[test]
    fn test_category_totals_add_up_to_total_expenses() {
        let transactions = vec![
            expense(1_234, "Food & Dining", (2025, 1, 2), 1),
            expense(4_321, "Health", (2025, 1, 5), 2),
            expense(999, "Other", (2025, 2, 7), 3),
            income(50_000, (2025, 1, 1), 4),
        ];
        let summary = summarize(&transactions, None);
        let by_category: Money = summary.expenses_by_category.values().sum();
        assert_eq!(by_category, summary.total_expenses);
    }

    #[test]
    fn test_period_filter_is_inclusive() {
        let transactions = vec![
            expense(100, "Food & Dining", (2024, 12, 31), 1),
            expense(200, "Food & Dining", (2025, 1, 1), 2),
            expense(300, "Food & Dining", (2025, 1, 31), 3),
            expense(400, "Food & Dining", (2025, 2, 1), 4),
        ];
        let summary = summarize(&transactions, Some(&jan()));
        assert_eq!(summary.total_expenses, Money::from_cents(500));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let transactions = vec![
            income(10_000, (2025, 1, 1), 1),
            expense(2_000, "Travel", (2025, 1, 9), 2),
            expense(3_000, "Health", (2025, 1, 9), 3),
        ];
        assert_eq!(
            summarize(&transactions, Some(&jan())),
            summarize(&transactions, Some(&jan()))
        );
        assert_eq!(
            monthly_summary(&transactions, &jan()),
            monthly_summary(&transactions, &jan())
        );
    }

    #[test]
    fn test_monthly_summary_empty_month() {
        let transactions = vec![expense(500, "Shopping", (2025, 2, 3), 1)];
        let summary = monthly_summary(&transactions, &jan());
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.avg_expense, Money::zero());
        assert_eq!(summary.avg_daily_expense, Money::zero());
        assert_eq!(summary.largest_expense, None);
        assert_eq!(summary.expense_count, 0);
    }

    #[test]
    fn test_monthly_summary_averages() {
        let transactions = vec![
            income(100_000, (2025, 1, 1), 1),
            expense(1_000, "Food & Dining", (2025, 1, 2), 2),
            expense(2_000, "Food & Dining", (2025, 1, 3), 3),
            expense(100, "Transport", (2025, 1, 4), 4),
        ];
        let summary = monthly_summary(&transactions, &jan());
        assert_eq!(summary.total_expenses, Money::from_cents(3_100));
        assert_eq!(summary.avg_expense, Money::from_cents(1_033));
        assert_eq!(summary.avg_daily_expense, Money::from_cents(100));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 3);
    }

    #[test]
    fn test_avg_daily_expense_uses_leap_february() {
        let feb_2024 = Period::monthly(2024, 2).unwrap();
        let transactions = vec![expense(2_900, "Health", (2024, 2, 10), 1)];
        let summary = monthly_summary(&transactions, &feb_2024);
        assert_eq!(summary.avg_daily_expense, Money::from_cents(100));

        let feb_2023 = Period::monthly(2023, 2).unwrap();
        let transactions = vec![expense(2_800, "Health", (2023, 2, 10), 1)];
        let summary = monthly_summary(&transactions, &feb_2023);
        assert_eq!(summary.avg_daily_expense, Money::from_cents(100));
    }

    #[test]
    fn test_largest_expense_ties_prefer_most_recent() {
        let older = expense(5_000, "Shopping", (2025, 1, 20), 1);
        let newer = expense(5_000, "Travel", (2025, 1, 5), 2);
        let smaller = expense(4_999, "Health", (2025, 1, 6), 3);
        let newer_id = newer.id;

        let summary = monthly_summary(&[older, newer, smaller], &jan());
        let largest = summary.largest_expense.unwrap();
        assert_eq!(largest.id, newer_id);
        assert_eq!(largest.amount, Money::from_cents(5_000));
    }

    #[test]
    fn test_largest_expense_ignores_income_and_other_months() {
        let transactions = vec![
            income(900_000, (2025, 1, 1), 1),
            expense(90_000, "Travel", (2025, 2, 1), 2),
            expense(1_500, "Food & Dining", (2025, 1, 15), 3),
        ];
        let largest = monthly_summary(&transactions, &jan())
            .largest_expense
            .unwrap();
        assert_eq!(largest.amount, Money::from_cents(1_500));
    }

    #[test]
    fn test_running_balance_orders_by_date_then_insertion() {
        let a = income(10_000, (2025, 1, 5), 1);
        let b = expense(3_000, "Food & Dining", (2025, 1, 2), 2);
        let c = expense(1_000, "Transport", (2025, 1, 5), 3);
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);

        let points = running_balance(&[a, b, c]);
        let ids: Vec<_> = points.iter().map(|p| p.transaction_id).collect();
        assert_eq!(ids, vec![b_id, a_id, c_id]);

        let balances: Vec<_> = points.iter().map(|p| p.balance.cents()).collect();
        assert_eq!(balances, vec![-3_000, 7_000, 6_000]);
        assert_eq!(points[0].delta, Money::from_cents(-3_000));
    }

    #[test]
    fn test_running_balance_empty() {
        assert!(running_balance(&[]).is_empty());
    }
}
