//! Summary display formatting
//!
//! Formats totals, monthly statistics and the running balance.

use std::collections::HashMap;

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::engine::{BalancePoint, MonthlySummary, Summary};
use crate::models::{Money, Transaction, TransactionId};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Transaction")]
    transaction: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format totals and the per-category breakdown
pub fn format_summary(summary: &Summary, symbol: &str, heading: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", heading));
    output.push_str(&format!("{}\n", "=".repeat(heading.chars().count())));
    output.push_str(&format!(
        "  Income:    {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses:  {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:   {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str(&format_category_breakdown(summary, symbol));
    output
}

fn format_category_breakdown(summary: &Summary, symbol: &str) -> String {
    if summary.expenses_by_category.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<CategoryRow> = summary
        .expenses_by_category
        .iter()
        .map(|(category, spent)| CategoryRow {
            category: category.clone(),
            spent: spent.format_with_symbol(symbol),
            share: format_share(*spent, summary.total_expenses),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    format!("{}\n", table)
}

/// Format monthly statistics
pub fn format_monthly_summary(monthly: &MonthlySummary, symbol: &str) -> String {
    let summary = Summary {
        total_income: monthly.total_income,
        total_expenses: monthly.total_expenses,
        balance: monthly.balance,
        expenses_by_category: monthly.expenses_by_category.clone(),
    };

    let mut output = format_summary(&summary, symbol, &format!("Monthly Summary: {}", monthly.period));

    output.push('\n');
    output.push_str(&format!(
        "  Transactions:       {} income, {} expense\n",
        monthly.income_count, monthly.expense_count
    ));
    output.push_str(&format!(
        "  Average expense:    {}\n",
        monthly.avg_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Average per day:    {} ({} days)\n",
        monthly.avg_daily_expense.format_with_symbol(symbol),
        monthly.period.days_in_month()
    ));

    match &monthly.largest_expense {
        Some(largest) => output.push_str(&format!(
            "  Largest expense:    {} on {} ({})\n",
            largest.amount.format_with_symbol(symbol),
            largest.date.format("%Y-%m-%d"),
            largest.description
        )),
        None => output.push_str("  Largest expense:    none\n"),
    }

    output
}

/// Format the running balance, oldest first
///
/// `transactions` supplies the descriptions shown next to each step.
pub fn format_balance(points: &[BalancePoint], transactions: &[Transaction], symbol: &str) -> String {
    if points.is_empty() {
        return "No transactions found.".to_string();
    }

    let descriptions: HashMap<TransactionId, &str> = transactions
        .iter()
        .map(|t| (t.id, t.description.as_str()))
        .collect();

    let rows: Vec<BalanceRow> = points
        .iter()
        .map(|point| BalanceRow {
            date: point.date.format("%Y-%m-%d").to_string(),
            transaction: descriptions
                .get(&point.transaction_id)
                .map(|d| d.to_string())
                .unwrap_or_else(|| point.transaction_id.to_string()),
            change: point.delta.format_with_symbol(symbol),
            balance: point.balance.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(2..), Alignment::right());
    table.to_string()
}

fn format_share(part: Money, total: Money) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}%", part.cents() as f64 / total.cents() as f64 * 100.0)
}
