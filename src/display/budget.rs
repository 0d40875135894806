//! Budget and savings goal display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetStatus, GoalProgress, Money, Period, SavingsGoal};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    status: &'static str,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Started")]
    started: String,
    #[tabled(rename = "Due")]
    due: String,
}

/// Format budget-vs-actual rows for a month
pub fn format_budget_statuses(statuses: &[BudgetStatus], period: &Period, symbol: &str) -> String {
    if statuses.is_empty() {
        return format!("No budgets apply to {}.", period);
    }

    let rows: Vec<BudgetRow> = statuses
        .iter()
        .map(|status| BudgetRow {
            category: status.category.clone(),
            limit: status.limit.format_with_symbol(symbol),
            spent: status.spent.format_with_symbol(symbol),
            remaining: status.remaining.format_with_symbol(symbol),
            used: format!("{:.0}%", status.percent_used()),
            status: if status.is_over_budget() { "OVER" } else { "" },
        })
        .collect();

    let total_limit: Money = statuses.iter().map(|s| s.limit).sum();
    let total_spent: Money = statuses.iter().map(|s| s.spent).sum();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..5), Alignment::right());

    format!(
        "Budgets: {}\n{}\n\nTotal: {} of {} spent",
        period,
        table,
        total_spent.format_with_symbol(symbol),
        total_limit.format_with_symbol(symbol)
    )
}

/// Format savings goals with their derived progress
pub fn format_goals(goals: &[(SavingsGoal, GoalProgress)], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals found.".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|(goal, progress)| GoalRow {
            name: goal.name.clone(),
            target: goal.target_amount.format_with_symbol(symbol),
            saved: progress.saved_amount.format_with_symbol(symbol),
            remaining: progress.remaining_amount.format_with_symbol(symbol),
            started: goal.start_date.format("%Y-%m-%d").to_string(),
            due: goal
                .target_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..4), Alignment::right());
    table.to_string()
}
