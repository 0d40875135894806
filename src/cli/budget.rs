//! Budget and savings goal commands

use serde::Serialize;

use crate::display::{format_budget_statuses, format_goals};
use crate::error::BudgetwiseResult;
use crate::models::{GoalProgress, SavingsGoal};
use crate::services::{BudgetService, SavingsService};

use super::{parse_month, Session, Workspace};

/// Budget-vs-actual for a month, or a single category with `category`
pub fn handle_budgets_command(
    session: &Session,
    workspace: &Workspace,
    month: Option<&str>,
    category: Option<&str>,
) -> BudgetwiseResult<()> {
    let service = BudgetService::new(&workspace.store);
    let period = parse_month(month)?;

    let statuses = match category {
        Some(category) => vec![service.evaluate_category(workspace.user, &period, category)?],
        None => service.evaluate(workspace.user, &period)?,
    };

    if session.json {
        return session.print_json(&statuses);
    }

    println!(
        "{}",
        format_budget_statuses(&statuses, &period, session.symbol())
    );
    Ok(())
}

#[derive(Serialize)]
struct GoalView<'a> {
    #[serde(flatten)]
    goal: &'a SavingsGoal,
    progress: &'a GoalProgress,
}

pub fn handle_goals_command(session: &Session, workspace: &Workspace) -> BudgetwiseResult<()> {
    let service = SavingsService::new(&workspace.store);
    let goals = service.list_with_progress(workspace.user)?;

    if session.json {
        let views: Vec<GoalView> = goals
            .iter()
            .map(|(goal, progress)| GoalView { goal, progress })
            .collect();
        return session.print_json(&views);
    }

    println!("{}", format_goals(&goals, session.symbol()));
    Ok(())
}
