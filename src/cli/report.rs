//! Reporting commands
//!
//! Summary, monthly statistics, running balance and categorization stats
//! for the selected user.

use crate::display::{format_balance, format_monthly_summary, format_stats, format_summary};
use crate::error::BudgetwiseResult;
use crate::services::TransactionService;

use super::{parse_month, Session, Workspace};

/// All-time totals, or one month's with `month`
pub fn handle_summary_command(
    session: &Session,
    workspace: &Workspace,
    month: Option<&str>,
) -> BudgetwiseResult<()> {
    let service = TransactionService::new(&workspace.store, &session.categorizer);
    let period = month.map(|m| parse_month(Some(m))).transpose()?;
    let summary = service.summary(workspace.user, period.as_ref())?;

    if session.json {
        return session.print_json(&summary);
    }

    let heading = match &period {
        Some(period) => format!("Summary: {}", period),
        None => "Summary: all time".to_string(),
    };
    print!("{}", format_summary(&summary, session.symbol(), &heading));
    Ok(())
}

pub fn handle_monthly_command(
    session: &Session,
    workspace: &Workspace,
    month: Option<&str>,
) -> BudgetwiseResult<()> {
    let service = TransactionService::new(&workspace.store, &session.categorizer);
    let period = parse_month(month)?;
    let monthly = service.monthly_summary(workspace.user, &period)?;

    if session.json {
        return session.print_json(&monthly);
    }

    print!("{}", format_monthly_summary(&monthly, session.symbol()));
    Ok(())
}

pub fn handle_balance_command(session: &Session, workspace: &Workspace) -> BudgetwiseResult<()> {
    let service = TransactionService::new(&workspace.store, &session.categorizer);
    let points = service.running_balance(workspace.user)?;

    if session.json {
        return session.print_json(&points);
    }

    let transactions = service.list(workspace.user)?;
    println!("{}", format_balance(&points, &transactions, session.symbol()));
    Ok(())
}

pub fn handle_stats_command(session: &Session, workspace: &Workspace) -> BudgetwiseResult<()> {
    let service = TransactionService::new(&workspace.store, &session.categorizer);
    let stats = service.categorization_stats(workspace.user)?;

    if session.json {
        return session.print_json(&stats);
    }

    println!("{}", format_stats(&stats));
    Ok(())
}
