//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Data commands read a
//! snapshot file into an in-memory store and report on one user.

pub mod budget;
pub mod classify;
pub mod report;

pub use budget::{handle_budgets_command, handle_goals_command};
pub use classify::{handle_classify_command, handle_config_command};
pub use report::{
    handle_balance_command, handle_monthly_command, handle_stats_command, handle_summary_command,
};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{BudgetwisePaths, Settings};
use crate::engine::Categorizer;
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::{Period, UserId};
use crate::storage::{Snapshot, Store};

/// Paths, settings and the categorizer built from them
pub struct Session {
    pub paths: BudgetwisePaths,
    pub settings: Settings,
    pub categorizer: Categorizer,
    pub json: bool,
}

impl Session {
    pub fn new(paths: BudgetwisePaths, settings: Settings, json: bool) -> BudgetwiseResult<Self> {
        let categorizer = Categorizer::new(settings.keyword_table(&paths)?);
        Ok(Self {
            paths,
            settings,
            categorizer,
            json,
        })
    }

    /// Currency symbol for table output
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Load the snapshot and select the user to report on
    ///
    /// Without `--user`, a snapshot that references exactly one user selects
    /// that user.
    pub fn open(&self, snapshot: Option<&Path>, user: Option<&str>) -> BudgetwiseResult<Workspace> {
        let path: PathBuf = snapshot
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.paths.snapshot_file());
        let snapshot = Snapshot::load(&path)?;

        let user = match user {
            Some(raw) => raw.parse::<UserId>().map_err(|e| {
                BudgetwiseError::Validation(format!("Invalid user id '{}': {}", raw, e))
            })?,
            None => {
                let users = snapshot.user_ids();
                let mut iter = users.iter();
                match (iter.next(), iter.next()) {
                    (Some(only), None) => *only,
                    (None, _) => {
                        return Err(BudgetwiseError::Validation(format!(
                            "{} contains no records; pass --user",
                            path.display()
                        )))
                    }
                    (Some(_), Some(_)) => {
                        return Err(BudgetwiseError::Validation(format!(
                            "{} contains {} users; pass --user",
                            path.display(),
                            users.len()
                        )))
                    }
                }
            }
        };

        let store = snapshot.into_store(&self.categorizer)?;
        Ok(Workspace { store, user })
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> BudgetwiseResult<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// A populated store and the user being reported on
#[derive(Debug)]
pub struct Workspace {
    pub store: Store,
    pub user: UserId,
}

/// Parse a month argument
///
/// Accepts `YYYY-MM`, `current` and `last`; `None` means the current month.
pub fn parse_month(arg: Option<&str>) -> BudgetwiseResult<Period> {
    let current = Period::current_month();
    match arg.map(str::trim) {
        None | Some("current") => Ok(current),
        Some("last") | Some("previous") => Ok(current.prev()),
        Some(raw) => Period::parse(raw)
            .map_err(|e| BudgetwiseError::Validation(format!("Invalid month '{}': {}", raw, e))),
    }
}
