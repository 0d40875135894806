//! Display formatting for terminal output
//!
//! Renders engine results as plain-text tables.

pub mod budget;
pub mod stats;
pub mod summary;

pub use budget::{format_budget_statuses, format_goals};
pub use stats::format_stats;
pub use summary::{format_balance, format_monthly_summary, format_summary};
