//! Pure computation over plain records
//!
//! Nothing in here touches storage or holds mutable state. Callers fetch the
//! relevant records and pass them in.

pub mod aggregator;
pub mod budget;
pub mod categorizer;
pub mod provenance;
pub mod savings;

pub use aggregator::{
    monthly_summary, running_balance, summarize, BalancePoint, LargestExpense, MonthlySummary,
    Summary,
};
pub use budget::{evaluate, evaluate_category};
pub use categorizer::{CategoryAssignment, Categorizer};
pub use provenance::{CategorizationStats, SourceCounts};
pub use savings::progress;
