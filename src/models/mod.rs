//! Core data models for BudgetWise
//!
//! Plain value records handed to the engine: transactions, budgets, savings
//! goals and the keyword table used for categorization.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod savings_goal;
pub mod transaction;

pub use budget::{Budget, BudgetKey, BudgetStatus};
pub use category::{CategoryKeywordTable, CategoryRule, OTHER_CATEGORY};
pub use ids::{SavingsGoalId, TransactionId, UserId};
pub use money::Money;
pub use period::Period;
pub use savings_goal::{GoalProgress, GoalUpdate, SavingsGoal};
pub use transaction::{CategorySource, NewTransaction, Transaction, TransactionKind};
