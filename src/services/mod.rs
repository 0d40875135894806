//! Service layer for BudgetWise
//!
//! Services bind the store to the engine: they validate input, fetch a
//! user's records and hand them to the pure engine functions.

pub mod budget;
pub mod savings;
pub mod transaction;

pub use budget::BudgetService;
pub use savings::SavingsService;
pub use transaction::TransactionService;
