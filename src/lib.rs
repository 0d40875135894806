//! BudgetWise - financial aggregation and categorization engine
//!
//! Assigns spending categories to free-text transactions, aggregates income
//! and expenses, evaluates budgets against actual spend and derives savings
//! goal progress.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Plain records (transactions, budgets, goals, keyword table)
//! - `engine`: Pure categorization and aggregation functions
//! - `storage`: In-memory repositories and snapshot loading
//! - `services`: Validation and store access on top of the engine
//! - `config`: Paths, settings and tracing setup
//! - `display`: Table formatting for terminal output
//! - `cli`: Command handlers for the `budgetwise` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budgetwise::engine::Categorizer;
//! use budgetwise::models::{Money, NewTransaction, UserId};
//! use budgetwise::services::TransactionService;
//! use budgetwise::storage::Store;
//!
//! let store = Store::new();
//! let categorizer = Categorizer::default();
//! let service = TransactionService::new(&store, &categorizer);
//!
//! let user = UserId::new();
//! let txn = service
//!     .create(NewTransaction::expense(user, "Dominos Pizza order", Money::from_cents(1299)))
//!     .unwrap();
//! assert_eq!(txn.category, "Food & Dining");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetwiseError, BudgetwiseResult};
