//! Configuration module for BudgetWise
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings and keyword table loading
//! - Tracing setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::init_tracing;
pub use paths::BudgetwisePaths;
pub use settings::{load_keyword_table, Settings};
