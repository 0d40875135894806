//! Transaction model
//!
//! A transaction is an income or expense record with a category assigned
//! once at creation time. Transactions are never edited afterwards; they are
//! only deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TransactionId, UserId};
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Provenance of a transaction's category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    /// Assigned by the keyword classifier
    Auto,
    /// Supplied by the user and different from the classifier's prediction
    Manual,
}

impl fmt::Display for CategorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Input for creating a transaction
///
/// The store assigns `id` and `created_at`; the categorizer decides the
/// final category and its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    /// Category chosen by the user, if any
    #[serde(default)]
    pub category: Option<String>,
    /// Transaction date; defaults to the creation day
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Create an expense draft with no manual category
    pub fn expense(user_id: UserId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            user_id,
            description: description.into(),
            amount,
            kind: TransactionKind::Expense,
            category: None,
            date: None,
        }
    }

    /// Create an income draft with no manual category
    pub fn income(user_id: UserId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            kind: TransactionKind::Income,
            ..Self::expense(user_id, description, amount)
        }
    }

    /// Set the manual category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the transaction date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(
                self.description.len(),
            ));
        }

        Ok(())
    }
}

/// Longest accepted description, in bytes
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// A stored financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owner
    pub user_id: UserId,

    /// Free-text description
    pub description: String,

    /// Amount (always positive; direction comes from `kind`)
    pub amount: Money,

    pub kind: TransactionKind,

    /// Final category label (never empty)
    pub category: String,

    /// What the classifier predicted at creation time
    pub predicted_category: String,

    pub category_source: CategorySource,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Insertion timestamp, strictly increasing within a store
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with sign applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount(),
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
    DescriptionTooLong(usize),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} bytes, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
