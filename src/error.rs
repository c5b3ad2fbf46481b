//! Custom error types for SmartBudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for SmartBudget operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    /// A category with this name already exists
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Category limits must be zero or greater
    #[error("Invalid limit {0}: limits cannot be negative")]
    InvalidLimit(Money),

    /// Expense amounts must be strictly positive
    #[error("Invalid amount {0}: expenses must be greater than zero")]
    InvalidAmount(Money),

    /// Accepting the amount would push a running total past what `Money` holds
    #[error("Amount {0} is too large: the budget total would overflow")]
    TotalOverflow(Money),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The persisted budget file exists but does not match the schema
    #[error("Corrupt budget data: {0}")]
    CorruptState(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors outside the budget file (audit log, settings)
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was a rejected input rather than a storage failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::DuplicateCategory(_)
                | Self::InvalidLimit(_)
                | Self::InvalidAmount(_)
                | Self::TotalOverflow(_)
                | Self::NotFound { .. }
        )
    }

    /// Check if this error means the in-memory state is ahead of the disk
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SmartBudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
