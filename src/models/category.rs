//! Category model
//!
//! A category is a named spending bucket with a budget limit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique under case-sensitive comparison
    pub name: String,

    /// Spending limit for this category
    pub limit: Money,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, limit: Money) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.limit.is_negative() {
            return Err(CategoryValidationError::NegativeLimit(self.limit));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeLimit(Money),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeLimit(limit) => write!(f, "Limit cannot be negative ({})", limit),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
