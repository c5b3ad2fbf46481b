//! Core data models for SmartBudget
//!
//! This module contains the data structures of the budgeting domain:
//! categories with spending limits, expenses, and the derived totals
//! every view renders from.

pub mod category;
pub mod expense;
pub mod money;
pub mod summary;

pub use category::{Category, CategoryValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use summary::{CategorySummary, Totals};
