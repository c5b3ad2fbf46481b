//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget manager.

pub mod audit;
pub mod category;
pub mod expense;
pub mod report;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_reset_command, handle_summary_command};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Parse a user-supplied amount such as "15", "15.5" or "$15.50"
pub(crate) fn parse_amount(input: &str, what: &str) -> BudgetResult<Money> {
    Money::parse(input)
        .map_err(|e| BudgetError::Validation(format!("Invalid {} '{}': {}", what, input, e)))
}
