//! Display formatting for terminal output
//!
//! Plain-text tables and bar charts for the command-line interface. Every
//! formatter takes the currency symbol from the user's settings.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::{format_category_details, format_category_list};
pub use expense::format_expense_list;
pub use summary::{format_spending_bars, format_summary};
