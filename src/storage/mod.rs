//! Storage layer for SmartBudget
//!
//! In-memory stores for categories and expenses, plus the JSON file
//! persistence that snapshots them with atomic whole-file writes.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod persistence;

pub use categories::CategoryStore;
pub use expenses::ExpenseLedger;
pub use file_io::{read_json, write_json_atomic};
pub use persistence::{BudgetState, Persistence};
