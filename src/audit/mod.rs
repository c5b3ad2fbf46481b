//! Change journal for SmartBudget
//!
//! Every accepted mutation appends a `ChangeRecord` to `audit.log` under the
//! data directory: the operation name plus the per-category movement of the
//! spent and limit totals. Journal failures are logged and never undo or
//! fail the mutation itself.

mod change;
mod journal;

pub use change::{diff_totals, CategoryDelta, ChangeRecord, Operation, Shift};
pub use journal::AuditJournal;
