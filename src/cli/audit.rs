//! Change journal CLI command

use crate::audit::AuditJournal;
use crate::error::BudgetResult;

/// Print the newest `count` changes, oldest first
pub fn handle_audit_command(journal: &AuditJournal, count: usize) -> BudgetResult<()> {
    let (records, total) = journal.tail(count)?;
    if records.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record);
    }
    println!();
    println!(
        "Showing {} of {} changes ({})",
        records.len(),
        total,
        journal.path().display()
    );
    Ok(())
}
