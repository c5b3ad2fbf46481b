//! Budget-wide CLI commands: the summary overview and reset

use crate::config::Settings;
use crate::display::{format_spending_bars, format_summary};
use crate::error::BudgetResult;
use crate::services::BudgetManager;

/// Print overall totals and the spending chart
pub fn handle_summary_command(manager: &BudgetManager, settings: &Settings) -> BudgetResult<()> {
    let totals = manager.get_totals();
    let symbol = settings.currency_symbol.as_str();

    print!("{}", format_summary(&totals, symbol));
    let bars = format_spending_bars(&totals, symbol);
    if !bars.is_empty() {
        println!();
        print!("{}", bars);
    }
    Ok(())
}

/// Discard all data; seeded settings restore the default categories
pub fn handle_reset_command(
    manager: &mut BudgetManager,
    settings: &Settings,
    confirmed: bool,
) -> BudgetResult<()> {
    if !confirmed {
        let state = manager.state();
        println!(
            "This deletes {} categories and {} expenses ({} recorded).",
            state.categories.len(),
            state.expenses.len(),
            settings.format_money(state.expenses.total())
        );
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    manager.reset()?;
    println!("Budget reset.");
    if !manager.default_categories().is_empty() {
        println!(
            "Restored default categories: {}",
            manager.category_names().join(", ")
        );
    }
    Ok(())
}
