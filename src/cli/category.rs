//! Category CLI commands
//!
//! Implements CLI commands for creating categories and managing their limits.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_details, format_category_list};
use crate::error::BudgetResult;
use crate::services::BudgetManager;

use super::parse_amount;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their limits and spending
    List,

    /// Create a new category
    Add {
        /// Category name (case-sensitive)
        name: String,
        /// Spending limit (e.g., "200" or "200.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Change a category's spending limit
    Limit {
        /// Category name
        name: String,
        /// New spending limit
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Show a category's totals and expenses
    Show {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    manager: &mut BudgetManager,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let categories: Vec<_> = manager.categories().collect();
            print!(
                "{}",
                format_category_list(&categories, &manager.get_totals(), symbol)
            );
        }

        CategoryCommands::Add { name, limit } => {
            let limit = parse_amount(&limit, "limit")?;
            manager.add_category(&name, limit)?;
            println!("Created category: {}", name.trim());
            println!("  Limit: {}", settings.format_money(limit));
        }

        CategoryCommands::Limit { name, limit } => {
            let limit = parse_amount(&limit, "limit")?;
            manager.update_limit(&name, limit)?;
            println!("Updated limit for {}: {}", name, settings.format_money(limit));
        }

        CategoryCommands::Show { name } => {
            let summary = manager.category_summary(&name)?;
            let expenses = manager.expenses_for_category(&name)?;
            print!("{}", format_category_details(&summary, &expenses, symbol));
        }
    }

    Ok(())
}
