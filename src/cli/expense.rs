//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::BudgetResult;
use crate::services::BudgetManager;

use super::parse_amount;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a category
    Add {
        /// Category name
        category: String,
        /// Amount spent (must be greater than zero)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List expenses, newest first
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show (defaults to the configured count)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    manager: &mut BudgetManager,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
        } => {
            let amount = parse_amount(&amount, "amount")?;
            manager.add_expense(&category, &description, amount)?;

            let summary = manager.category_summary(&category)?;
            println!(
                "Recorded {} in {}",
                settings.format_money(amount),
                category
            );
            println!(
                "  Spent {} of {} ({} remaining)",
                settings.format_money(summary.spent),
                settings.format_money(summary.limit),
                settings.format_money(summary.remaining)
            );
            if summary.is_over_limit() {
                println!("  Warning: {} is over its limit", category);
            }
        }

        ExpenseCommands::List { category, limit } => {
            let limit = limit.unwrap_or(settings.recent_expense_count);
            let expenses = match category {
                Some(name) => {
                    let mut expenses = manager.expenses_for_category(&name)?;
                    expenses.reverse();
                    expenses.truncate(limit);
                    expenses
                }
                None => manager.recent_expenses(limit),
            };
            print!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
