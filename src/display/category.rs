//! Category display formatting

use crate::models::{Category, CategorySummary, Expense, Totals};

use super::expense::format_expense_list;

/// Format categories as a table, in the order they were created
pub fn format_category_list(categories: &[&Category], totals: &Totals, symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'smartbudget category add <name> <limit>' to create one.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Category",
        "Limit",
        "Spent",
        "Remaining",
        width = name_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 42)));

    for category in categories {
        let summary = CategorySummary::new(
            category.name.as_str(),
            totals.spent(&category.name),
            category.limit,
        );
        let flag = if summary.is_over_limit() { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}{}\n",
            summary.name,
            summary.limit.format_with_symbol(symbol),
            summary.spent.format_with_symbol(symbol),
            summary.remaining.format_with_symbol(symbol),
            flag,
            width = name_width
        ));
    }

    output
}

/// Format a single category with its expenses
pub fn format_category_details(
    summary: &CategorySummary,
    expenses: &[&Expense],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", summary.name));
    output.push_str(&format!("  Limit:     {}\n", summary.limit.format_with_symbol(symbol)));
    output.push_str(&format!("  Spent:     {}\n", summary.spent.format_with_symbol(symbol)));
    output.push_str(&format!(
        "  Remaining: {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Used:      {:.0}%\n", summary.used_ratio() * 100.0));
    if summary.is_over_limit() {
        output.push_str("  Over limit!\n");
    }

    output.push('\n');
    output.push_str(&format_expense_list(expenses, symbol));
    output
}
