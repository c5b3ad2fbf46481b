//! Budget summary formatting
//!
//! The overview printed by `smartbudget summary`: totals, overspent
//! categories, and a text bar chart of spending per category.

use crate::models::{Money, Totals};

const BAR_WIDTH: usize = 30;

/// Format overall totals and any overspent categories
pub fn format_summary(totals: &Totals, symbol: &str) -> String {
    if totals.category_count() == 0 {
        return "No categories yet.\n".to_string();
    }

    let spent = totals.total_spent();
    let limit = totals.total_limit();

    let mut output = String::new();
    output.push_str("Budget Summary\n");
    output.push_str("==============\n");
    output.push_str(&format!("Categories:  {}\n", totals.category_count()));
    output.push_str(&format!("Total limit: {}\n", limit.format_with_symbol(symbol)));
    output.push_str(&format!("Total spent: {}\n", spent.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Remaining:   {}\n",
        (limit - spent).format_with_symbol(symbol)
    ));

    let over = totals.over_limit();
    if !over.is_empty() {
        output.push_str(&format!("\nOver limit: {}\n", over.join(", ")));
    }

    output
}

/// Format spending per category as horizontal bars, largest first
///
/// Each bar is scaled against the category's own limit; overspent
/// categories are drawn full width and marked with `!`.
pub fn format_spending_bars(totals: &Totals, symbol: &str) -> String {
    let mut rows: Vec<_> = totals.summaries().collect();
    if rows.is_empty() {
        return String::new();
    }
    rows.sort_by(|a, b| b.spent.cmp(&a.spent).then_with(|| a.name.cmp(&b.name)));

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        let filled = bar_cells(row.spent, row.limit);
        let marker = if row.is_over_limit() { '!' } else { ' ' };
        output.push_str(&format!(
            "{:<width$} |{}{}|{} {} / {}\n",
            row.name,
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            marker,
            row.spent.format_with_symbol(symbol),
            row.limit.format_with_symbol(symbol),
            width = name_width
        ));
    }
    output
}

fn bar_cells(spent: Money, limit: Money) -> usize {
    let ratio = spent.ratio_of(limit);
    ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH)
}
