//! Expense display formatting

use crate::models::Expense;

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[&Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16}  {:<cw$}  {:>12}  {}\n",
        "Date",
        "Category",
        "Amount",
        "Description",
        cw = category_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(category_width + 48)));

    for expense in expenses {
        output.push_str(&format!(
            "{:<16}  {:<cw$}  {:>12}  {}\n",
            expense.date_label(),
            expense.category,
            expense.amount.format_with_symbol(symbol),
            expense.description,
            cw = category_width
        ));
    }

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}
