//! Add expense dialog
//!
//! The category is picked from the existing categories with the arrow keys,
//! so an expense can only be entered against a category that exists.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Money;
use crate::tui::widgets::input::TextInput;

use super::{form_frame, render_error, render_hints};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
    Description,
}

/// State for the add expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Categories to choose from, sorted by name
    pub categories: Vec<String>,
    pub selected_category_index: usize,
    pub amount_input: TextInput,
    pub description_input: TextInput,
    pub focused_field: ExpenseField,
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the form, preselecting `selected` when it is in the list
    pub fn init_with_categories(&mut self, categories: Vec<String>, selected: Option<&str>) {
        self.selected_category_index = selected
            .and_then(|name| categories.iter().position(|c| c == name))
            .unwrap_or(0);
        self.categories = categories;
        self.amount_input = TextInput::new().label("Amount").placeholder("e.g. 15.50");
        self.description_input = TextInput::new()
            .label("Description")
            .placeholder("optional");
        self.error_message = None;
        self.set_focus(ExpenseField::Category);
    }

    /// Set the focused field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.amount_input.focused = field == ExpenseField::Amount;
        self.description_input.focused = field == ExpenseField::Description;
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.set_focus(match self.focused_field {
            ExpenseField::Category => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Description,
            ExpenseField::Description => ExpenseField::Category,
        });
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.set_focus(match self.focused_field {
            ExpenseField::Category => ExpenseField::Description,
            ExpenseField::Amount => ExpenseField::Category,
            ExpenseField::Description => ExpenseField::Amount,
        });
    }

    /// Whether the category selector has focus
    pub fn on_category_field(&self) -> bool {
        self.focused_field == ExpenseField::Category
    }

    /// The text input receiving keystrokes, if a text field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Description => Some(&mut self.description_input),
        }
    }

    /// Select next category
    pub fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.selected_category_index = (self.selected_category_index + 1) % self.categories.len();
        }
    }

    /// Select previous category
    pub fn prev_category(&mut self) {
        if !self.categories.is_empty() {
            self.selected_category_index = if self.selected_category_index == 0 {
                self.categories.len() - 1
            } else {
                self.selected_category_index - 1
            };
        }
    }

    /// Get selected category name
    pub fn selected_category(&self) -> Option<&str> {
        self.categories
            .get(self.selected_category_index)
            .map(String::as_str)
    }

    /// Read the category, description and amount
    pub fn parse(&self) -> Result<(String, String, Money), String> {
        let category = self
            .selected_category()
            .ok_or_else(|| "No category selected".to_string())?
            .to_string();
        let amount = Money::parse(self.amount_input.value())
            .map_err(|e| format!("Invalid amount: {}", e))?;
        Ok((
            category,
            self.description_input.value().trim().to_string(),
            amount,
        ))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, form: &ExpenseFormState) {
    let rows = form_frame(frame, "Add Expense", 8);

    if let Some(area) = rows.first() {
        let value_style = if form.on_category_field() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let line = Line::from(vec![
            Span::styled("Category", Style::default().fg(Color::Cyan)),
            Span::raw(": "),
            Span::styled(
                format!("< {} >", form.selected_category().unwrap_or("(none)")),
                value_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
    if let Some(area) = rows.get(2) {
        frame.render_widget(&form.amount_input, *area);
    }
    if let Some(area) = rows.get(4) {
        frame.render_widget(&form.description_input, *area);
    }
    render_error(frame, rows.get(6), form.error_message.as_deref());
    render_hints(frame, rows.get(7));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ExpenseFormState {
        let mut form = ExpenseFormState::new();
        form.init_with_categories(
            vec!["Bills".into(), "Food".into(), "Fun".into()],
            Some("Food"),
        );
        form
    }

    #[test]
    fn test_preselects_category() {
        assert_eq!(form().selected_category(), Some("Food"));
    }

    #[test]
    fn test_category_cycles() {
        let mut form = form();
        form.next_category();
        form.next_category();
        assert_eq!(form.selected_category(), Some("Bills"));
        form.prev_category();
        assert_eq!(form.selected_category(), Some("Fun"));
    }

    #[test]
    fn test_parse() {
        let mut form = form();
        form.next_field();
        for c in "4.75".chars() {
            form.focused_input().unwrap().insert(c);
        }
        form.next_field();
        for c in "Coffee ".chars() {
            form.focused_input().unwrap().insert(c);
        }

        assert_eq!(
            form.parse().unwrap(),
            ("Food".to_string(), "Coffee".to_string(), Money::from_cents(475))
        );
    }

    #[test]
    fn test_missing_amount() {
        assert!(form().parse().unwrap_err().starts_with("Invalid amount"));
    }
}
