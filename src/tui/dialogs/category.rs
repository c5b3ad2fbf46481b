//! Add category dialog

use ratatui::Frame;

use crate::models::Money;
use crate::tui::widgets::input::TextInput;

use super::{form_frame, render_error, render_hints};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Name,
    Limit,
}

/// State for the add category dialog
#[derive(Debug, Clone, Default)]
pub struct CategoryFormState {
    pub name_input: TextInput,
    pub limit_input: TextInput,
    pub focused_field: CategoryField,
    pub error_message: Option<String>,
}

impl CategoryFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let mut form = Self::default();
        form.reset();
        form
    }

    /// Clear the form for a new entry
    pub fn reset(&mut self) {
        self.name_input = TextInput::new()
            .label("Name")
            .placeholder("e.g. Groceries");
        self.limit_input = TextInput::new().label("Limit").placeholder("e.g. 200");
        self.error_message = None;
        self.set_focus(CategoryField::Name);
    }

    /// Set the focused field
    pub fn set_focus(&mut self, field: CategoryField) {
        self.focused_field = field;
        self.name_input.focused = field == CategoryField::Name;
        self.limit_input.focused = field == CategoryField::Limit;
    }

    /// Move to the other field
    pub fn next_field(&mut self) {
        self.set_focus(match self.focused_field {
            CategoryField::Name => CategoryField::Limit,
            CategoryField::Limit => CategoryField::Name,
        });
    }

    /// The input receiving keystrokes
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            CategoryField::Name => &mut self.name_input,
            CategoryField::Limit => &mut self.limit_input,
        }
    }

    /// Read the name and limit
    ///
    /// Only the amount syntax is checked here; the manager decides whether
    /// the values are acceptable.
    pub fn parse(&self) -> Result<(String, Money), String> {
        let limit = Money::parse(self.limit_input.value())
            .map_err(|e| format!("Invalid limit: {}", e))?;
        Ok((self.name_input.value().trim().to_string(), limit))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add category dialog
pub fn render(frame: &mut Frame, form: &CategoryFormState) {
    let rows = form_frame(frame, "Add Category", 6);

    if let Some(area) = rows.first() {
        frame.render_widget(&form.name_input, *area);
    }
    if let Some(area) = rows.get(2) {
        frame.render_widget(&form.limit_input, *area);
    }
    render_error(frame, rows.get(4), form.error_message.as_deref());
    render_hints(frame, rows.get(5));
}
