//! Edit limit dialog

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Money;
use crate::tui::widgets::input::TextInput;

use super::{form_frame, render_error, render_hints};

/// State for the edit limit dialog
#[derive(Debug, Clone, Default)]
pub struct LimitFormState {
    pub category: String,
    pub limit_input: TextInput,
    pub error_message: Option<String>,
}

impl LimitFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the form for `category`, prefilled with its current limit
    pub fn init_for(&mut self, category: String, current: Money) {
        self.category = category;
        let mut input = TextInput::new()
            .label("New limit")
            .content(format!("{}.{:02}", current.dollars(), current.cents_part()));
        input.focused = true;
        self.limit_input = input;
        self.error_message = None;
    }

    /// Read the category and new limit
    pub fn parse(&self) -> Result<(String, Money), String> {
        let limit = Money::parse(self.limit_input.value())
            .map_err(|e| format!("Invalid limit: {}", e))?;
        Ok((self.category.clone(), limit))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the edit limit dialog
pub fn render(frame: &mut Frame, form: &LimitFormState) {
    let rows = form_frame(frame, "Edit Limit", 6);

    if let Some(area) = rows.first() {
        let line = Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::Cyan)),
            Span::raw(form.category.as_str()),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
    if let Some(area) = rows.get(2) {
        frame.render_widget(&form.limit_input, *area);
    }
    render_error(frame, rows.get(4), form.error_message.as_deref());
    render_hints(frame, rows.get(5));
}
