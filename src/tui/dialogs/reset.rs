//! Reset confirmation dialog
//!
//! Spells out what a reset throws away and what the budget starts over
//! with before asking for y/n.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Settings;
use crate::models::Money;
use crate::services::BudgetManager;

use super::form_frame;

/// What a reset would discard and restore, captured when the dialog opens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPreview {
    pub categories: usize,
    pub expenses: usize,
    pub spent: Money,
    pub restored: Vec<String>,
}

impl ResetPreview {
    pub fn of(manager: &BudgetManager) -> Self {
        let state = manager.state();
        Self {
            categories: state.categories.len(),
            expenses: state.expenses.len(),
            spent: state.expenses.total(),
            restored: manager
                .default_categories()
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        }
    }

    /// Body text, one entry per dialog row
    pub fn lines(&self, settings: &Settings) -> Vec<String> {
        let mut lines = vec![format!(
            "Discards {} categories and {} expenses",
            self.categories, self.expenses
        )];
        if self.expenses > 0 {
            lines.push(format!("({} of recorded spending)", settings.format_money(self.spent)));
        }
        lines.push(String::new());
        if self.restored.is_empty() {
            lines.push("Starts over with an empty budget".to_string());
        } else {
            lines.push(format!("Starts over with: {}", self.restored.join(", ")));
        }
        lines
    }
}

/// Render the reset confirmation
pub fn render(frame: &mut Frame, preview: &ResetPreview, settings: &Settings) {
    let body = preview.lines(settings);
    let rows = form_frame(frame, "Reset Budget", body.len() as u16 + 2);

    let warning = Style::default().fg(Color::Yellow);
    for (area, text) in rows.iter().zip(&body) {
        frame.render_widget(Paragraph::new(Span::styled(text.as_str(), warning)), *area);
    }

    if let Some(area) = rows.last() {
        let hints = Line::from(vec![
            Span::styled(
                "[y]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Reset  "),
            Span::styled("[n]", Style::default().fg(Color::Green)),
            Span::raw(" Keep everything"),
        ]);
        frame.render_widget(Paragraph::new(hints), *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::Persistence;
    use tempfile::TempDir;

    #[test]
    fn test_preview_counts_what_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            Vec::new(),
        );
        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_category("Fun", Money::from_units(20)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_cents(1550)).unwrap();

        let preview = ResetPreview::of(&manager);
        assert_eq!(preview.categories, 2);
        assert_eq!(preview.expenses, 1);
        assert_eq!(
            preview.lines(&Settings::default()),
            vec![
                "Discards 2 categories and 1 expenses".to_string(),
                "($15.50 of recorded spending)".to_string(),
                String::new(),
                "Starts over with an empty budget".to_string(),
            ]
        );
    }

    #[test]
    fn test_preview_names_restored_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            vec![
                Category::new("Food", Money::from_units(300)),
                Category::new("Bills", Money::from_units(400)),
            ],
        );

        let lines = ResetPreview::of(&manager).lines(&Settings::default());
        assert_eq!(lines[0], "Discards 2 categories and 0 expenses");
        assert_eq!(lines.last().unwrap(), "Starts over with: Food, Bills");
    }
}
