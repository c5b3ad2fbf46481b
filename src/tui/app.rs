//! Application state for the TUI
//!
//! The App struct owns the budget manager and holds all state needed for
//! rendering and handling events. The panels are observers: they are
//! subscribed to the manager when the app starts and re-render from the
//! totals each notification hands them.

use crate::config::Settings;
use crate::error::BudgetError;
use crate::services::BudgetManager;

use super::dialogs::category::CategoryFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::limit::LimitFormState;
use super::dialogs::reset::ResetPreview;
use super::views::Views;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    AddCategory,
    AddExpense,
    EditLimit,
    ConfirmReset,
}

/// Main application state
pub struct App {
    /// The budget being edited
    pub manager: BudgetManager,

    /// Application settings
    pub settings: Settings,

    /// Panels subscribed to the manager
    pub views: Views,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the category list
    pub selected_category_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add category dialog state
    pub category_form: CategoryFormState,

    /// Add expense dialog state
    pub expense_form: ExpenseFormState,

    /// Edit limit dialog state
    pub limit_form: LimitFormState,

    /// What the open reset dialog would discard
    pub reset_preview: ResetPreview,
}

impl App {
    /// Create a new App instance, subscribing every panel to the manager
    pub fn new(mut manager: BudgetManager, settings: Settings) -> Self {
        let views = Views::attach(&mut manager);

        Self {
            manager,
            settings,
            views,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_category_index: 0,
            status_message: None,
            category_form: CategoryFormState::new(),
            expense_form: ExpenseFormState::new(),
            limit_form: LimitFormState::new(),
            reset_preview: ResetPreview::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog, preparing its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddCategory => self.category_form.reset(),
            ActiveDialog::AddExpense => {
                if self.manager.category_names().is_empty() {
                    self.set_status("Add a category first (c)");
                    return;
                }
                let names = self
                    .manager
                    .category_names()
                    .into_iter()
                    .map(String::from)
                    .collect();
                let selected = self.selected_category();
                self.expense_form
                    .init_with_categories(names, selected.as_deref());
            }
            ActiveDialog::EditLimit => {
                let Some(name) = self.selected_category() else {
                    self.set_status("No category selected");
                    return;
                };
                let limit = self
                    .manager
                    .get_totals()
                    .limit(&name)
                    .unwrap_or_default();
                self.limit_form.init_for(name, limit);
            }
            ActiveDialog::ConfirmReset => self.reset_preview = ResetPreview::of(&self.manager),
            ActiveDialog::None | ActiveDialog::Help => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Name of the category highlighted in the list
    pub fn selected_category(&self) -> Option<String> {
        self.views
            .category_list
            .borrow()
            .name_at(self.selected_category_index)
            .map(String::from)
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.views.category_list.borrow().len();
        if count > 0 && self.selected_category_index + 1 < count {
            self.selected_category_index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_category_index = self.selected_category_index.saturating_sub(1);
    }

    /// Select a category by name, if it is listed
    pub fn select_category(&mut self, name: &str) {
        if let Some(index) = self.views.category_list.borrow().position(name) {
            self.selected_category_index = index;
        }
    }

    /// Keep the selection inside the list after it shrinks
    fn clamp_selection(&mut self) {
        let count = self.views.category_list.borrow().len();
        if self.selected_category_index >= count {
            self.selected_category_index = count.saturating_sub(1);
        }
    }

    /// Submit the add category dialog
    pub fn submit_category(&mut self) {
        let (name, limit) = match self.category_form.parse() {
            Ok(values) => values,
            Err(msg) => return self.category_form.set_error(msg),
        };

        let result = self.manager.add_category(&name, limit);
        match self.finish_mutation(result) {
            Ok(()) => {
                self.select_category(&name);
                self.set_status(format!(
                    "Added {} with limit {}",
                    name,
                    self.settings.format_money(limit)
                ));
            }
            Err(msg) => self.category_form.set_error(msg),
        }
    }

    /// Submit the add expense dialog
    pub fn submit_expense(&mut self) {
        let (category, description, amount) = match self.expense_form.parse() {
            Ok(values) => values,
            Err(msg) => return self.expense_form.set_error(msg),
        };

        let result = self.manager.add_expense(&category, &description, amount);
        match self.finish_mutation(result) {
            Ok(()) => {
                self.select_category(&category);
                self.set_status(format!(
                    "Recorded {} in {}",
                    self.settings.format_money(amount),
                    category
                ));
            }
            Err(msg) => self.expense_form.set_error(msg),
        }
    }

    /// Submit the edit limit dialog
    pub fn submit_limit(&mut self) {
        let (name, limit) = match self.limit_form.parse() {
            Ok(values) => values,
            Err(msg) => return self.limit_form.set_error(msg),
        };

        let result = self.manager.update_limit(&name, limit);
        match self.finish_mutation(result) {
            Ok(()) => self.set_status(format!(
                "Limit for {} is now {}",
                name,
                self.settings.format_money(limit)
            )),
            Err(msg) => self.limit_form.set_error(msg),
        }
    }

    /// Reset the budget after confirmation
    pub fn confirm_reset(&mut self) {
        let result = self.manager.reset();
        if self.finish_mutation(result).is_ok() {
            self.selected_category_index = 0;
            self.set_status("Budget reset");
        }
    }

    /// Write the budget to disk again
    pub fn save(&mut self) {
        match self.manager.save() {
            Ok(()) => self.set_status(format!("Saved to {}", self.manager.data_path().display())),
            Err(err) => self.set_status(format!("Save failed: {}", err)),
        }
    }

    /// Close the dialog unless the mutation was rejected
    ///
    /// A save failure still closes the dialog: the change is in memory and
    /// on screen, only the disk is behind.
    fn finish_mutation(&mut self, result: Result<(), BudgetError>) -> Result<(), String> {
        match result {
            Ok(()) => {
                self.close_dialog();
                self.clamp_selection();
                Ok(())
            }
            Err(err) if err.is_io() => {
                self.close_dialog();
                self.clamp_selection();
                self.set_status(format!("Not saved ({}); press s to retry", err));
                Err(err.to_string())
            }
            Err(err) => Err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::Persistence;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            Vec::new(),
        );
        (temp_dir, App::new(manager, Settings::default()))
    }

    fn type_into(input: &mut crate::tui::widgets::input::TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_views_follow_mutations() {
        let (_temp_dir, mut app) = create_test_app();

        app.open_dialog(ActiveDialog::AddCategory);
        type_into(&mut app.category_form.name_input, "Food");
        type_into(&mut app.category_form.limit_input, "200");
        app.submit_category();

        assert!(!app.has_dialog());
        assert_eq!(app.selected_category().as_deref(), Some("Food"));
        assert_eq!(
            app.views.summary.borrow().totals().limit("Food"),
            Some(Money::from_units(200))
        );

        app.open_dialog(ActiveDialog::AddExpense);
        type_into(&mut app.expense_form.amount_input, "15");
        app.submit_expense();

        assert_eq!(
            app.views.spending_chart.borrow().totals().spent("Food"),
            Money::from_units(15)
        );
        assert_eq!(app.manager.notification_count(), 2);
    }

    #[test]
    fn test_rejected_submission_keeps_dialog_open() {
        let (_temp_dir, mut app) = create_test_app();
        app.manager.add_category("Food", Money::from_units(10)).unwrap();

        app.open_dialog(ActiveDialog::AddCategory);
        type_into(&mut app.category_form.name_input, "Food");
        type_into(&mut app.category_form.limit_input, "5");
        app.submit_category();

        assert_eq!(app.active_dialog, ActiveDialog::AddCategory);
        assert!(app
            .category_form
            .error_message
            .as_deref()
            .unwrap()
            .contains("already exists"));
    }

    #[test]
    fn test_expense_dialog_needs_a_category() {
        let (_temp_dir, mut app) = create_test_app();
        app.open_dialog(ActiveDialog::AddExpense);
        assert!(!app.has_dialog());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_reset_dialog_previews_current_budget() {
        let (_temp_dir, mut app) = create_test_app();
        app.manager.add_category("Food", Money::from_units(10)).unwrap();
        app.manager.add_expense("Food", "Lunch", Money::from_units(4)).unwrap();

        app.open_dialog(ActiveDialog::ConfirmReset);
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmReset);
        assert_eq!(app.reset_preview.categories, 1);
        assert_eq!(app.reset_preview.expenses, 1);
        assert_eq!(app.reset_preview.spent, Money::from_units(4));
    }

    #[test]
    fn test_selection_clamped_after_reset() {
        let (_temp_dir, mut app) = create_test_app();
        app.manager.add_category("A", Money::from_units(1)).unwrap();
        app.manager.add_category("B", Money::from_units(1)).unwrap();
        app.move_down();
        assert_eq!(app.selected_category().as_deref(), Some("B"));

        app.confirm_reset();
        assert_eq!(app.selected_category(), None);
        assert_eq!(app.views.category_list.borrow().len(), 0);
    }
}
