//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::widgets::input::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
    Ok(())
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('c') => app.open_dialog(ActiveDialog::AddCategory),
        KeyCode::Char('e') | KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('l') | KeyCode::Enter => app.open_dialog(ActiveDialog::EditLimit),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),
        KeyCode::Char('s') => app.save(),

        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmReset => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reset(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::AddCategory => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => app.submit_category(),
            KeyCode::Tab | KeyCode::BackTab => app.category_form.next_field(),
            _ => {
                app.category_form.clear_error();
                edit_input(app.category_form.focused_input(), key);
            }
        },
        ActiveDialog::AddExpense => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => app.submit_expense(),
            KeyCode::Tab => app.expense_form.next_field(),
            KeyCode::BackTab => app.expense_form.prev_field(),
            _ => {
                app.expense_form.clear_error();
                if app.expense_form.on_category_field() {
                    match key.code {
                        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
                            app.expense_form.prev_category()
                        }
                        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
                            app.expense_form.next_category()
                        }
                        _ => {}
                    }
                } else if let Some(input) = app.expense_form.focused_input() {
                    edit_input(input, key);
                }
            }
        },
        ActiveDialog::EditLimit => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => app.submit_limit(),
            _ => {
                app.limit_form.clear_error();
                edit_input(&mut app.limit_form.limit_input, key);
            }
        },
        ActiveDialog::None => {}
    }
}

/// Apply a key to a text field
fn edit_input(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
