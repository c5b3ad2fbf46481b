//! TUI Views module
//!
//! Four panels render the budget: the category list, the summary, the
//! spending chart and the gauge for the selected category. Each keeps its
//! own copy of the latest `Totals`, refreshed by the manager after every
//! change, and draws only from that copy.

pub mod category_chart;
pub mod category_list;
pub mod spending_chart;
pub mod status_bar;
pub mod summary;

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Frame;

use crate::models::Totals;
use crate::services::BudgetManager;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

pub use category_chart::CategoryChartView;
pub use category_list::CategoryListView;
pub use spending_chart::SpendingChartView;
pub use summary::SummaryView;

/// A panel that re-renders from a totals snapshot
pub trait TotalsView {
    /// Replace the cached snapshot
    fn refresh(&mut self, totals: &Totals);
}

/// Shared handles to every subscribed panel
pub struct Views {
    pub category_list: Rc<RefCell<CategoryListView>>,
    pub summary: Rc<RefCell<SummaryView>>,
    pub spending_chart: Rc<RefCell<SpendingChartView>>,
    pub category_chart: Rc<RefCell<CategoryChartView>>,
}

impl Views {
    /// Create every panel and subscribe it to `manager`
    pub fn attach(manager: &mut BudgetManager) -> Self {
        let totals = manager.get_totals();
        Self {
            category_list: subscribe(manager, CategoryListView::default(), &totals),
            summary: subscribe(manager, SummaryView::default(), &totals),
            spending_chart: subscribe(manager, SpendingChartView::default(), &totals),
            category_chart: subscribe(manager, CategoryChartView::default(), &totals),
        }
    }
}

fn subscribe<V>(manager: &mut BudgetManager, view: V, initial: &Totals) -> Rc<RefCell<V>>
where
    V: TotalsView + 'static,
{
    let view = Rc::new(RefCell::new(view));
    view.borrow_mut().refresh(initial);

    let observer = Rc::clone(&view);
    manager.subscribe(move |totals| observer.borrow_mut().refresh(totals));
    view
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    let symbol = app.settings.currency_symbol.clone();
    let selected = app.selected_category();

    category_list::render(
        frame,
        layout.categories,
        &app.views.category_list.borrow(),
        app.selected_category_index,
        &symbol,
    );
    summary::render(frame, layout.summary, &app.views.summary.borrow(), &symbol);
    spending_chart::render(
        frame,
        layout.spending_chart,
        &app.views.spending_chart.borrow(),
        &symbol,
    );
    category_chart::render(
        frame,
        layout.category_chart,
        &app.views.category_chart.borrow(),
        selected.as_deref(),
        &symbol,
    );
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddCategory => dialogs::category::render(frame, &app.category_form),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, &app.expense_form),
        ActiveDialog::EditLimit => dialogs::limit::render(frame, &app.limit_form),
        ActiveDialog::ConfirmReset => {
            dialogs::reset::render(frame, &app.reset_preview, &app.settings)
        }
        ActiveDialog::None => {}
    }
}
