//! Category list view
//!
//! The left-hand panel: every category in alphabetical order with its
//! spending against its limit. The highlighted row is the category that the
//! gauge, the expense dialog and the limit dialog act on.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::Totals;

use super::TotalsView;

/// Cached category names and totals
#[derive(Debug, Default)]
pub struct CategoryListView {
    names: Vec<String>,
    totals: Totals,
}

impl CategoryListView {
    /// Category name at a row
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Row of a category
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether there are no categories
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TotalsView for CategoryListView {
    fn refresh(&mut self, totals: &Totals) {
        self.names = totals.limit_by_category.keys().cloned().collect();
        self.totals = totals.clone();
    }
}

/// Render the category list
pub fn render(frame: &mut Frame, area: Rect, view: &CategoryListView, selected: usize, symbol: &str) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if view.is_empty() {
        let items = vec![ListItem::new(Line::from(Span::styled(
            "No categories (c to add)",
            Style::default().fg(Color::Yellow),
        )))];
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = view
        .totals
        .summaries()
        .map(|summary| {
            let color = if summary.is_over_limit() {
                Color::Red
            } else {
                Color::White
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    summary.name.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  {} / {}",
                        summary.spent.format_with_symbol(symbol),
                        summary.limit.format_with_symbol(symbol)
                    ),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_rows_sorted_by_name() {
        let mut totals = Totals::default();
        for name in ["Zoo", "Bills", "Food"] {
            totals.limit_by_category.insert(name.into(), Money::from_units(1));
        }

        let mut view = CategoryListView::default();
        view.refresh(&totals);

        assert_eq!(view.len(), 3);
        assert_eq!(view.name_at(0), Some("Bills"));
        assert_eq!(view.position("Zoo"), Some(2));
        assert_eq!(view.name_at(3), None);
    }
}
