//! Summary panel
//!
//! Overall limit, spending and remaining money, plus the overspent
//! categories.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Totals;

use super::TotalsView;

/// Cached totals for the summary panel
#[derive(Debug, Default)]
pub struct SummaryView {
    totals: Totals,
}

impl SummaryView {
    /// The snapshot this panel renders
    pub fn totals(&self) -> &Totals {
        &self.totals
    }
}

impl TotalsView for SummaryView {
    fn refresh(&mut self, totals: &Totals) {
        self.totals = totals.clone();
    }
}

/// Render the summary panel
pub fn render(frame: &mut Frame, area: Rect, view: &SummaryView, symbol: &str) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let totals = view.totals();
    let spent = totals.total_spent();
    let limit = totals.total_limit();
    let remaining = limit - spent;

    let label = Style::default().fg(Color::Gray);
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Categories: ", label),
            Span::raw(totals.category_count().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Limit:      ", label),
            Span::raw(limit.format_with_symbol(symbol)),
        ]),
        Line::from(vec![
            Span::styled("Spent:      ", label),
            Span::raw(spent.format_with_symbol(symbol)),
        ]),
        Line::from(vec![
            Span::styled("Remaining:  ", label),
            Span::styled(
                remaining.format_with_symbol(symbol),
                Style::default()
                    .fg(remaining_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let over = totals.over_limit();
    if !over.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Over limit: {}", over.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
