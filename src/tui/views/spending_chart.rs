//! Spending chart
//!
//! Horizontal bars of money spent per category, largest first.
//! Overspent categories are drawn in red.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::{CategorySummary, Totals};

use super::TotalsView;

/// Cached totals with the rows pre-sorted for the chart
#[derive(Debug, Default)]
pub struct SpendingChartView {
    totals: Totals,
    rows: Vec<CategorySummary>,
}

impl SpendingChartView {
    /// The snapshot this chart renders
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Chart rows, largest spending first
    pub fn rows(&self) -> &[CategorySummary] {
        &self.rows
    }
}

impl TotalsView for SpendingChartView {
    fn refresh(&mut self, totals: &Totals) {
        let mut rows: Vec<_> = totals.summaries().collect();
        rows.sort_by(|a, b| b.spent.cmp(&a.spent).then_with(|| a.name.cmp(&b.name)));
        self.rows = rows;
        self.totals = totals.clone();
    }
}

/// Render the spending chart
pub fn render(frame: &mut Frame, area: Rect, view: &SpendingChartView, symbol: &str) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if view.rows().is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing to chart yet").block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = view
        .rows()
        .iter()
        .map(|row| {
            let color = if row.is_over_limit() {
                Color::Red
            } else {
                Color::Green
            };
            Bar::default()
                .label(Line::from(row.name.clone()))
                .value(row.spent.cents().max(0) as u64)
                .text_value(row.spent.format_with_symbol(symbol))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
