//! Category gauge
//!
//! Spent versus remaining for the category highlighted in the list.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::Totals;

use super::TotalsView;

/// Cached totals for the gauge
#[derive(Debug, Default)]
pub struct CategoryChartView {
    totals: Totals,
}

impl CategoryChartView {
    /// The snapshot this gauge renders
    pub fn totals(&self) -> &Totals {
        &self.totals
    }
}

impl TotalsView for CategoryChartView {
    fn refresh(&mut self, totals: &Totals) {
        self.totals = totals.clone();
    }
}

/// Render the gauge for `selected`
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &CategoryChartView,
    selected: Option<&str>,
    symbol: &str,
) {
    let Some(summary) = selected.and_then(|name| view.totals().summary(name)) else {
        let block = Block::default().title(" Category ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new("No category selected").block(block), area);
        return;
    };

    let color = if summary.is_over_limit() {
        Color::Red
    } else if summary.used_ratio() >= 0.8 {
        Color::Yellow
    } else {
        Color::Green
    };

    let label = if summary.is_over_limit() {
        format!(
            "{} spent, {} over",
            summary.spent.format_with_symbol(symbol),
            (summary.spent - summary.limit).format_with_symbol(symbol)
        )
    } else {
        format!(
            "{} spent, {} left",
            summary.spent.format_with_symbol(symbol),
            summary.remaining.format_with_symbol(symbol)
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", summary.name))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(summary.used_ratio())
        .label(label);

    frame.render_widget(gauge, area);
}
