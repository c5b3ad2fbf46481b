//! Layout definitions for the TUI
//!
//! Category list on the left; summary, spending chart and category gauge
//! stacked on the right; status bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Category list
    pub categories: Rect,
    /// Overall totals
    pub summary: Rect,
    /// Spending per category
    pub spending_chart: Rect,
    /// Gauge for the selected category
    pub category_chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32), // Category list
                Constraint::Min(40),    // Panels
            ])
            .split(vertical[0]);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Summary
                Constraint::Min(5),    // Spending chart
                Constraint::Length(3), // Gauge
            ])
            .split(horizontal[1]);

        Self {
            categories: horizontal[0],
            summary: panels[0],
            spending_chart: panels[1],
            category_chart: panels[2],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_screen() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.categories.width, 32);
        assert_eq!(layout.summary.height, 7);
        assert_eq!(layout.category_chart.height, 3);
        assert_eq!(layout.spending_chart.height, 29 - 7 - 3);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 8, area);
        assert_eq!(rect, Rect::new(0, 1, 40, 8));
    }
}
