//! Modal dialogs
//!
//! Form dialogs share a frame: a bordered box with one row per field,
//! an error row, and a row of key hints.

pub mod category;
pub mod expense;
pub mod help;
pub mod limit;
pub mod reset;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect_fixed;

/// Draw a cleared, titled box and return the rows inside it
fn form_frame(frame: &mut Frame, title: &str, rows: u16) -> Vec<Rect> {
    let area = centered_rect_fixed(56, rows + 2, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner_width = area.width.saturating_sub(4);
    (0..rows)
        .map(|row| Rect::new(area.x + 2, area.y + 1 + row, inner_width, 1))
        .filter(|rect| rect.y < area.y + area.height.saturating_sub(1))
        .collect()
}

/// Draw the error row, if there is an error
fn render_error(frame: &mut Frame, area: Option<&Rect>, error: Option<&str>) {
    if let (Some(area), Some(error)) = (area, error) {
        let line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), *area);
    }
}

/// Draw the standard form key hints
fn render_hints(frame: &mut Frame, area: Option<&Rect>) {
    if let Some(area) = area {
        let hints = Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" Next  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(Paragraph::new(hints), *area);
    }
}
