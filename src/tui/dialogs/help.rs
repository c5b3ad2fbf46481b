//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const KEYS: &[(&str, &str)] = &[
    ("j/k", "Select next/previous category"),
    ("c", "Add category"),
    ("e", "Add expense"),
    ("l", "Edit limit of selected category"),
    ("R", "Reset budget to defaults"),
    ("s", "Save again (after a failed save)"),
    ("?", "Show this help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(52, KEYS.len() as u16 + 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )),
        Line::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, action)| key_line(key, action)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>6}", key), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::raw(action),
    ])
}
