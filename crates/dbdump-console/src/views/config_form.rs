//! Config form popup
//!
//! Centered popup for creating or editing a configuration. One line per
//! field, the focused field highlighted, validation/save errors at the
//! bottom.

use crate::state::{AppState, FormField};
use dbdump_client::OperationKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(state: &AppState, f: &mut Frame) {
    let form = &state.config_form;
    let area = centered_rect(52, (FormField::all().len() + 6) as u16, f.area());

    let title = match form.editing {
        Some(_) => " Edit configuration ",
        None => " New configuration ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = Vec::new();

    // Operation kind toggle
    let kind = form.operation.unwrap_or(OperationKind::Dump);
    lines.push(Line::from(vec![
        Span::styled("Operation:    ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            kind.label(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Ctrl+T to toggle)", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    for field in FormField::all() {
        let focused = *field == form.focused;

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // Passwords render masked
        let value = if *field == FormField::Password {
            "*".repeat(form.value(*field).len())
        } else {
            form.value(*field).to_string()
        };

        let mut spans = vec![
            Span::styled(format!("{:<13}", field.label()), label_style),
            Span::raw(value),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    match &form.error {
        Some(error) => {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Enter: save  Tab: next field  Esc: cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// A fixed-size rect centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
