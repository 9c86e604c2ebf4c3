//! Main view
//!
//! Renders the configs table on the left and the operations panel on the
//! right. The focused pane gets a highlighted border.

use crate::state::{AppState, Pane};
use dbdump_client::{OperationLog, OperationStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

const FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);
const UNFOCUSED_BORDER: Style = Style::new().fg(Color::DarkGray);

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_configs(state, chunks[0], f);
    render_operations(state, chunks[1], f);
}

fn render_configs(state: &AppState, area: Rect, f: &mut Frame) {
    let view = &state.main_view;

    let border_style = if view.focus == Pane::Configs {
        FOCUSED_BORDER
    } else {
        UNFOCUSED_BORDER
    };

    let title = if view.loading {
        " Configs (loading...) "
    } else {
        " Configs "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if view.configs.is_empty() {
        let hint = if view.loading {
            "Loading configurations..."
        } else {
            "No configurations. Press 'n' to create one."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["", "Name", "Type", "Op", "Database"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .configs
        .iter()
        .enumerate()
        .map(|(idx, config)| {
            let marker = if view.selected_config == Some(config.id) {
                "*"
            } else {
                " "
            };

            let style = if idx == view.cursor && view.focus == Pane::Configs {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new([
                Cell::from(marker),
                Cell::from(config.name.clone()),
                Cell::from(config.db_type.clone()),
                Cell::from(config.operation.label()),
                Cell::from(config.params.database.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

fn render_operations(state: &AppState, area: Rect, f: &mut Frame) {
    let view = &state.main_view;

    let border_style = if view.focus == Pane::Operations {
        FOCUSED_BORDER
    } else {
        UNFOCUSED_BORDER
    };

    // Title shows whether the panel is filtered to one config
    let title = match view.selected_config {
        Some(id) => {
            let name = view
                .configs
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            format!(" Operations: {} ", name)
        }
        None => " Operations: all ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if view.operations.is_empty() {
        let paragraph = Paragraph::new("No operations yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = view
        .operations
        .iter()
        .enumerate()
        .map(|(idx, op)| {
            let mut line = operation_line(op);
            if idx == view.operations_cursor && view.focus == Pane::Operations {
                line = line.style(Style::default().bg(Color::DarkGray));
            }
            ListItem::new(line)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn operation_line(op: &OperationLog) -> Line<'static> {
    let time = op.created_at.format("%m-%d %H:%M").to_string();

    let status_style = match op.status {
        OperationStatus::Success => Style::default().fg(Color::Green),
        OperationStatus::Error => Style::default().fg(Color::Red),
        OperationStatus::Loading => Style::default().fg(Color::Yellow),
        OperationStatus::Idle => Style::default().fg(Color::DarkGray),
    };

    // Failed operations show the error, successful ones the produced file
    let detail = match op.status {
        OperationStatus::Error => op.error_message.clone().unwrap_or_default(),
        _ => op.file_path.clone().unwrap_or_default(),
    };

    Line::from(vec![
        Span::styled(time, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::raw(op.operation.label()),
        Span::raw(" "),
        Span::styled(op.status.label(), status_style),
        Span::raw(" "),
        Span::styled(detail, Style::default().fg(Color::Gray)),
    ])
}
