//! Status bar
//!
//! Single bottom row. Priority: global fetch error, then the most recent
//! status message, then key hints.

use crate::state::{AppState, StatusKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str =
    " n:new e:edit x:delete d:dump t:restore Enter:filter r:refresh Tab:pane q:quit";

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let view = &state.main_view;

    let line = if let Some(error) = &view.error {
        Line::from(Span::styled(
            format!(" error: {}", error),
            Style::default().fg(Color::White).bg(Color::Red),
        ))
    } else if let Some(status) = &view.status {
        let style = match status.kind {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        Line::from(Span::styled(format!(" {}", status.message), style))
    } else {
        Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::DarkGray),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
