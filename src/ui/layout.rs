//! Layout components (pane split, status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: editor pane left, preview pane right, with the
/// bottom line reserved for the status bar
pub fn create_layout(area: Rect, preview_ratio: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - preview_ratio), // Editor
            Constraint::Percentage(preview_ratio),       // Preview
        ])
        .split(chunks[0]);

    (panes[0], panes[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Field count
    let count = app.state.fields.len();
    spans.push(Span::styled(
        format!(" {count} field{} ", if count == 1 { "" } else { "s" }),
        Style::default().fg(Color::Blue),
    ));

    // Focus-specific hints
    if app.state.show_hints {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            get_focus_hints(&app.state.focus),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Transient feedback message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " q:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus
fn get_focus_hints(focus: &Focus) -> String {
    match focus {
        Focus::Palette => "h/l:kind  Enter:add  Tab:fields".to_string(),
        Focus::Fields => "j/k:nav  Enter:edit  d:delete  Tab:palette".to_string(),
        Focus::Label => format!(
            "type:label  Tab:options  Esc:done  {}:delete field",
            crate::platform::DELETE_FIELD_SHORTCUT
        ),
        Focus::Options => "↑/↓:option  type:edit  Enter:add  Del:remove  Esc:done".to_string(),
    }
}
