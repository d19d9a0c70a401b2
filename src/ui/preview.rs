//! Preview pane: renders the form as inert input controls
//!
//! Read-only consumer of the field collection. Each field renders by an
//! exhaustive match on its variant; select and radio fields iterate
//! their options in display order.

use crate::app::App;
use crate::state::schema::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the preview pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Form preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.state.fields.is_empty() {
        let empty =
            Paragraph::new("The form is empty").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // One chunk per field, trailing space flexes
    let mut constraints: Vec<Constraint> = app
        .state
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in app.state.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field);
    }
}

/// Rows one field occupies in the preview
fn field_height(field: &Field) -> u16 {
    match field {
        Field::Text { .. } | Field::Select { .. } => 3,
        // Label line plus one row per option
        Field::Radio { options, .. } => 1 + options.len().max(1) as u16,
    }
}

/// Draw a single field as an inert control
fn draw_field(frame: &mut Frame, area: Rect, field: &Field) {
    match field {
        Field::Text { label, .. } => {
            let input = Paragraph::new("").block(
                Block::default()
                    .title(format!(" {label} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            );
            frame.render_widget(input, area);
        }
        Field::Select { label, options, .. } => {
            // Closed dropdown showing the first option
            let current = options.first().map(String::as_str).unwrap_or("");
            let content = Paragraph::new(Line::from(vec![
                Span::raw(current.to_string()),
                Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
            ]))
            .block(
                Block::default()
                    .title(format!(" {label} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            );
            frame.render_widget(content, area);
        }
        Field::Radio { label, options, .. } => {
            let mut lines = vec![Line::from(Span::styled(
                label.clone(),
                Style::default().fg(Color::Gray),
            ))];
            for option in options {
                lines.push(Line::from(format!("( ) {option}")));
            }
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}
