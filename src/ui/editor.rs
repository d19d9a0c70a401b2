//! Editor pane: add-field palette, field list, expanded field editor

use super::widgets::{render_palette_button, render_scrollable_list, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::schema::{Field, FieldKind};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the editor pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),              // Palette
            Constraint::Min(3),                             // Field list
            Constraint::Length(expanded_editor_height(app)), // Field editor
        ])
        .split(area);

    draw_palette(frame, chunks[0], app);
    draw_field_list(frame, chunks[1], app);
    if let Some(field) = app.state.expanded() {
        draw_field_editor(frame, chunks[2], app, field);
    }
}

/// Rows the expanded field editor needs (0 when collapsed)
fn expanded_editor_height(app: &App) -> u16 {
    match app.state.expanded() {
        None => 0,
        Some(field) => {
            // Outer borders (2) + label input (3) + one row per option,
            // capped; the options list scrolls beyond the cap
            let option_rows = field
                .options()
                .map(|o| o.len().clamp(1, 6) as u16)
                .unwrap_or(0);
            5 + option_rows
        }
    }
}

/// Draw the add-field palette
fn draw_palette(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let pane_focused = app.state.focus == Focus::Palette;
    for (idx, kind) in FieldKind::ALL.iter().enumerate() {
        render_palette_button(
            frame,
            chunks[idx],
            &format!("Add {}", kind.label()),
            app.state.palette_index == idx,
            pane_focused,
        );
    }
}

/// Draw the field list
fn draw_field_list(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Fields;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Fields ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.state.fields.is_empty() {
        let empty = Paragraph::new("No fields yet - add one from the palette above")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .fields
        .iter()
        .map(|field| {
            let marker = if app.state.expanded_field.as_ref() == Some(field.id()) {
                "▸ "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{}", field.summary()))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    render_scrollable_list(frame, area, list, app.state.selected_field);
}

/// Draw the expanded field's editor (label input plus option rows)
fn draw_field_editor(frame: &mut Frame, area: Rect, app: &App, field: &Field) {
    let editing = app.state.focus.is_text_input();
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Edit {} field ", field.kind().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Label input
            Constraint::Min(0),    // Options
        ])
        .split(inner);

    draw_label_input(frame, chunks[0], field, app.state.focus == Focus::Label);

    if let Some(options) = field.options() {
        draw_option_rows(frame, chunks[1], app, options);
    }
}

/// Draw the label input box
fn draw_label_input(frame: &mut Frame, area: Rect, field: &Field, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.label(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(" Label ")
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw one row per option, with the active row carrying the cursor
fn draw_option_rows(frame: &mut Frame, area: Rect, app: &App, options: &[String]) {
    let is_active = app.state.focus == Focus::Options;

    if options.is_empty() {
        let empty = Paragraph::new("(no options - Enter adds one)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let selected = is_active && idx == app.state.selected_option;
            let cursor = if selected { "▌" } else { "" };
            let style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(" • "),
                Span::styled(option.clone(), style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let list = List::new(items);
    render_scrollable_list(frame, area, list, app.state.selected_option);
}
