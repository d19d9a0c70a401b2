//! UI module for rendering the TUI

mod editor;
mod layout;
mod preview;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Editor on the left, live preview on the right
    let (editor_area, preview_area) = layout::create_layout(area, app.preview_ratio());

    editor::draw(frame, editor_area, app);
    preview::draw(frame, preview_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
