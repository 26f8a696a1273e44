//! Terminal UI rendering.

pub mod dialog;
pub mod filter_bar;
pub mod status_bar;
pub mod task_table;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Filter bar on top, status bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    filter_bar::render(frame, chunks[0], app);
    task_table::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);

    // Modals render last so they sit on top
    if app.board.dialog().is_open() {
        dialog::render_task_form(frame, app);
    } else if app.board.delete_confirmation().pending().is_some() {
        dialog::render_delete_confirm(frame);
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
