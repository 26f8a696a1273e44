//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.board.dialog().is_open() {
        "Tab: next field | ←→: priority | Enter: save | Esc: cancel"
    } else if app.board.delete_confirmation().pending().is_some() {
        "y/Enter: delete | n/Esc: cancel"
    } else {
        "a: add | e: edit | d: delete | Space: toggle | p/s: filter | ↑↓/jk: move | q: quit"
    };

    let counts = app.board.store().counts();

    let mut spans = vec![
        Span::styled("Tasklist", theme::bold()),
        Span::raw(" | "),
        Span::styled(
            format!("{} to do", counts.todo),
            theme::normal().fg(theme::WARNING),
        ),
        Span::raw(", "),
        Span::styled(
            format!("{} done", counts.done),
            theme::normal().fg(theme::SUCCESS),
        ),
        Span::raw(" | "),
    ];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(message.as_str(), theme::highlighted()));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(help_text, theme::dimmed()));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
