//! Filter bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render the current priority/status filter and how many rows it leaves.
///
/// Without a filter only the total is shown.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let filter = app.board.filter();
    let shown = app.visible_len();
    let total = app.board.store().len();

    let summary = if filter.is_unfiltered() {
        let noun = if total == 1 { "task" } else { "tasks" };
        format!("{total} {noun}")
    } else {
        format!("showing {shown} of {total}")
    };

    let line = Line::from(vec![
        Span::styled("Priority: ", theme::dimmed()),
        Span::styled(filter.priority.to_string(), theme::bold()),
        Span::styled(" (p)", theme::highlighted()),
        Span::raw("   "),
        Span::styled("Status: ", theme::dimmed()),
        Span::styled(filter.status.to_string(), theme::bold()),
        Span::styled(" (s)", theme::highlighted()),
        Span::raw("   "),
        Span::styled(summary, theme::dimmed()),
    ]);

    let block = Block::default()
        .title(Span::styled(
            "Filter",
            theme::panel_title(theme::FILTER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    frame.render_widget(Paragraph::new(line).block(block), area);
}
