//! Task table rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::theme;
use crate::app::App;

/// Render the visible tasks as a table with the selected row highlighted.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            "Task List",
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    let tasks = app.board.visible_tasks();
    if tasks.is_empty() {
        let hint = if app.board.store().is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match the current filter."
        };
        let paragraph = Paragraph::new(Span::styled(hint, theme::dimmed()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Task", "Priority", "Due Date", "Status", "Action"])
        .style(theme::bold())
        .bottom_margin(1);

    let rows = tasks.iter().map(|task| {
        Row::new(vec![
            Cell::from(task.description.as_str()),
            Cell::from(task.priority.to_string())
                .style(theme::normal().fg(theme::priority_color(task.priority))),
            Cell::from(task.due_date_label(&app.date_format)),
            Cell::from(task.status.to_string()).style(theme::status_style(task.status)),
            Cell::from(task.status.toggle_label()).style(theme::dimmed()),
        ])
    });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme::selected())
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
