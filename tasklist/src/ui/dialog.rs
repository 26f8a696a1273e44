//! Modal dialogs: the add/edit task form and the delete confirmation.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{centered_rect, theme};
use crate::app::{App, FormField};

/// Width of the field labels, including padding.
const LABEL_WIDTH: u16 = 12;

/// Render the add/edit form over the table.
pub fn render_task_form(frame: &mut Frame, app: &App) {
    let Some(session) = app.board.dialog().session() else {
        return;
    };
    let mode = app.board.dialog_mode();
    let popup_area = centered_rect(64, 12, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", mode.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::highlighted());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, desc_area, _, priority_area, _, due_area, error_area, _, hint_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let focused = app.form.field;
    let draft = &session.draft;
    let value_width = usize::from(inner.width.saturating_sub(LABEL_WIDTH));

    let cursor_for = |field: FormField| if focused == field { app.form.cursor } else { 0 };
    let (desc_text, desc_column) = visible_window(
        &draft.description,
        cursor_for(FormField::Description),
        value_width,
    );
    let (due_text, due_column) = visible_window(
        &app.form.due_date_input,
        cursor_for(FormField::DueDate),
        value_width,
    );

    frame.render_widget(
        Paragraph::new(field_line(
            "Task",
            desc_text,
            focused == FormField::Description,
        )),
        desc_area,
    );

    let priority_value = format!("< {} >", draft.priority);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            label("Priority", focused == FormField::Priority),
            Span::styled(
                priority_value,
                theme::bold().fg(theme::priority_color(draft.priority)),
            ),
        ])),
        priority_area,
    );

    let mut due_line = field_line("Due Date", due_text, focused == FormField::DueDate);
    due_line.push_span(Span::styled("  YYYY-MM-DD, blank for none", theme::dimmed()));
    frame.render_widget(Paragraph::new(due_line), due_area);

    if let Some(error) = &app.form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("  {error}"), theme::error())),
            error_area,
        );
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", theme::highlighted()),
        Span::styled(format!(" {}  ", mode.submit_label()), theme::dimmed()),
        Span::styled("Tab", theme::highlighted()),
        Span::styled(" next field  ", theme::dimmed()),
        Span::styled("Esc", theme::highlighted()),
        Span::styled(" close", theme::dimmed()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);

    let cursor_at = match focused {
        FormField::Description => Some((desc_area, desc_column)),
        FormField::DueDate => Some((due_area, due_column)),
        FormField::Priority => None,
    };
    if let Some((row, column)) = cursor_at {
        let offset = u16::try_from(column).unwrap_or(u16::MAX);
        let x = (row.x + LABEL_WIDTH)
            .saturating_add(offset)
            .min(row.right().saturating_sub(1));
        frame.set_cursor_position((x, row.y));
    }
}

/// Render the "are you sure" dialog for a pending deletion.
pub fn render_delete_confirm(frame: &mut Frame) {
    let popup_area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm Delete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::normal().fg(theme::ERROR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, body_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("Are you sure you want to delete this task?")
            .style(theme::normal())
            .alignment(Alignment::Center),
        body_area,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("y", theme::highlighted()),
        Span::styled(" delete  ", theme::dimmed()),
        Span::styled("n", theme::highlighted()),
        Span::styled(" cancel", theme::dimmed()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// The tail of `text` that keeps the cursor inside `width` columns, and
/// the cursor's column within it.
///
/// `cursor` counts characters; columns count display cells, so wide
/// characters take two.
fn visible_window(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    let cursor_byte = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(i, _)| i);
    let before = &text[..cursor_byte];
    let mut column = before.width();
    let mut start = 0;
    for c in before.chars() {
        if column < width.max(1) {
            break;
        }
        column -= c.width().unwrap_or(0);
        start += c.len_utf8();
    }
    (&text[start..], column)
}

fn label(name: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        theme::highlighted()
    } else {
        theme::dimmed()
    };
    let width = usize::from(LABEL_WIDTH) - 2;
    Span::styled(format!("  {name:<width$}"), style)
}

fn field_line<'a>(name: &str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        theme::normal()
    } else {
        Style::default().fg(theme::FG_SECONDARY)
    };
    Line::from(vec![label(name, focused), Span::styled(value, value_style)])
}
