//! Application state and event handling.
//!
//! `App` wraps a [`Board`] with the purely interactive bits: row
//! selection, which form field has focus, the text cursor, and a one-line
//! status message. Keys are routed by what is on screen: the add/edit
//! form first, then the delete confirmation, then the table.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{Filter, Priority, TaskId};

use crate::board::{Board, DialogMode};

/// Format the due-date field is typed in.
pub const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Which form field has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    /// Free-text description.
    #[default]
    Description,
    /// Priority selector.
    Priority,
    /// Due date, typed as `YYYY-MM-DD`.
    DueDate,
}

impl FormField {
    /// Next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Description => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Description,
        }
    }

    /// Previous field, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Description => Self::DueDate,
            Self::Priority => Self::Description,
            Self::DueDate => Self::Priority,
        }
    }
}

/// Interaction state of the add/edit form.
///
/// The description and priority drafts live in the board's edit session;
/// the due date is kept here as typed text until the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Focused field.
    pub field: FormField,
    /// Cursor position (character index) in the focused text field.
    pub cursor: usize,
    /// Due date as typed.
    pub due_date_input: String,
    /// Problem with the last submit attempt, shown in the form.
    pub error: Option<String>,
}

/// Main application state.
pub struct App {
    /// Tasks and view state.
    pub board: Board,
    /// Selected row in the visible table.
    pub selected: usize,
    /// Add/edit form interaction state.
    pub form: FormState,
    /// Feedback for the last action.
    pub status_message: Option<String>,
    /// Display format for due dates in the table.
    pub date_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an empty application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            selected: 0,
            form: FormState::default(),
            status_message: None,
            date_format: DUE_DATE_INPUT_FORMAT.to_string(),
            should_quit: false,
        }
    }

    /// Set the priority new tasks start with.
    #[must_use]
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.board = self.board.with_default_priority(priority);
        self
    }

    /// Set the due-date display format (chrono format string).
    #[must_use]
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Start with the table narrowed by `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.board.set_filter(Some(filter.priority), Some(filter.status));
        self
    }

    /// Number of rows currently shown.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.board.visible_tasks().len()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.board.dialog().is_open() {
            self.handle_form_key(key);
        } else if self.board.delete_confirmation().pending().is_some() {
            self.handle_confirm_key(key);
        } else {
            self.handle_table_key(key);
        }
        self.clamp_selection();
    }

    /// Handle key event when the table has focus.
    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible_len().saturating_sub(1);
            }
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_form(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.board.request_delete(self.selected).is_some() {
                    self.status_message = None;
                }
            }
            KeyCode::Char(' ' | 'x') => {
                if let Some(status) = self.board.toggle_status(self.selected) {
                    self.status_message = Some(format!("Marked {status}"));
                }
            }
            KeyCode::Char('p') => {
                let next = self.board.filter().priority.next();
                self.board.set_filter(Some(next), None);
                self.status_message = Some(format!("Showing {next}"));
            }
            KeyCode::Char('s') => {
                let next = self.board.filter().status.next();
                self.board.set_filter(None, Some(next));
                self.status_message = Some(format!("Showing {next}"));
            }
            _ => {}
        }
    }

    /// Handle key event while the delete confirmation is shown.
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                if let Some(task) = self.board.confirm_delete() {
                    tracing::info!(id = %task.id, "task deleted");
                    self.status_message = Some("Task deleted".to_string());
                }
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.board.cancel_delete(),
            _ => {}
        }
    }

    /// Handle key event while the add/edit form is shown.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board.cancel_dialog();
                self.form = FormState::default();
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.focus_field(self.form.field.next()),
            KeyCode::BackTab | KeyCode::Up => self.focus_field(self.form.field.prev()),
            _ if self.form.field == FormField::Priority => self.handle_priority_key(key),
            _ => self.handle_text_key(key),
        }
    }

    fn handle_priority_key(&mut self, key: KeyEvent) {
        let Some(draft) = self.board.draft_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => draft.priority = draft.priority.prev(),
            KeyCode::Right | KeyCode::Char('l' | ' ') => draft.priority = draft.priority.next(),
            KeyCode::Char('1') => draft.priority = Priority::Low,
            KeyCode::Char('2') => draft.priority = Priority::Medium,
            KeyCode::Char('3') => draft.priority = Priority::High,
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let field = self.form.field;
        let mut cursor = self.form.cursor;
        let Some(text) = self.focused_text_mut() else {
            return;
        };
        let len = text.chars().count();
        match key.code {
            KeyCode::Char(c) => {
                let at = byte_offset(text, cursor);
                text.insert(at, c);
                cursor += 1;
            }
            KeyCode::Backspace if cursor > 0 => {
                let at = byte_offset(text, cursor - 1);
                text.remove(at);
                cursor -= 1;
            }
            KeyCode::Delete if cursor < len => {
                let at = byte_offset(text, cursor);
                text.remove(at);
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(len),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = len,
            _ => {}
        }
        self.form.cursor = cursor;
        if field == FormField::DueDate {
            self.form.error = None;
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.form.field {
            FormField::Description => self.board.draft_mut().map(|d| &mut d.description),
            FormField::DueDate => Some(&mut self.form.due_date_input),
            FormField::Priority => None,
        }
    }

    fn focused_text_len(&mut self) -> usize {
        self.focused_text_mut().map_or(0, |t| t.chars().count())
    }

    fn focus_field(&mut self, field: FormField) {
        self.form.field = field;
        self.form.cursor = self.focused_text_len();
    }

    fn open_add_form(&mut self) {
        self.board.open_add();
        self.form = FormState::default();
        self.status_message = None;
    }

    fn open_edit_form(&mut self) {
        if self.board.begin_edit(self.selected).is_none() {
            return;
        }
        let due_date_input = self
            .board
            .dialog()
            .session()
            .and_then(|s| s.draft.due_date)
            .map(|d| d.format(DUE_DATE_INPUT_FORMAT).to_string())
            .unwrap_or_default();
        self.form = FormState {
            due_date_input,
            ..FormState::default()
        };
        self.form.cursor = self.focused_text_len();
        self.status_message = None;
    }

    fn submit_form(&mut self) {
        let due_date = match parse_due_date(&self.form.due_date_input) {
            Ok(date) => date,
            Err(message) => {
                self.form.error = Some(message);
                self.focus_field(FormField::DueDate);
                return;
            }
        };
        if let Some(draft) = self.board.draft_mut() {
            draft.due_date = due_date;
        }
        let mode = self.board.dialog_mode();
        let Some(id) = self.board.submit_dialog() else {
            return;
        };
        self.form = FormState::default();
        self.status_message = Some(match mode {
            DialogMode::Edit(_) => "Task updated".to_string(),
            DialogMode::Add | DialogMode::Closed => "Task added".to_string(),
        });
        tracing::info!(%id, ?mode, "task saved");
        self.select_task(id);
    }

    /// Move the selection to `id` if it is visible.
    fn select_task(&mut self, id: TaskId) {
        if let Some(row) = self.board.row_of(id) {
            self.selected = row;
        }
    }

    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the visible rows.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the typed due date. Blank input means "no due date".
///
/// # Errors
///
/// Returns a message for the form if the text is not a `YYYY-MM-DD` date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| format!("Due date must be YYYY-MM-DD, got \"{trimmed}\""))
}

/// Byte offset of the `char_idx`-th character (or the end of `text`).
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}
