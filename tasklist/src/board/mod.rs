//! Task board: the store plus the view state the UI drives it with.
//!
//! `Board` owns a [`TaskStore`] together with the filter, the add/edit
//! dialog and the delete confirmation. Row arguments are positions in
//! [`Board::visible_tasks`]; each row is resolved to the task's
//! [`TaskId`] before anything is mutated, so an action always lands on
//! the task that was displayed in that row, filtered or not.
//!
//! Invalid rows and commits without a session are no-ops. They are
//! logged and never reported to the user.

pub mod session;

pub use session::{DeleteConfirmation, DialogMode, DialogState, EditSession};

use chrono::NaiveDate;
use tasklist_core::{
    Filter, Priority, PriorityFilter, StatusFilter, Task, TaskFields, TaskId, TaskStatus,
    TaskStore,
};

/// Task list with its transient view state.
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TaskStore,
    filter: Filter,
    dialog: DialogState,
    delete: DeleteConfirmation,
    default_priority: Priority,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority new add forms start with.
    #[must_use]
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    // -- queries --

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Current dialog state.
    #[must_use]
    pub const fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Current dialog mode.
    #[must_use]
    pub const fn dialog_mode(&self) -> DialogMode {
        self.dialog.mode()
    }

    /// Current delete confirmation state.
    #[must_use]
    pub const fn delete_confirmation(&self) -> DeleteConfirmation {
        self.delete
    }

    /// Tasks passing the current filter, in list order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.visible(&self.filter)
    }

    /// The task displayed at `row`.
    #[must_use]
    pub fn task_at_row(&self, row: usize) -> Option<&Task> {
        self.visible_tasks().get(row).copied()
    }

    /// Row at which the task with `id` is displayed, if it passes the filter.
    #[must_use]
    pub fn row_of(&self, id: TaskId) -> Option<usize> {
        self.visible_tasks().iter().position(|t| t.id == id)
    }

    // -- add/edit dialog --

    /// Opens a blank add form. No-op while a form is already open.
    pub fn open_add(&mut self) {
        if self.dialog.is_open() {
            tracing::debug!("open_add ignored: dialog already open");
            return;
        }
        self.dialog = DialogState::Open(EditSession::add(self.default_priority));
    }

    /// Opens the edit form for the task at `row`, pre-filled from it.
    ///
    /// Returns the task's ID, or `None` (no-op) if `row` is out of range
    /// or a form is already open.
    pub fn begin_edit(&mut self, row: usize) -> Option<TaskId> {
        if self.dialog.is_open() {
            tracing::debug!(row, "begin_edit ignored: dialog already open");
            return None;
        }
        let Some(task) = self.task_at_row(row) else {
            tracing::debug!(row, "begin_edit ignored: no such row");
            return None;
        };
        let session = EditSession::edit(task);
        let id = task.id;
        self.dialog = DialogState::Open(session);
        Some(id)
    }

    /// Mutable access to the open form's draft values.
    pub const fn draft_mut(&mut self) -> Option<&mut TaskFields> {
        match &mut self.dialog {
            DialogState::Closed => None,
            DialogState::Open(session) => Some(&mut session.draft),
        }
    }

    /// Appends a new `ToDo` task and closes any open form.
    ///
    /// An empty description is accepted.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> TaskId {
        let id = self
            .store
            .add_task(TaskFields::new(description, priority, due_date));
        self.dialog = DialogState::Closed;
        id
    }

    /// Overwrites the fields of the task being edited and closes the form.
    ///
    /// The task's status is kept. No-op unless an edit session is open.
    pub fn commit_edit(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Option<TaskId> {
        let DialogMode::Edit(id) = self.dialog.mode() else {
            tracing::debug!("commit_edit ignored: no edit session");
            return None;
        };
        self.dialog = DialogState::Closed;
        self.update(id, TaskFields::new(description, priority, due_date))
    }

    /// Commits the open form with its current drafts: adds in add mode,
    /// updates in edit mode. Returns the affected task's ID.
    pub fn submit_dialog(&mut self) -> Option<TaskId> {
        let DialogState::Open(session) = std::mem::take(&mut self.dialog) else {
            tracing::debug!("submit ignored: dialog closed");
            return None;
        };
        match session.target {
            None => {
                let TaskFields {
                    description,
                    priority,
                    due_date,
                } = session.draft;
                Some(self.add_task(description, priority, due_date))
            }
            Some(id) => self.update(id, session.draft),
        }
    }

    /// Closes the form without touching any task.
    pub fn cancel_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    // -- delete confirmation --

    /// Marks the task at `row` for deletion pending confirmation.
    ///
    /// No-op if `row` is out of range or a deletion is already pending.
    pub fn request_delete(&mut self, row: usize) -> Option<TaskId> {
        if let DeleteConfirmation::Pending(id) = self.delete {
            tracing::debug!(%id, "request_delete ignored: deletion already pending");
            return None;
        }
        let Some(id) = self.task_at_row(row).map(|t| t.id) else {
            tracing::debug!(row, "request_delete ignored: no such row");
            return None;
        };
        self.delete = DeleteConfirmation::Pending(id);
        Some(id)
    }

    /// Deletes the pending task and returns to idle.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let DeleteConfirmation::Pending(id) = std::mem::take(&mut self.delete) else {
            tracing::debug!("confirm_delete ignored: nothing pending");
            return None;
        };
        self.remove(id)
    }

    /// Discards the pending deletion.
    pub fn cancel_delete(&mut self) {
        self.delete = DeleteConfirmation::Idle;
    }

    /// Deletes the task at `row` right away and clears any pending
    /// confirmation.
    pub fn delete_task(&mut self, row: usize) -> Option<Task> {
        self.delete = DeleteConfirmation::Idle;
        let Some(id) = self.task_at_row(row).map(|t| t.id) else {
            tracing::debug!(row, "delete_task ignored: no such row");
            return None;
        };
        self.remove(id)
    }

    // -- status and filter --

    /// Flips the status of the task at `row`; returns the new status.
    pub fn toggle_status(&mut self, row: usize) -> Option<TaskStatus> {
        let Some(id) = self.task_at_row(row).map(|t| t.id) else {
            tracing::debug!(row, "toggle_status ignored: no such row");
            return None;
        };
        self.store.toggle_status(id).ok()
    }

    /// Updates either or both filter predicates. Tasks are not touched.
    pub fn set_filter(&mut self, priority: Option<PriorityFilter>, status: Option<StatusFilter>) {
        self.filter.update(priority, status);
        tracing::debug!(priority = %self.filter.priority, status = %self.filter.status, "filter changed");
    }

    fn update(&mut self, id: TaskId, fields: TaskFields) -> Option<TaskId> {
        match self.store.update_task(id, fields) {
            Ok(()) => Some(id),
            Err(e) => {
                tracing::debug!(error = %e, "edit ignored");
                None
            }
        }
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        match self.store.remove_task(id) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::debug!(error = %e, "delete ignored");
                None
            }
        }
    }
}
