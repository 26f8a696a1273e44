//! Transient dialog state: the add/edit session and the delete confirmation.
//!
//! Neither is part of the task data. Both reset to empty after every
//! commit or cancel.

use tasklist_core::{Priority, Task, TaskFields, TaskId};

/// An in-progress add or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// `None` adds a new task, `Some` edits the task with this ID.
    pub target: Option<TaskId>,
    /// Current form values.
    pub draft: TaskFields,
}

impl EditSession {
    /// A blank add form with the given starting priority.
    #[must_use]
    pub fn add(default_priority: Priority) -> Self {
        Self {
            target: None,
            draft: TaskFields::new(String::new(), default_priority, None),
        }
    }

    /// An edit form pre-filled from `task`.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            target: Some(task.id),
            draft: task.fields(),
        }
    }
}

/// Add/edit dialog state machine.
///
/// `Closed -> Open(add)` on open-for-add, `Closed -> Open(edit)` on
/// begin-edit, and back to `Closed` on commit or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    /// No form shown.
    #[default]
    Closed,
    /// A form is shown.
    Open(EditSession),
}

/// Which variant of the dialog is shown, without the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// No form shown.
    Closed,
    /// Adding a new task.
    Add,
    /// Editing the task with this ID.
    Edit(TaskId),
}

impl DialogMode {
    /// Window title for the form.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Closed | Self::Add => "Add Task",
            Self::Edit(_) => "Edit Task",
        }
    }

    /// Label for the submit action.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Closed | Self::Add => "Add Task",
            Self::Edit(_) => "Update Task",
        }
    }
}

impl DialogState {
    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> DialogMode {
        match self {
            Self::Closed => DialogMode::Closed,
            Self::Open(EditSession {
                target: Some(id), ..
            }) => DialogMode::Edit(*id),
            Self::Open(EditSession { target: None, .. }) => DialogMode::Add,
        }
    }

    /// The open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Closed => None,
            Self::Open(session) => Some(session),
        }
    }

    /// Returns `true` while a form is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Delete confirmation state machine: `Idle <-> Pending(id)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// Nothing awaiting confirmation.
    #[default]
    Idle,
    /// The task with this ID is deleted if the user confirms.
    Pending(TaskId),
}

impl DeleteConfirmation {
    /// ID awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Pending(id) => Some(id),
        }
    }
}
