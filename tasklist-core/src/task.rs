//! Task type and its field enums.
//!
//! A [`Task`] is addressed by its [`TaskId`], never by its position in
//! the list, so a filtered view can hand out rows without the row number
//! drifting away from the task it was rendered for.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ParseError;

/// Text shown in place of a missing due date.
pub const NO_DUE_DATE: &str = "N/A";

/// Due date format used when no other format is configured, or when the
/// configured one cannot render a date.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How urgent a task is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// The next priority, wrapping from `High` back to `Low`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// The previous priority, wrapping from `Low` to `High`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not finished yet.
    #[default]
    ToDo,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// The status a toggle moves to: `ToDo` <-> `Done`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// Label for the action that toggles away from this status.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::ToDo => "Mark Done",
            Self::Done => "Mark To Do",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToDo => write!(f, "To Do"),
            Self::Done => write!(f, "Done"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to do" | "todo" | "to-do" | "to_do" => Ok(Self::ToDo),
            "done" => Ok(Self::Done),
            _ => Err(ParseError::Status(s.to_string())),
        }
    }
}

/// The user-editable part of a task.
///
/// Used both to create a task and to overwrite an existing one. No field
/// is checked: an empty description is a valid description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Free-form description.
    pub description: String,
    /// Priority, `Medium` unless chosen otherwise.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl TaskFields {
    /// Bundles the three editable fields.
    #[must_use]
    pub fn new(description: impl Into<String>, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Self {
            description: description.into(),
            priority,
            due_date,
        }
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier assigned at creation.
    pub id: TaskId,
    /// Free-form description.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Completion state.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a fresh `ToDo` task from the given fields.
    #[must_use]
    pub fn new(fields: TaskFields) -> Self {
        Self {
            id: TaskId::new(),
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
            status: TaskStatus::ToDo,
        }
    }

    /// Copies out the editable fields, e.g. to pre-fill an edit form.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date,
        }
    }

    /// Overwrites description, priority and due date. Status and ID are kept.
    pub fn apply(&mut self, fields: TaskFields) {
        self.description = fields.description;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
    }

    /// Flips the status and returns the new one.
    pub const fn toggle_status(&mut self) -> TaskStatus {
        self.status = self.status.toggled();
        self.status
    }

    /// Formats the due date with `format`, or [`NO_DUE_DATE`] when absent.
    ///
    /// A format chrono cannot render (unknown specifier, time fields on a
    /// date) falls back to [`DEFAULT_DATE_FORMAT`].
    #[must_use]
    pub fn due_date_label(&self, format: &str) -> String {
        let Some(date) = self.due_date else {
            return NO_DUE_DATE.to_string();
        };
        let mut label = String::new();
        if write!(label, "{}", date.format(format)).is_err() {
            label.clear();
            let _ = write!(label, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        label
    }
}
