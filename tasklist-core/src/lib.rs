//! Core task-list model for `Tasklist`.
//!
//! Holds the task type, the priority/status filter and the in-memory
//! [`TaskStore`]. Presentation concerns (dialogs, selection, rendering)
//! live in the `tasklist` crate and only talk to the store through the
//! operations exposed here.

pub mod filter;
pub mod store;
pub mod task;

pub use filter::{Filter, PriorityFilter, StatusFilter};
pub use store::{TaskCounts, TaskStore};
pub use task::{DEFAULT_DATE_FORMAT, Priority, Task, TaskFields, TaskId, TaskStatus};

use thiserror::Error;

/// Errors returned by [`TaskStore`] operations.
///
/// A failing operation never mutates the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Positional access past the end of the task sequence.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Errors from parsing priorities, statuses and filters from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown priority name.
    #[error("unknown priority: {0}")]
    Priority(String),
    /// Unknown status name.
    #[error("unknown status: {0}")]
    Status(String),
}
