//! Priority/status filter over the task list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::task::{Priority, Task, TaskStatus};

/// Which priority the view is narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    /// Any priority.
    #[default]
    All,
    /// Only `Low`.
    Low,
    /// Only `Medium`.
    Medium,
    /// Only `High`.
    High,
}

impl PriorityFilter {
    /// Returns `true` if `priority` passes this filter.
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }

    /// Next option in select-box order: All, Low, Medium, High.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::All,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => Self::Low,
            Priority::Medium => Self::Medium,
            Priority::High => Self::High,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Priorities"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>().map(Self::from)
    }
}

/// Which status the view is narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Any status.
    #[default]
    All,
    /// Only unfinished tasks.
    #[serde(alias = "todo")]
    ToDo,
    /// Only finished tasks.
    Done,
}

impl StatusFilter {
    /// Returns `true` if `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::ToDo => status == TaskStatus::ToDo,
            Self::Done => status == TaskStatus::Done,
        }
    }

    /// Next option in select-box order: All, To Do, Done.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::ToDo,
            Self::ToDo => Self::Done,
            Self::Done => Self::All,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::ToDo => Self::ToDo,
            TaskStatus::Done => Self::Done,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Statuses"),
            Self::ToDo => write!(f, "To Do"),
            Self::Done => write!(f, "Done"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TaskStatus>().map(Self::from)
    }
}

/// A pair of predicates narrowing which tasks are displayed.
///
/// Filtering never alters stored tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Priority predicate.
    pub priority: PriorityFilter,
    /// Status predicate.
    pub status: StatusFilter,
}

impl Filter {
    /// Builds a filter from both predicates.
    #[must_use]
    pub const fn new(priority: PriorityFilter, status: StatusFilter) -> Self {
        Self { priority, status }
    }

    /// Returns `true` if `task` passes both predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.matches(task.priority) && self.status.matches(task.status)
    }

    /// Returns `true` if neither predicate narrows anything.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.priority == PriorityFilter::All && self.status == StatusFilter::All
    }

    /// Replaces whichever predicates are given and keeps the rest.
    pub const fn update(&mut self, priority: Option<PriorityFilter>, status: Option<StatusFilter>) {
        if let Some(p) = priority {
            self.priority = p;
        }
        if let Some(s) = status {
            self.status = s;
        }
    }
}
