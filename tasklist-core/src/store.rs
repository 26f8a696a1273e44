//! In-memory task store.
//!
//! `TaskStore` owns the ordered task sequence and is the only thing that
//! mutates it. Operations address tasks by [`TaskId`]; the `*_at`
//! helpers resolve a position in the full sequence to an ID first.

use crate::TaskError;
use crate::filter::Filter;
use crate::task::{Task, TaskFields, TaskId, TaskStatus};

/// Number of tasks per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// All tasks.
    pub total: usize,
    /// Tasks still to do.
    pub todo: usize,
    /// Finished tasks.
    pub done: usize,
}

/// Ordered, in-memory list of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a new `ToDo` task and returns its ID.
    pub fn add_task(&mut self, fields: TaskFields) -> TaskId {
        let task = Task::new(fields);
        let id = task.id;
        tracing::debug!(%id, priority = %task.priority, "task added");
        self.tasks.push(task);
        id
    }

    /// Replaces description, priority and due date of a task, keeping its
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this ID.
    pub fn update_task(&mut self, id: TaskId, fields: TaskFields) -> Result<(), TaskError> {
        let task = self.get_mut(id)?;
        task.apply(fields);
        tracing::debug!(%id, "task updated");
        Ok(())
    }

    /// Removes a task and returns it. Later tasks shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this ID.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or(TaskError::TaskNotFound(id))?;
        tracing::debug!(%id, index, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// Flips a task between `ToDo` and `Done`; returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this ID.
    pub fn toggle_status(&mut self, id: TaskId) -> Result<TaskStatus, TaskError> {
        let status = self.get_mut(id)?.toggle_status();
        tracing::debug!(%id, %status, "task status toggled");
        Ok(status)
    }

    /// [`update_task`](Self::update_task) by position in the full sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if `index >= len()`.
    pub fn update_task_at(&mut self, index: usize, fields: TaskFields) -> Result<(), TaskError> {
        let id = self.checked_id_at(index)?;
        self.update_task(id, fields)
    }

    /// [`remove_task`](Self::remove_task) by position in the full sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_task_at(&mut self, index: usize) -> Result<Task, TaskError> {
        let id = self.checked_id_at(index)?;
        self.remove_task(id)
    }

    /// [`toggle_status`](Self::toggle_status) by position in the full sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if `index >= len()`.
    pub fn toggle_status_at(&mut self, index: usize) -> Result<TaskStatus, TaskError> {
        let id = self.checked_id_at(index)?;
        self.toggle_status(id)
    }

    /// The ordered subsequence of tasks passing `filter`.
    #[must_use]
    pub fn visible(&self, filter: &Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by ID.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// ID of the task at `index` in the full sequence.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(|t| t.id)
    }

    /// Current position of a task in the full sequence.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Totals per status.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let done = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count();
        TaskCounts {
            total: self.tasks.len(),
            todo: self.tasks.len() - done,
            done,
        }
    }

    fn checked_id_at(&self, index: usize) -> Result<TaskId, TaskError> {
        self.id_at(index).ok_or(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::TaskNotFound(id))
    }
}
