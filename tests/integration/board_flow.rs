//! Integration tests for the task board: dialog and delete state machines,
//! and row resolution through the filtered view.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::NaiveDate;
use tasklist::board::{Board, DeleteConfirmation, DialogMode};
use tasklist_core::{Priority, PriorityFilter, StatusFilter, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn visible(board: &Board) -> Vec<String> {
    board
        .visible_tasks()
        .iter()
        .map(|t| t.description.clone())
        .collect()
}

/// Board holding A(High, ToDo), B(Low, ToDo), C(High, Done).
fn abc_board() -> Board {
    let mut board = Board::new();
    board.add_task("A", Priority::High, None);
    board.add_task("B", Priority::Low, None);
    board.add_task("C", Priority::High, None);
    board.toggle_status(2);
    board
}

// ===========================================================================
// Add, edit, delete and toggle scenarios at the board level
// ===========================================================================

#[test]
fn add_edit_scenario() {
    let mut board = Board::new();
    board.add_task("Write report", Priority::High, date(2024, 1, 1));
    board.begin_edit(0).unwrap();
    assert!(matches!(board.dialog_mode(), DialogMode::Edit(_)));
    board.commit_edit("Write report v2", Priority::Medium, date(2024, 2, 1));

    let task = &board.store().tasks()[0];
    assert_eq!(task.description, "Write report v2");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, date(2024, 2, 1));
    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(board.dialog_mode(), DialogMode::Closed);
}

#[test]
fn delete_then_toggle_scenario() {
    let mut board = Board::new();
    board.add_task("one", Priority::Medium, None);
    board.add_task("two", Priority::Medium, None);
    board.add_task("three", Priority::Medium, None);

    board.delete_task(1);
    assert_eq!(visible(&board), ["one", "three"]);

    board.toggle_status(1);
    let tasks = board.store().tasks();
    assert_eq!(tasks[1].description, "three");
    assert_eq!(tasks[1].status, TaskStatus::Done);
    assert_eq!(tasks[0].status, TaskStatus::ToDo);
}

#[test]
fn high_filter_scenario() {
    let mut board = abc_board();
    board.set_filter(Some(PriorityFilter::High), Some(StatusFilter::All));
    assert_eq!(visible(&board), ["A", "C"]);
    assert_eq!(board.store().len(), 3);
}

// ===========================================================================
// Dialog state machine
// ===========================================================================

#[test]
fn dialog_closed_add_closed() {
    let mut board = Board::new();
    assert_eq!(board.dialog_mode(), DialogMode::Closed);
    board.open_add();
    assert_eq!(board.dialog_mode(), DialogMode::Add);
    board.cancel_dialog();
    assert_eq!(board.dialog_mode(), DialogMode::Closed);
    assert!(board.store().is_empty());
}

#[test]
fn dialog_accepts_empty_draft() {
    let mut board = Board::new();
    board.open_add();
    let id = board.submit_dialog().unwrap();
    let task = board.store().get(id).unwrap();
    assert!(task.description.is_empty());
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
}

#[test]
fn reopening_add_starts_from_defaults() {
    let mut board = Board::new();
    board.open_add();
    board.draft_mut().unwrap().description = "half typed".to_string();
    board.cancel_dialog();
    board.open_add();
    assert!(board.draft_mut().unwrap().description.is_empty());
}

// ===========================================================================
// Delete state machine
// ===========================================================================

#[test]
fn delete_idle_pending_idle() {
    let mut board = abc_board();
    assert_eq!(board.delete_confirmation(), DeleteConfirmation::Idle);
    let id = board.request_delete(1).unwrap();
    assert_eq!(board.delete_confirmation(), DeleteConfirmation::Pending(id));
    board.cancel_delete();
    assert_eq!(board.delete_confirmation(), DeleteConfirmation::Idle);
    assert_eq!(visible(&board), ["A", "B", "C"]);

    board.request_delete(1);
    let removed = board.confirm_delete().unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(visible(&board), ["A", "C"]);
}

// ===========================================================================
// Rows resolve to the task shown, not the storage index
// ===========================================================================

#[test]
fn narrowed_view_edits_the_displayed_task() {
    let mut board = abc_board();
    board.set_filter(Some(PriorityFilter::High), Some(StatusFilter::Done));
    assert_eq!(visible(&board), ["C"]);

    let id = board.begin_edit(0).unwrap();
    assert_eq!(board.store().get(id).unwrap().description, "C");
    board.commit_edit("C2", Priority::Low, None);

    // C2 no longer matches the High filter.
    assert!(board.visible_tasks().is_empty());
    board.set_filter(Some(PriorityFilter::All), Some(StatusFilter::All));
    assert_eq!(visible(&board), ["A", "B", "C2"]);
    assert_eq!(board.store().tasks()[2].status, TaskStatus::Done);
}

#[test]
fn narrowed_view_deletes_the_displayed_task() {
    let mut board = abc_board();
    board.set_filter(Some(PriorityFilter::Low), None);
    board.request_delete(0);
    board.confirm_delete();
    board.set_filter(Some(PriorityFilter::All), None);
    assert_eq!(visible(&board), ["A", "C"]);
}

#[test]
fn pending_delete_survives_filter_change() {
    let mut board = abc_board();
    board.request_delete(1);
    board.set_filter(Some(PriorityFilter::High), None);
    let removed = board.confirm_delete().unwrap();
    assert_eq!(removed.description, "B");
}

#[test]
fn filter_never_mutates_tasks() {
    let mut board = abc_board();
    let before = board.store().tasks().to_vec();
    for p in [
        PriorityFilter::Low,
        PriorityFilter::Medium,
        PriorityFilter::High,
    ] {
        for s in [StatusFilter::ToDo, StatusFilter::Done] {
            board.set_filter(Some(p), Some(s));
        }
    }
    assert_eq!(board.store().tasks(), before.as_slice());
}
