//! Property-based tests for `Board`.
//!
//! Drives a board with random action sequences and checks that:
//! 1. The visible rows are always an ordered subsequence of the store.
//! 2. Every row action lands on the task displayed at that row.
//! 3. Dialog and delete confirmation always return to their idle states
//!    after commit or cancel.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tasklist::board::{Board, DeleteConfirmation, DialogMode};
use tasklist_core::{Priority, PriorityFilter, StatusFilter};

#[derive(Debug, Clone)]
enum Action {
    Add(String, Priority),
    Toggle(usize),
    Edit(usize, String),
    Delete(usize),
    Filter(PriorityFilter, StatusFilter),
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    let priority_filter = prop_oneof![
        Just(PriorityFilter::All),
        Just(PriorityFilter::Low),
        Just(PriorityFilter::Medium),
        Just(PriorityFilter::High),
    ];
    let status_filter = prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::ToDo),
        Just(StatusFilter::Done),
    ];
    prop_oneof![
        3 => ("[a-z]{0,8}", arb_priority()).prop_map(|(d, p)| Action::Add(d, p)),
        2 => (0usize..10).prop_map(Action::Toggle),
        1 => (0usize..10, "[a-z]{0,8}").prop_map(|(r, d)| Action::Edit(r, d)),
        1 => (0usize..10).prop_map(Action::Delete),
        1 => (priority_filter, status_filter).prop_map(|(p, s)| Action::Filter(p, s)),
    ]
}

proptest! {
    #[test]
    fn row_actions_hit_the_displayed_task(actions in prop::collection::vec(arb_action(), 0..60)) {
        let mut board = Board::new();
        for action in actions {
            match action {
                Action::Add(description, priority) => {
                    let len = board.store().len();
                    board.add_task(description, priority, None);
                    prop_assert_eq!(board.store().len(), len + 1);
                }
                Action::Toggle(row) => {
                    let shown = board.task_at_row(row).cloned();
                    let result = board.toggle_status(row);
                    match shown {
                        Some(task) => {
                            let after = board.store().get(task.id).unwrap();
                            prop_assert_eq!(Some(after.status), result);
                            prop_assert_eq!(after.status, task.status.toggled());
                        }
                        None => prop_assert!(result.is_none()),
                    }
                }
                Action::Edit(row, description) => {
                    let shown = board.task_at_row(row).cloned();
                    let target = board.begin_edit(row);
                    prop_assert_eq!(target, shown.as_ref().map(|t| t.id));
                    board.commit_edit(description.clone(), Priority::High, None);
                    prop_assert_eq!(board.dialog_mode(), DialogMode::Closed);
                    if let Some(task) = shown {
                        let after = board.store().get(task.id).unwrap();
                        prop_assert_eq!(&after.description, &description);
                        prop_assert_eq!(after.status, task.status);
                    }
                }
                Action::Delete(row) => {
                    let shown = board.task_at_row(row).map(|t| t.id);
                    let len = board.store().len();
                    board.request_delete(row);
                    let removed = board.confirm_delete().map(|t| t.id);
                    prop_assert_eq!(removed, shown);
                    prop_assert_eq!(board.delete_confirmation(), DeleteConfirmation::Idle);
                    let expected = if shown.is_some() { len - 1 } else { len };
                    prop_assert_eq!(board.store().len(), expected);
                }
                Action::Filter(p, s) => board.set_filter(Some(p), Some(s)),
            }

            let filter = board.filter();
            let expected: Vec<_> = board
                .store()
                .tasks()
                .iter()
                .filter(|t| filter.matches(t))
                .map(|t| t.id)
                .collect();
            let visible: Vec<_> = board.visible_tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(visible, expected);
        }
    }
}
