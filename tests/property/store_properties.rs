//! Property-based tests for `TaskStore`.
//!
//! Uses proptest to verify:
//! 1. N adds give length N, every task `ToDo` with the submitted fields.
//! 2. Toggling twice is the identity.
//! 3. Editing changes exactly the editable fields of one task.
//! 4. Removing index `i` shifts exactly the tail.
//! 5. The filtered view is an order-preserving subsequence.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use proptest::prelude::*;
use tasklist_core::{
    Filter, Priority, PriorityFilter, StatusFilter, TaskFields, TaskStatus, TaskStore,
};

// --- Strategies ---

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

fn arb_due_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()))
}

fn arb_fields() -> impl Strategy<Value = TaskFields> {
    (".{0,32}", arb_priority(), arb_due_date())
        .prop_map(|(description, priority, due_date)| {
            TaskFields::new(description, priority, due_date)
        })
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    let priority = prop_oneof![
        Just(PriorityFilter::All),
        Just(PriorityFilter::Low),
        Just(PriorityFilter::Medium),
        Just(PriorityFilter::High),
    ];
    let status = prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::ToDo),
        Just(StatusFilter::Done),
    ];
    (priority, status).prop_map(|(p, s)| Filter::new(p, s))
}

/// A store with random tasks, some of them toggled to `Done`.
fn arb_store() -> impl Strategy<Value = TaskStore> {
    prop::collection::vec((arb_fields(), any::<bool>()), 0..20).prop_map(|entries| {
        let mut store = TaskStore::new();
        for (fields, done) in entries {
            let id = store.add_task(fields);
            if done {
                store.toggle_status(id).unwrap();
            }
        }
        store
    })
}

proptest! {
    #[test]
    fn adds_append_todo_tasks(all in prop::collection::vec(arb_fields(), 0..30)) {
        let mut store = TaskStore::new();
        for f in &all {
            store.add_task(f.clone());
        }
        prop_assert_eq!(store.len(), all.len());
        for (task, f) in store.tasks().iter().zip(&all) {
            prop_assert_eq!(task.status, TaskStatus::ToDo);
            prop_assert_eq!(&task.fields(), f);
        }
    }

    #[test]
    fn toggle_twice_is_identity(store in arb_store(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let mut store = store;
        let i = pick.index(store.len());
        let before = store.tasks().to_vec();
        store.toggle_status_at(i).unwrap();
        prop_assert_ne!(store.tasks()[i].status, before[i].status);
        store.toggle_status_at(i).unwrap();
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn edit_changes_only_editable_fields(
        store in arb_store(),
        pick in any::<prop::sample::Index>(),
        new_fields in arb_fields(),
    ) {
        prop_assume!(!store.is_empty());
        let mut store = store;
        let i = pick.index(store.len());
        let before = store.tasks().to_vec();
        store.update_task_at(i, new_fields.clone()).unwrap();
        for (j, (after, old)) in store.tasks().iter().zip(&before).enumerate() {
            if j == i {
                prop_assert_eq!(after.fields(), new_fields.clone());
                prop_assert_eq!(after.status, old.status);
                prop_assert_eq!(after.id, old.id);
            } else {
                prop_assert_eq!(after, old);
            }
        }
    }

    #[test]
    fn remove_shifts_tail(store in arb_store(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let mut store = store;
        let i = pick.index(store.len());
        let before = store.tasks().to_vec();
        let removed = store.remove_task_at(i).unwrap();
        prop_assert_eq!(&removed, &before[i]);
        prop_assert_eq!(store.len(), before.len() - 1);
        prop_assert_eq!(&store.tasks()[..i], &before[..i]);
        prop_assert_eq!(&store.tasks()[i..], &before[i + 1..]);
    }

    #[test]
    fn visible_is_ordered_subsequence(store in arb_store(), filter in arb_filter()) {
        let visible = store.visible(&filter);
        let mut last = None;
        for p in visible.iter().map(|t| store.position(t.id).unwrap()) {
            prop_assert!(last.is_none_or(|l| l < p));
            last = Some(p);
        }
        let expected = store.tasks().iter().filter(|t| filter.matches(t)).count();
        prop_assert_eq!(visible.len(), expected);
    }

    #[test]
    fn unfiltered_view_is_everything(store in arb_store()) {
        let visible: Vec<_> = store.visible(&Filter::default()).into_iter().cloned().collect();
        prop_assert_eq!(visible.as_slice(), store.tasks());
    }
}
