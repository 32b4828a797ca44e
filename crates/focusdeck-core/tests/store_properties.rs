//! Property tests for store invariants under random operation sequences.

use focusdeck_core::{rank, BatchContext, NewTask, Status, TaskStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create(String, Vec<String>),
    Toggle(u64),
    SetStatus(u64, Status),
    SoftDelete(u64),
    Remove(u64),
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Active),
        Just(Status::Parked),
        Just(Status::Blocked),
        Just(Status::Archived),
        Just(Status::Deleted),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z]{1,8}", proptest::collection::vec("[a-z]{1,4}", 0..3))
            .prop_map(|(title, tags)| Op::Create(title, tags)),
        (1u64..20).prop_map(Op::Toggle),
        ((1u64..20), status_strategy()).prop_map(|(id, status)| Op::SetStatus(id, status)),
        (1u64..20).prop_map(Op::SoftDelete),
        (1u64..20).prop_map(Op::Remove),
    ]
}

fn apply(store: &mut TaskStore, now: i64, op: Op) {
    match op {
        Op::Create(title, tags) => {
            let _ = store.create(now, NewTask::new(title).with_tags(tags));
        }
        Op::Toggle(id) => {
            store.toggle_done(now, id);
        }
        Op::SetStatus(id, status) => {
            store.set_status(now, id, status);
        }
        Op::SoftDelete(id) => {
            store.soft_delete(now, id);
        }
        Op::Remove(id) => {
            store.remove(id);
        }
    }
}

fn active_non_done(store: &TaskStore) -> usize {
    store
        .list()
        .iter()
        .filter(|t| !t.done && t.status == Status::Active)
        .count()
}

proptest! {
    /// Every activation leaves at most one non-done Active task, no matter
    /// what preceded it.
    #[test]
    fn activation_restores_the_single_active_invariant(
        ops in proptest::collection::vec(op_strategy(), 0..40),
        target in 1u64..20,
    ) {
        let mut store = TaskStore::new();
        let mut now = 1_700_000_000_000i64;
        for op in ops {
            now += 1_000;
            apply(&mut store, now, op);
        }

        if store.set_status(now + 1_000, target, Status::Active).is_some() {
            // "At most" rather than "exactly": the target itself may carry
            // the done flag, which activation leaves alone.
            prop_assert!(active_non_done(&store) <= 1);
        }
    }

    /// Without done-flag flips, the invariant holds globally after every
    /// single operation.
    #[test]
    fn invariant_holds_continuously_without_toggles(
        ops in proptest::collection::vec(
            op_strategy().prop_filter("no toggles", |op| !matches!(op, Op::Toggle(_))),
            0..40,
        ),
    ) {
        let mut store = TaskStore::new();
        let mut now = 1_700_000_000_000i64;
        for op in ops {
            now += 1_000;
            apply(&mut store, now, op);
            prop_assert!(active_non_done(&store) <= 1);
        }
    }

    /// Ids grow strictly and are never handed out twice, removals included.
    #[test]
    fn ids_are_monotonic_and_never_reused(
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = TaskStore::new();
        let mut now = 1_700_000_000_000i64;
        let mut last_id = 0u64;
        for op in ops {
            now += 1_000;
            if let Op::Create(title, tags) = op {
                if let Ok(task) = store.create(now, NewTask::new(title).with_tags(tags)) {
                    prop_assert!(task.id > last_id);
                    last_id = task.id;
                }
            } else {
                apply(&mut store, now, op);
            }
        }
    }

    /// Display ordering always partitions non-done tasks ahead of done ones
    /// and never loses or invents a task.
    #[test]
    fn display_order_partitions_done_tasks_last(
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = TaskStore::new();
        let mut now = 1_700_000_000_000i64;
        for op in ops {
            now += 1_000;
            apply(&mut store, now, op);
        }

        let ctx = store.batch_context();
        let sorted = rank::sorted_for_display(now, &ctx, &store.list());
        prop_assert_eq!(sorted.len(), store.len());

        let first_done = sorted.iter().position(|t| t.done);
        if let Some(boundary) = first_done {
            prop_assert!(sorted[boundary..].iter().all(|t| t.done));
        }
    }

    /// The recommendation never surfaces done, blocked or archived tasks,
    /// and repeated calls agree.
    #[test]
    fn recommendation_respects_eligibility_and_is_deterministic(
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = TaskStore::new();
        let mut now = 1_700_000_000_000i64;
        for op in ops {
            now += 1_000;
            apply(&mut store, now, op);
        }

        let ctx: BatchContext = store.batch_context();
        let first = rank::recommend_next(now, &ctx, &store.list());
        let second = rank::recommend_next(now, &ctx, &store.list());

        match (&first, &second) {
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.task.id, b.task.id);
                prop_assert_eq!(a.score, b.score);
                prop_assert!(!a.task.done);
                prop_assert!(!matches!(a.task.status, Status::Blocked | Status::Archived));
            }
            (None, None) => {}
            _ => prop_assert!(false, "repeated recommendations disagreed"),
        }
    }
}
