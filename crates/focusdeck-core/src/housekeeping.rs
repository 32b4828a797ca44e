//! Maintenance sweeps over the store.
//!
//! Sweeps are explicit operations: nothing in the engine runs them behind a
//! read, so list/score/recommend stay pure. The CLI exposes both through the
//! `sweep` command.

use chrono::{DateTime, Local, Utc};

use crate::store::TaskStore;
use crate::task::Status;

const DAY_MS: i64 = 86_400_000;

/// Archive done tasks whose last touch falls on a local calendar day before
/// `now_ms`'s day. Returns how many were archived.
///
/// Archival is bookkeeping, not user activity, so the touch timestamp stays
/// where completion left it.
pub fn sweep_archive(store: &mut TaskStore, now_ms: i64) -> usize {
    let today = match DateTime::<Utc>::from_timestamp_millis(now_ms) {
        Some(now) => now.with_timezone(&Local).date_naive(),
        None => return 0,
    };

    let mut archived = 0;
    for task in store.tasks_mut() {
        if task.done && task.status != Status::Archived {
            if let Some(touched) = DateTime::<Utc>::from_timestamp_millis(task.last_touched_ms) {
                if touched.with_timezone(&Local).date_naive() < today {
                    task.status = Status::Archived;
                    archived += 1;
                }
            }
        }
    }
    archived
}

/// Hard-remove tasks soft-deleted for longer than `retention_days`.
/// Returns how many were purged. Freed ids are never reassigned.
pub fn sweep_purge(store: &mut TaskStore, now_ms: i64, retention_days: u32) -> usize {
    let retention_ms = i64::from(retention_days) * DAY_MS;
    let before = store.len();
    store.retain_tasks(|task| {
        if task.status == Status::Deleted {
            now_ms.saturating_sub(task.last_touched_ms) < retention_ms
        } else {
            true
        }
    });
    before - store.len()
}
