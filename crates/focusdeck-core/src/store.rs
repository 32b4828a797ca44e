//! Mutable task store and session batching context.
//!
//! The store owns every [`Task`] plus the batching context, and is the only
//! place mutation happens. Operations take `now_ms` from the caller so one
//! logical operation observes a single clock reading. The single-Active
//! invariant is enforced here: activating a task parks every other non-done
//! task within the same call, so readers always observe the demotion and the
//! activation together.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::task::{NewTask, Status, Task};

/// Read-only batching context, passed by value into scoring calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchContext {
    /// Primary tag of the most recently activated or created task
    pub current_tag: Option<String>,
    /// When the current batch window began
    pub started_ms: Option<i64>,
}

/// Owner of all task records plus the session batching context.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
    current_tag: Option<String>,
    context_started_ms: Option<i64>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Snapshot copy of every record, in id order. Callers sort independently.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Session context by value, for threading into scoring calls.
    pub fn batch_context(&self) -> BatchContext {
        BatchContext {
            current_tag: self.current_tag.clone(),
            started_ms: self.context_started_ms,
        }
    }

    /// Create a task from `draft` and make it the active one.
    ///
    /// Assigns the next id, parks every other non-done task, and when the
    /// draft carries tags resets the batch window to its primary tag.
    pub fn create(&mut self, now_ms: i64, draft: NewTask) -> Result<Task, ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        self.park_others(now_ms, None);

        self.next_id += 1;
        let task = Task {
            id: self.next_id,
            title: draft.title,
            notes: draft.notes,
            done: false,
            tags: draft.tags,
            due_ts: draft.due_ts,
            est_min: draft.est_min,
            last_touched_ms: now_ms,
            status: Status::Active,
        };

        if let Some(tag) = task.primary_tag() {
            self.current_tag = Some(tag.to_string());
            self.context_started_ms = Some(now_ms);
        }

        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Hard-remove. Returns whether a task existed. Ids are never reused.
    pub fn remove(&mut self, id: u64) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Mark `id` as `Deleted` without freeing the record.
    pub fn soft_delete(&mut self, now_ms: i64, id: u64) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.status = Status::Deleted;
        task.last_touched_ms = now_ms;
        Some(task.clone())
    }

    /// Flip the completion flag. Leaves `status` alone.
    pub fn toggle_done(&mut self, now_ms: i64, id: u64) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.done = !task.done;
        task.last_touched_ms = now_ms;
        Some(task.clone())
    }

    /// Set the status of `id`. Any status is a legal target.
    ///
    /// Activation additionally parks every other non-done task and, when the
    /// task is tagged, resets the batch window to its primary tag.
    pub fn set_status(&mut self, now_ms: i64, id: u64, status: Status) -> Option<Task> {
        if !self.tasks.contains_key(&id) {
            return None;
        }

        if status == Status::Active {
            self.park_others(now_ms, Some(id));
        }

        let task = self.tasks.get_mut(&id)?;
        task.status = status;
        task.last_touched_ms = now_ms;
        let updated = task.clone();

        if status == Status::Active {
            if let Some(tag) = updated.primary_tag() {
                self.current_tag = Some(tag.to_string());
                self.context_started_ms = Some(now_ms);
            }
        }

        Some(updated)
    }

    /// Full serializable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            tasks: self.tasks.values().cloned().collect(),
            next_id: self.next_id,
            current_tag: self.current_tag.clone(),
            context_started_ms: self.context_started_ms,
        }
    }

    /// Rebuild a store from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        // A hand-edited file may carry a counter behind its own task ids;
        // never hand out an id that is already taken.
        let max_id = snapshot.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        let tasks = snapshot.tasks.into_iter().map(|t| (t.id, t)).collect();
        Self {
            tasks,
            next_id: snapshot.next_id.max(max_id),
            current_tag: snapshot.current_tag,
            context_started_ms: snapshot.context_started_ms,
        }
    }

    pub(crate) fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> + '_ {
        self.tasks.values_mut()
    }

    pub(crate) fn retain_tasks<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Task) -> bool,
    {
        self.tasks.retain(|_, task| keep(task));
    }

    /// Park every non-done task other than `keep`, in one pass over the map.
    /// Demotion counts as a touch for the tasks whose status actually moved.
    fn park_others(&mut self, now_ms: i64, keep: Option<u64>) {
        for (id, task) in self.tasks.iter_mut() {
            if Some(*id) != keep && !task.done && task.status != Status::Parked {
                task.status = Status::Parked;
                task.last_touched_ms = now_ms;
            }
        }
    }
}
