//! Task entity and lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
///
/// `Active` is exclusive among non-done tasks: activating one task parks every
/// other non-done task in the same call. `Deleted` and `Archived` are terminal
/// in practice, but any status remains a legal `set_status` target, so a
/// deleted or archived task can be revived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    /// The single task currently being worked on
    Active,
    /// Set aside; the resting state for everything not in focus
    Parked,
    /// Waiting on something external; never recommended
    Blocked,
    /// Swept out of the working set; hidden from display
    Archived,
    /// Soft-deleted; removed for good by the purge sweep
    Deleted,
}

impl Default for Status {
    fn default() -> Self {
        Status::Parked
    }
}

/// A single work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Monotonically assigned by the store, never reused
    pub id: u64,
    pub title: String,
    pub notes: Option<String>,
    /// Completion flag, orthogonal to `status`
    pub done: bool,
    /// Ordered tags; the first is the primary tag
    pub tags: Vec<String>,
    /// Deadline in epoch milliseconds; absent means no deadline
    pub due_ts: Option<i64>,
    /// Estimated duration in minutes; carried on the entity, not yet scored
    pub est_min: Option<u32>,
    /// Epoch milliseconds of the last mutation touching this task
    pub last_touched_ms: i64,
    #[serde(default)]
    pub status: Status,
}

impl Task {
    /// First tag, used for batching and for grouping done tasks.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Draft for task creation. The store assigns id, status and touch time.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub due_ts: Option<i64>,
    pub est_min: Option<u32>,
}

impl NewTask {
    /// Create a draft with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_due_ts(mut self, due_ts: i64) -> Self {
        self.due_ts = Some(due_ts);
        self
    }

    pub fn with_est_min(mut self, est_min: u32) -> Self {
        self.est_min = Some(est_min);
        self
    }
}
