//! # Focusdeck Core Library
//!
//! Core business logic for Focusdeck, a single-focus personal task tracker.
//! It implements a CLI-first philosophy: every operation is available via the
//! standalone CLI binary, which is a thin command layer over this library.
//!
//! ## Architecture
//!
//! - **Task Store**: owner of all task records and the session batching
//!   context; enforces the single-Active invariant on every mutation
//! - **Scoring**: pure `(task, now, context) -> score` with an explainable
//!   breakdown, combining aging tiers with a batch-window bonus
//! - **Ranking**: display ordering and the single "next task" recommendation,
//!   recomputed fresh on every read
//! - **Storage**: versioned JSON snapshots and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TaskStore`]: mutable task collection with status transition rules
//! - [`recommend_next`]: deterministic single-focus recommendation
//! - [`SnapshotStore`]: snapshot persistence
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod housekeeping;
pub mod rank;
pub mod score;
pub mod storage;
pub mod store;
pub mod task;

pub use clock::now_ms;
pub use error::{ConfigError, CoreError, Result, SnapshotError, ValidationError};
pub use rank::{recommend_next, scored_tasks, sorted_for_display, Recommendation};
pub use score::{score_task, Eligibility, Score, ScoreBreakdown};
pub use storage::{Config, Snapshot, SnapshotStore};
pub use store::{BatchContext, TaskStore};
pub use task::{NewTask, Status, Task};
