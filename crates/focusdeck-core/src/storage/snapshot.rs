//! Versioned JSON snapshot persistence.
//!
//! A snapshot is the full serializable engine state: every task, the id
//! counter, and the session batching context. Optional fields serialize as
//! explicit `null` so the format stays stable. Writes go through a temp file
//! and rename, so a crash never leaves a half-written snapshot behind.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::store::TaskStore;
use crate::task::Task;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable engine state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version; files from the pre-versioned era read as version 1
    #[serde(default = "default_version")]
    pub version: u32,
    pub tasks: Vec<Task>,
    pub next_id: u64,
    pub current_tag: Option<String>,
    pub context_started_ms: Option<i64>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// File-backed snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Snapshot store at the default location inside the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: super::data_dir()?.join("tasks.json"),
        })
    }

    /// Snapshot store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted store, or an empty one on first run.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.path.exists() {
            return Ok(TaskStore::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| SnapshotError::ReadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| SnapshotError::ParseFailed(e.to_string()))?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            }
            .into());
        }

        Ok(TaskStore::from_snapshot(snapshot))
    }

    /// Persist `store` atomically.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let content = serde_json::to_vec_pretty(&store.snapshot())?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &content).map_err(|e| SnapshotError::WriteFailed {
            path: tmp.clone(),
            message: e.to_string(),
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| SnapshotError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
