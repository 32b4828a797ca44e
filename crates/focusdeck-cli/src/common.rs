//! Shared helpers for CLI commands.

use focusdeck_core::{SnapshotStore, Status, TaskStore};

/// Open the snapshot store at its default location and load the task store.
///
/// Each CLI invocation is one logical operation: load, mutate, persist. The
/// process owns the store for its whole (short) lifetime, which gives the
/// engine the single-writer timeline it assumes.
pub fn open_store() -> Result<(SnapshotStore, TaskStore), Box<dyn std::error::Error>> {
    let snapshots = SnapshotStore::open()?;
    let store = snapshots.load()?;
    Ok((snapshots, store))
}

/// Parse a status name as written on the command line.
pub fn parse_status(s: &str) -> Result<Status, String> {
    match s.to_ascii_lowercase().as_str() {
        "active" => Ok(Status::Active),
        "parked" => Ok(Status::Parked),
        "blocked" => Ok(Status::Blocked),
        "archived" => Ok(Status::Archived),
        "deleted" => Ok(Status::Deleted),
        other => Err(format!(
            "unknown status: {other} (expected active|parked|blocked|archived|deleted)"
        )),
    }
}
