//! Storage adapters: data directory, TOML configuration, JSON snapshots.

pub mod config;
pub mod snapshot;

pub use config::Config;
pub use snapshot::{Snapshot, SnapshotStore, SNAPSHOT_VERSION};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the focusdeck data directory.
///
/// `FOCUSDECK_DATA_DIR` overrides the location outright (tests rely on this);
/// otherwise `~/.config/focusdeck[-dev]/` based on `FOCUSDECK_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FOCUSDECK_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusdeck-dev")
    } else {
        base_dir.join("focusdeck")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
