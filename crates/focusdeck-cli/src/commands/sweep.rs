//! Housekeeping sweep command.
//!
//! Sweeps never run behind reads; this command is their only trigger.

use focusdeck_core::{housekeeping, now_ms, Config};

use crate::common::open_store;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (snapshots, mut store) = open_store()?;
    let now = now_ms();

    let archived = if config.housekeeping.archive_done {
        housekeeping::sweep_archive(&mut store, now)
    } else {
        0
    };
    let purged = housekeeping::sweep_purge(&mut store, now, config.housekeeping.retention_days);

    snapshots.save(&store)?;
    println!("Archived {archived}, purged {purged}");
    Ok(())
}
