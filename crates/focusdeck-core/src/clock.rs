//! Wall-clock boundary.
//!
//! The engine never reads time itself. Callers read the clock once per
//! logical operation and pass the same `now_ms` into every computation of
//! that operation, so aging tiers stay consistent within a single pass.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_millis(0))
        .as_millis() as i64
}
