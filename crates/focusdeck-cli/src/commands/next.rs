//! Next-task recommendation command.

use focusdeck_core::{now_ms, rank};

use crate::common::open_store;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_snapshots, store) = open_store()?;
    let now = now_ms();
    let ctx = store.batch_context();

    match rank::recommend_next(now, &ctx, &store.list()) {
        Some(rec) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                println!("Next: [{}] {} (score {})", rec.task.id, rec.task.title, rec.score);
                println!(
                    "  aging tier {} x3, batch bonus {} x2",
                    rec.breakdown.aging, rec.breakdown.batch_bonus
                );
            }
        }
        None => println!("Nothing to recommend"),
    }
    Ok(())
}
