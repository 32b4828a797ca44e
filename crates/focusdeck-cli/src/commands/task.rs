//! Task management commands for CLI.

use clap::Subcommand;
use focusdeck_core::{now_ms, rank, NewTask, Status};

use crate::common::{open_store, parse_status};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task and make it the active one
    Add {
        /// Task title
        title: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Comma-separated tags; the first is the primary tag
        #[arg(long)]
        tags: Option<String>,
        /// Deadline as epoch milliseconds
        #[arg(long)]
        due_ts: Option<i64>,
        /// Estimated duration in minutes
        #[arg(long)]
        est_min: Option<u32>,
    },
    /// List tasks in display order
    List {
        /// Include archived and deleted tasks
        #[arg(long)]
        all: bool,
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// List non-done tasks with score breakdowns, best first
    Scored,
    /// Flip a task's completion flag
    Toggle {
        /// Task ID
        id: u64,
    },
    /// Set a task's status
    Status {
        /// Task ID
        id: u64,
        /// One of: active, parked, blocked, archived, deleted
        status: String,
    },
    /// Soft-delete a task (kept on disk until the purge sweep)
    Delete {
        /// Task ID
        id: u64,
    },
    /// Permanently remove a task
    Rm {
        /// Task ID
        id: u64,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (snapshots, mut store) = open_store()?;
    let now = now_ms();

    match action {
        TaskAction::Add {
            title,
            notes,
            tags,
            due_ts,
            est_min,
        } => {
            let draft = NewTask {
                title,
                notes,
                tags: tags
                    .map(|t| t.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
                due_ts,
                est_min,
            };
            let task = store.create(now, draft)?;
            snapshots.save(&store)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { all, json } => {
            let ctx = store.batch_context();
            let visible: Vec<_> = rank::sorted_for_display(now, &ctx, &store.list())
                .into_iter()
                .filter(|t| all || !matches!(t.status, Status::Archived | Status::Deleted))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for t in &visible {
                    let mark = if t.done { "x" } else { " " };
                    let tags = if t.tags.is_empty() {
                        String::new()
                    } else {
                        format!("  [{}]", t.tags.join(","))
                    };
                    println!("[{mark}] {:>4}  {:<8}  {}{}", t.id, format!("{:?}", t.status), t.title, tags);
                }
            }
        }
        TaskAction::Scored => {
            let ctx = store.batch_context();
            let recs = rank::scored_tasks(now, &ctx, &store.list());
            println!("{}", serde_json::to_string_pretty(&recs)?);
        }
        TaskAction::Toggle { id } => match store.toggle_done(now, id) {
            Some(task) => {
                snapshots.save(&store)?;
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => return Err(format!("not found: {id}").into()),
        },
        TaskAction::Status { id, status } => {
            let status = parse_status(&status)?;
            match store.set_status(now, id, status) {
                Some(task) => {
                    snapshots.save(&store)?;
                    println!("{}", serde_json::to_string_pretty(&task)?);
                }
                None => return Err(format!("not found: {id}").into()),
            }
        }
        TaskAction::Delete { id } => match store.soft_delete(now, id) {
            Some(task) => {
                snapshots.save(&store)?;
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => return Err(format!("not found: {id}").into()),
        },
        TaskAction::Rm { id } => {
            let existed = store.remove(id);
            if existed {
                snapshots.save(&store)?;
                println!("Task removed: {id}");
            } else {
                println!("No task with id {id}");
            }
        }
    }

    Ok(())
}
