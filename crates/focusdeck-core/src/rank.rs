//! Display ordering and the single-focus recommendation.
//!
//! Both paths are pure over a task snapshot, one clock reading and the batch
//! context, and are recomputed on every read. Nothing here may be cached:
//! `now` advances continuously and moves tasks across aging tiers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::score::{score_task, Eligibility, ScoreBreakdown, INELIGIBLE_SCORE};
use crate::store::BatchContext;
use crate::task::Task;

/// A scored task projection. Never stored; built fresh per read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub task: Task,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
}

/// Ranked comparator: score descending, then least recently touched first,
/// then earliest due date with absent treated as 0.
fn rank_order(a: &Task, a_score: i32, b: &Task, b_score: i32) -> Ordering {
    b_score
        .cmp(&a_score)
        .then_with(|| a.last_touched_ms.cmp(&b.last_touched_ms))
        .then_with(|| a.due_ts.unwrap_or(0).cmp(&b.due_ts.unwrap_or(0)))
}

/// Total display order over the full collection.
///
/// Non-done tasks lead, ranked under listing eligibility, so a blocked or
/// archived task still sorts by its real score. Done tasks trail, grouped by
/// primary tag and then title. Filtering `Archived`/`Deleted` out of the
/// result is the caller's job.
pub fn sorted_for_display(now_ms: i64, ctx: &BatchContext, tasks: &[Task]) -> Vec<Task> {
    let mut scored: Vec<(Task, i32)> = tasks
        .iter()
        .map(|t| {
            let score = score_task(now_ms, ctx, t, Eligibility::Listing);
            (t.clone(), score.value)
        })
        .collect();

    scored.sort_by(|(ta, sa), (tb, sb)| {
        ta.done.cmp(&tb.done).then_with(|| {
            if !ta.done && !tb.done {
                rank_order(ta, *sa, tb, *sb)
            } else {
                let atag = ta.primary_tag().unwrap_or_default();
                let btag = tb.primary_tag().unwrap_or_default();
                atag.cmp(btag).then_with(|| ta.title.cmp(&tb.title))
            }
        })
    });

    scored.into_iter().map(|(t, _)| t).collect()
}

/// Score every non-done task under recommendation eligibility, best first.
///
/// Blocked and archived tasks are included at the ineligible sentinel so a
/// caller can show why they will never be recommended.
pub fn scored_tasks(now_ms: i64, ctx: &BatchContext, tasks: &[Task]) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = tasks
        .iter()
        .filter(|t| !t.done)
        .map(|t| {
            let score = score_task(now_ms, ctx, t, Eligibility::Recommendation);
            Recommendation {
                task: t.clone(),
                score: score.value,
                breakdown: score.breakdown,
            }
        })
        .collect();

    recs.sort_by(|a, b| rank_order(&a.task, a.score, &b.task, b.score));
    recs
}

/// Single best eligible task, or `None` when nothing qualifies.
///
/// Deterministic for a fixed snapshot and `now`: same comparator as the
/// display ranking, no randomness, no hidden state.
pub fn recommend_next(now_ms: i64, ctx: &BatchContext, tasks: &[Task]) -> Option<Recommendation> {
    let best = scored_tasks(now_ms, ctx, tasks).into_iter().next()?;
    if best.score <= INELIGIBLE_SCORE {
        return None;
    }
    Some(best)
}
