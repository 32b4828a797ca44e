//! Task scoring: aging tiers plus the batch-window bonus.
//!
//! Scoring is a pure function of the task, a single clock reading and the
//! session batch context. The breakdown carries reserved terms (`urgency`,
//! `quick_win`, `sla_override`) that the current rule never populates; they
//! stay present in the output so the shape is stable when those terms land.

use serde::{Deserialize, Serialize};

use crate::store::BatchContext;
use crate::task::{Status, Task};

/// Aging tier thresholds in milliseconds, highest tier first.
const AGING_THRESHOLDS_MS: [i64; 3] = [
    3 * 24 * 60 * 60 * 1000, // 3 days -> tier 3
    24 * 60 * 60 * 1000,     // 1 day -> tier 2
    6 * 60 * 60 * 1000,      // 6 hours -> tier 1
];

/// Batch window length: tasks sharing the active tag get a bonus this long.
pub const BATCH_WINDOW_MS: i64 = 60 * 60 * 1000;

/// Weight applied to the aging tier.
const AGING_WEIGHT: i32 = 3;

/// Weight applied to the batch bonus.
const BATCH_WEIGHT: i32 = 2;

/// Score assigned to tasks that fail the active eligibility filter.
pub const INELIGIBLE_SCORE: i32 = i32::MIN / 2;

/// Which tasks count as scoreable.
///
/// The display listing only demotes `done` tasks; recommendation additionally
/// rules out `Blocked` and `Archived`. A blocked task still renders in the
/// list with a real score, it just never wins the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Excludes only `done` tasks
    Listing,
    /// Excludes `done`, `Blocked` and `Archived` tasks
    Recommendation,
}

impl Eligibility {
    /// Whether `task` is scoreable under this filter.
    pub fn admits(&self, task: &Task) -> bool {
        if task.done {
            return false;
        }
        match self {
            Eligibility::Listing => true,
            Eligibility::Recommendation => {
                !matches!(task.status, Status::Blocked | Status::Archived)
            }
        }
    }
}

/// Per-term decomposition of a task score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Reserved for deadline-driven urgency; always 0 in the current rule
    pub urgency: i32,
    /// Aging tier 0-3 from time since last touch
    pub aging: i32,
    /// 2 while the batch window is open and the task shares the active tag
    pub batch_bonus: i32,
    /// Reserved for short-estimate boosts; always 0 in the current rule
    pub quick_win: i32,
    /// Reserved for hard deadline overrides; always false in the current rule
    pub sla_override: bool,
}

/// Score value with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: i32,
    pub breakdown: ScoreBreakdown,
}

impl Score {
    fn ineligible() -> Self {
        Self {
            value: INELIGIBLE_SCORE,
            breakdown: ScoreBreakdown::default(),
        }
    }

    /// Whether this score marks the task as ineligible.
    pub fn is_ineligible(&self) -> bool {
        self.value <= INELIGIBLE_SCORE
    }
}

/// Aging tier (0-3) for a task untouched for `elapsed_ms`.
fn aging_tier(elapsed_ms: i64) -> i32 {
    if elapsed_ms >= AGING_THRESHOLDS_MS[0] {
        3
    } else if elapsed_ms >= AGING_THRESHOLDS_MS[1] {
        2
    } else if elapsed_ms >= AGING_THRESHOLDS_MS[2] {
        1
    } else {
        0
    }
}

/// Score `task` at `now_ms` under `eligibility`.
pub fn score_task(now_ms: i64, ctx: &BatchContext, task: &Task, eligibility: Eligibility) -> Score {
    if !eligibility.admits(task) {
        return Score::ineligible();
    }

    let elapsed = (now_ms - task.last_touched_ms).max(0);
    let aging = aging_tier(elapsed);

    let mut batch_bonus = 0;
    if let (Some(tag), Some(started)) = (&ctx.current_tag, ctx.started_ms) {
        let within_window = now_ms.saturating_sub(started) <= BATCH_WINDOW_MS;
        if within_window && task.tags.iter().any(|t| t == tag) {
            batch_bonus = 2;
        }
    }

    Score {
        value: AGING_WEIGHT * aging + BATCH_WEIGHT * batch_bonus,
        breakdown: ScoreBreakdown {
            aging,
            batch_bonus,
            ..ScoreBreakdown::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    fn mk_task(status: Status, done: bool, last_touched_ms: i64) -> Task {
        Task {
            id: 1,
            title: "t".to_string(),
            notes: None,
            done,
            tags: vec![],
            due_ts: None,
            est_min: None,
            last_touched_ms,
            status,
        }
    }

    #[test]
    fn aging_is_a_step_function_of_elapsed_time() {
        let cases: [(i64, i32); 8] = [
            (0, 0),
            (5 * HOUR_MS, 0),
            (6 * HOUR_MS, 1),
            (DAY_MS - 60_000, 1),
            (DAY_MS, 2),
            (3 * DAY_MS - HOUR_MS, 2),
            (3 * DAY_MS, 3),
            (10 * DAY_MS, 3),
        ];

        let ctx = BatchContext::default();
        for (elapsed, tier) in cases {
            let task = mk_task(Status::Parked, false, 0);
            let score = score_task(elapsed, &ctx, &task, Eligibility::Listing);
            assert_eq!(score.breakdown.aging, tier, "elapsed {elapsed}");
            assert_eq!(score.value, 3 * tier, "elapsed {elapsed}");
        }
    }

    #[test]
    fn elapsed_clamps_at_zero_for_future_touch() {
        let ctx = BatchContext::default();
        let task = mk_task(Status::Parked, false, 10 * DAY_MS);
        let score = score_task(0, &ctx, &task, Eligibility::Listing);
        assert_eq!(score.breakdown.aging, 0);
    }

    #[test]
    fn batch_bonus_inside_and_outside_window() {
        let ctx = BatchContext {
            current_tag: Some("work".to_string()),
            started_ms: Some(0),
        };
        let mut task = mk_task(Status::Parked, false, 0);
        task.tags = vec!["work".to_string()];

        let at_edge = score_task(3_600_000, &ctx, &task, Eligibility::Recommendation);
        assert_eq!(at_edge.breakdown.batch_bonus, 2);
        assert_eq!(at_edge.value, 4);

        let past_edge = score_task(3_600_001, &ctx, &task, Eligibility::Recommendation);
        assert_eq!(past_edge.breakdown.batch_bonus, 0);
        assert_eq!(past_edge.value, 0);
    }

    #[test]
    fn batch_bonus_requires_matching_tag() {
        let ctx = BatchContext {
            current_tag: Some("work".to_string()),
            started_ms: Some(0),
        };
        let mut task = mk_task(Status::Parked, false, 0);
        task.tags = vec!["home".to_string()];

        let score = score_task(1_000, &ctx, &task, Eligibility::Recommendation);
        assert_eq!(score.breakdown.batch_bonus, 0);

        // Any position in the tag list matches, not just the primary slot.
        task.tags = vec!["home".to_string(), "work".to_string()];
        let score = score_task(1_000, &ctx, &task, Eligibility::Recommendation);
        assert_eq!(score.breakdown.batch_bonus, 2);
    }

    #[test]
    fn done_tasks_are_sentinel_under_both_filters() {
        let ctx = BatchContext::default();
        let task = mk_task(Status::Active, true, 0);

        for eligibility in [Eligibility::Listing, Eligibility::Recommendation] {
            let score = score_task(10 * DAY_MS, &ctx, &task, eligibility);
            assert!(score.is_ineligible());
            assert_eq!(score.breakdown, ScoreBreakdown::default());
        }
    }

    #[test]
    fn blocked_and_archived_split_by_eligibility() {
        let ctx = BatchContext::default();
        for status in [Status::Blocked, Status::Archived] {
            let task = mk_task(status, false, 0);

            let listing = score_task(10 * DAY_MS, &ctx, &task, Eligibility::Listing);
            assert_eq!(listing.value, 9, "listing still scores {status:?}");

            let rec = score_task(10 * DAY_MS, &ctx, &task, Eligibility::Recommendation);
            assert!(rec.is_ineligible(), "{status:?} is never recommendable");
        }
    }
}
