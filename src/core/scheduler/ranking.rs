//! Ordering and selection of evaluated candidates

use crate::core::models::{CandidateSchedule, RankedSchedule, ScheduleEvaluation};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Limits applied when turning evaluated candidates into a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingPolicy {
    /// Most conflict-free schedules returned
    pub max_conflict_free: usize,
    /// Below this many results, conflicting schedules are added
    pub min_results: usize,
    /// Hard cap on the result length once conflicting schedules are added
    pub max_results: usize,
    /// Enumeration ceiling
    pub max_candidates: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            max_conflict_free: 4,
            min_results: 3,
            max_results: 6,
            max_candidates: 10_000,
        }
    }
}

impl RankingPolicy {
    /// Copy with every limit pulled into a usable range.
    ///
    /// `max_candidates`, `max_conflict_free` and `max_results` are at least 1,
    /// and `min_results` lies in `1..=max_results`, so a selection with at
    /// least one combination always yields at least one schedule.
    #[must_use]
    pub const fn validated(self) -> Self {
        const fn at_least_one(n: usize) -> usize {
            if n == 0 {
                1
            } else {
                n
            }
        }
        let max_results = at_least_one(self.max_results);
        let min_results = at_least_one(self.min_results);
        Self {
            max_conflict_free: at_least_one(self.max_conflict_free),
            min_results: if min_results > max_results {
                max_results
            } else {
                min_results
            },
            max_results,
            max_candidates: at_least_one(self.max_candidates),
        }
    }
}

/// Sort order: conflict-free first, then fewer time violations, then higher score
fn compare(a: &ScheduleEvaluation, b: &ScheduleEvaluation) -> Ordering {
    (!a.is_conflict_free())
        .cmp(&!b.is_conflict_free())
        .then(a.time_violations.cmp(&b.time_violations))
        .then(b.preference_score.total_cmp(&a.preference_score))
}

/// Sort evaluated candidates and keep the presentable subset.
///
/// The sort is stable, so equal candidates keep enumeration order. Up to
/// `max_conflict_free` conflict-free candidates are taken; if that leaves
/// fewer than `min_results`, conflicting candidates fill in until
/// `max_results`. Ranks start at 1.
#[must_use]
pub fn rank_and_select(
    mut evaluated: Vec<(CandidateSchedule, ScheduleEvaluation)>,
    policy: &RankingPolicy,
) -> Vec<RankedSchedule> {
    evaluated.sort_by(|(_, a), (_, b)| compare(a, b));

    let (conflict_free, conflicting): (Vec<_>, Vec<_>) = evaluated
        .into_iter()
        .partition(|(_, eval)| eval.is_conflict_free());

    let mut selected: Vec<_> = conflict_free
        .into_iter()
        .take(policy.max_conflict_free)
        .collect();
    if selected.len() < policy.min_results {
        let room = policy.max_results.saturating_sub(selected.len());
        selected.extend(conflicting.into_iter().take(room));
    }

    selected
        .into_iter()
        .enumerate()
        .map(|(idx, (schedule, evaluation))| RankedSchedule {
            rank: idx + 1,
            schedule,
            evaluation,
        })
        .collect()
}
