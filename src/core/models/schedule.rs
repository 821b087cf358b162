//! Candidate schedules and their evaluations

use super::offering::CourseOffering;
use serde::Serialize;

/// One full assignment of a section to every requested course, in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateSchedule {
    /// Chosen sections, one per requested course
    pub picks: Vec<CourseOffering>,
}

impl CandidateSchedule {
    /// Wrap a list of picks
    #[must_use]
    pub const fn new(picks: Vec<CourseOffering>) -> Self {
        Self { picks }
    }

    /// Number of picks
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether the schedule has no picks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Course identifiers in pick order
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.picks.iter().map(|p| p.course.as_str())
    }

    /// Pick for a given course, if present
    #[must_use]
    pub fn pick_for(&self, course: &str) -> Option<&CourseOffering> {
        self.picks.iter().find(|p| p.course == course)
    }
}

/// A day-and-time overlap between two picks of the same candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// First course (earlier in request order)
    pub course_a: String,
    /// Second course
    pub course_b: String,
    /// Meeting window of the first course (e.g., "TTh 5:30 PM-7:10 PM")
    pub window_a: String,
    /// Meeting window of the second course
    pub window_b: String,
}

impl Conflict {
    /// Whether this conflict names `course` on either side
    #[must_use]
    pub fn involves(&self, course: &str) -> bool {
        self.course_a == course || self.course_b == course
    }
}

/// Conflicts, preference score and annotations computed for one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvaluation {
    /// Every conflicting pair of picks
    pub conflicts: Vec<Conflict>,
    /// Heuristic score, higher is better, never below zero
    pub preference_score: f64,
    /// Human-readable preference violations and satisfactions
    pub issues: Vec<String>,
    /// Number of early-start and late-end violations
    pub time_violations: usize,
}

impl ScheduleEvaluation {
    /// Whether the candidate has no conflicts
    #[must_use]
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// A candidate schedule in its final ranked position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchedule {
    /// 1-based position in the result list
    pub rank: usize,
    /// The section assignment
    pub schedule: CandidateSchedule,
    /// Its evaluation
    pub evaluation: ScheduleEvaluation,
}

/// Result of one generation call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationOutcome {
    /// Ranked schedules, best first
    pub schedules: Vec<RankedSchedule>,
    /// Number of candidates that were enumerated and evaluated
    pub total_candidates: usize,
    /// Whether enumeration stopped at the configured ceiling
    pub truncated: bool,
    /// Courses that had no known sections and were given a placeholder
    pub placeholder_courses: Vec<String>,
}

impl GenerationOutcome {
    /// Whether any schedule was produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Number of ranked schedules
    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Number of ranked schedules without conflicts
    #[must_use]
    pub fn conflict_free_count(&self) -> usize {
        self.schedules
            .iter()
            .filter(|s| s.evaluation.is_conflict_free())
            .count()
    }

    /// Schedule at a 1-based rank
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&RankedSchedule> {
        rank.checked_sub(1).and_then(|idx| self.schedules.get(idx))
    }
}
