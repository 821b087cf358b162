//! Preference scoring of candidate schedules

use super::conflicts::detect_conflicts;
use crate::core::models::{CandidateSchedule, Preferences, ScheduleEvaluation};
use serde::{Deserialize, Serialize};

/// Point values used by [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Starting score of every candidate
    pub baseline: f64,
    /// Points lost per minute outside a time bound
    pub minute_penalty: f64,
    /// Cap on the penalty for a single time-bound violation
    pub violation_cap: f64,
    /// Flat penalty applied once when more than one time-bound violation occurs
    pub multi_violation_penalty: f64,
    /// Bonus per pick taught by the preferred instructor
    pub instructor_bonus: f64,
    /// Penalty per pick taught by someone else
    pub instructor_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            baseline: 100.0,
            minute_penalty: 0.5,
            violation_cap: 30.0,
            multi_violation_penalty: 20.0,
            instructor_bonus: 15.0,
            instructor_penalty: 5.0,
        }
    }
}

impl ScoringWeights {
    /// Penalty for missing a bound by `minutes`
    #[must_use]
    pub fn time_penalty(&self, minutes: u16) -> f64 {
        (f64::from(minutes) * self.minute_penalty).min(self.violation_cap)
    }
}

/// Detect conflicts and score a candidate against the preferences.
///
/// Issues are recorded in pick order: early start, then late end, then the
/// instructor match for each pick, followed by the multi-violation summary.
/// The score never drops below zero.
#[must_use]
pub fn evaluate(
    schedule: &CandidateSchedule,
    preferences: &Preferences,
    weights: &ScoringWeights,
) -> ScheduleEvaluation {
    let mut score = weights.baseline;
    let mut issues = Vec::new();
    let mut time_violations = 0usize;
    let instructor = preferences.preferred_instructor.as_deref();

    for pick in &schedule.picks {
        if let (Some(earliest), Some(start)) = (preferences.earliest_start, pick.start) {
            if start < earliest {
                let penalty = weights.time_penalty(earliest.minutes_between(start));
                score -= penalty;
                time_violations += 1;
                issues.push(format!(
                    "{} starts at {start}, before preferred earliest {earliest} (-{penalty})",
                    pick.course
                ));
            }
        }

        if let (Some(latest), Some(end)) = (preferences.latest_end, pick.end) {
            if end > latest {
                let penalty = weights.time_penalty(end.minutes_between(latest));
                score -= penalty;
                time_violations += 1;
                issues.push(format!(
                    "{} ends at {end}, after preferred latest {latest} (-{penalty})",
                    pick.course
                ));
            }
        }

        if let Some(name) = instructor {
            if pick.instructor_matches(name) {
                score += weights.instructor_bonus;
                issues.push(format!(
                    "{} section {} is taught by preferred instructor {} (+{})",
                    pick.course, pick.section, pick.instructor, weights.instructor_bonus
                ));
            } else {
                score -= weights.instructor_penalty;
            }
        }
    }

    if time_violations > 1 {
        score -= weights.multi_violation_penalty;
        issues.push(format!(
            "{time_violations} picks fall outside the preferred time window (-{})",
            weights.multi_violation_penalty
        ));
    }

    ScheduleEvaluation {
        conflicts: detect_conflicts(schedule),
        preference_score: score.max(0.0),
        issues,
        time_violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ClockTime, CourseOffering, DaySet};

    fn offering(course: &str, instructor: &str, start: &str, end: &str) -> CourseOffering {
        CourseOffering::new(
            course,
            "01",
            instructor,
            DaySet::parse("MW").unwrap(),
            ClockTime::parse(start),
            ClockTime::parse(end),
        )
    }

    fn single(pick: CourseOffering) -> CandidateSchedule {
        CandidateSchedule::new(vec![pick])
    }

    #[test]
    fn test_no_preferences_scores_baseline() {
        let eval = evaluate(
            &single(offering("CSEN 174", "Nicholas Tran", "9:15 AM", "11:00 AM")),
            &Preferences::default(),
            &ScoringWeights::default(),
        );
        assert!((eval.preference_score - 100.0).abs() < f64::EPSILON);
        assert!(eval.issues.is_empty());
        assert_eq!(eval.time_violations, 0);
    }

    #[test]
    fn test_early_start_penalty() {
        let prefs = Preferences::default().with_earliest("10:00 AM");
        let eval = evaluate(
            &single(offering("CSEN 174", "Nicholas Tran", "9:15 AM", "11:00 AM")),
            &prefs,
            &ScoringWeights::default(),
        );
        assert!((eval.preference_score - 77.5).abs() < 1e-9);
        assert_eq!(eval.time_violations, 1);
        assert_eq!(
            eval.issues,
            ["CSEN 174 starts at 9:15 AM, before preferred earliest 10:00 AM (-22.5)"]
        );
    }

    #[test]
    fn test_penalty_is_capped() {
        let prefs = Preferences::default().with_latest("3:00 PM");
        let eval = evaluate(
            &single(offering("CSEN 146", "Priya Raman", "5:30 PM", "7:10 PM")),
            &prefs,
            &ScoringWeights::default(),
        );
        assert!((eval.preference_score - 70.0).abs() < 1e-9);
        assert_eq!(
            eval.issues,
            ["CSEN 146 ends at 7:10 PM, after preferred latest 3:00 PM (-30)"]
        );
    }

    #[test]
    fn test_multiple_violations_add_flat_penalty() {
        let prefs = Preferences::default()
            .with_earliest("10:00 AM")
            .with_latest("10:30 AM");
        let eval = evaluate(
            &single(offering("CSEN 177", "Yan Cui", "9:15 AM", "11:00 AM")),
            &prefs,
            &ScoringWeights::default(),
        );
        // 100 - 22.5 - 15 - 20
        assert!((eval.preference_score - 42.5).abs() < 1e-9);
        assert_eq!(eval.time_violations, 2);
        assert_eq!(eval.issues.len(), 3);
        assert!(eval.issues[2].ends_with("(-20)"));
    }

    #[test]
    fn test_instructor_bonus_and_penalty() {
        let prefs = Preferences::default().with_instructor("yan cui");
        let schedule = CandidateSchedule::new(vec![
            offering("CSEN 177", "Yan Cui", "9:15 AM", "11:00 AM"),
            offering("CSEN 179", "Sofia Alvarez", "1:00 PM", "2:00 PM"),
        ]);
        let eval = evaluate(&schedule, &prefs, &ScoringWeights::default());
        assert!((eval.preference_score - 110.0).abs() < 1e-9);
        assert_eq!(
            eval.issues,
            ["CSEN 177 section 01 is taught by preferred instructor Yan Cui (+15)"]
        );
        assert_eq!(eval.time_violations, 0);
    }

    #[test]
    fn test_score_floor_at_zero() {
        let prefs = Preferences::default()
            .with_earliest("11:00 PM")
            .with_instructor("Nobody");
        let picks = (0..6)
            .map(|i| offering(&format!("C {i}"), "Staff", "8:00 AM", "9:00 AM"))
            .collect();
        let eval = evaluate(&CandidateSchedule::new(picks), &prefs, &ScoringWeights::default());
        assert_eq!(eval.time_violations, 6);
        assert!(eval.preference_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_times_are_not_violations() {
        let prefs = Preferences::default()
            .with_earliest("10:00 AM")
            .with_latest("11:00 AM");
        let eval = evaluate(
            &single(offering("CSEN 194", "Staff", "TBA", "TBA")),
            &prefs,
            &ScoringWeights::default(),
        );
        assert_eq!(eval.time_violations, 0);
        assert!((eval.preference_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            minute_penalty: 1.0,
            violation_cap: 10.0,
            ..ScoringWeights::default()
        };
        assert!((weights.time_penalty(5) - 5.0).abs() < f64::EPSILON);
        assert!((weights.time_penalty(45) - 10.0).abs() < f64::EPSILON);
    }
}
