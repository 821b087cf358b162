//! Day and time overlap detection

use crate::core::models::{CandidateSchedule, Conflict, CourseOffering};

/// Whether two sections meet at the same time.
///
/// They must share at least one day and both must have a known start and
/// end. Intervals are half-open, so a class ending at 11:00 AM does not clash
/// with one starting at 11:00 AM.
#[must_use]
pub fn overlaps(a: &CourseOffering, b: &CourseOffering) -> bool {
    if !a.days.intersects(b.days) {
        return false;
    }
    match (a.interval(), b.interval()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => start_a < end_b && end_a > start_b,
        _ => false,
    }
}

/// Every conflicting pair of picks, in pick order (`i < j`)
#[must_use]
pub fn detect_conflicts(schedule: &CandidateSchedule) -> Vec<Conflict> {
    let picks = &schedule.picks;
    let mut conflicts = Vec::new();
    for (i, a) in picks.iter().enumerate() {
        for b in &picks[i + 1..] {
            if overlaps(a, b) {
                conflicts.push(Conflict {
                    course_a: a.course.clone(),
                    course_b: b.course.clone(),
                    window_a: a.window(),
                    window_b: b.window(),
                });
            }
        }
    }
    conflicts
}
