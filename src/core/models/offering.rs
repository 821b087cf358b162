//! Course section model

use super::days::{DaySet, Weekday};
use super::time::{optional_time, ClockTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instructor and section label used for a placeholder section
pub const PLACEHOLDER_LABEL: &str = "TBA";

/// One scheduled section of a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    /// Course identifier in `"<DEPT> <NUMBER>"` form (e.g., "CSEN 177")
    pub course: String,

    /// Section label (e.g., "01")
    pub section: String,

    /// Instructor name as listed in the catalog
    pub instructor: String,

    /// Meeting days
    pub days: DaySet,

    /// Start time, absent when the catalog lists none
    #[serde(rename = "startTime", with = "optional_time", default)]
    pub start: Option<ClockTime>,

    /// End time, absent when the catalog lists none
    #[serde(rename = "endTime", with = "optional_time", default)]
    pub end: Option<ClockTime>,
}

impl CourseOffering {
    /// Create a new section
    ///
    /// # Arguments
    /// * `course` - Course identifier
    /// * `section` - Section label
    /// * `instructor` - Instructor name
    /// * `days` - Meeting days
    /// * `start` - Start time, if scheduled
    /// * `end` - End time, if scheduled
    #[must_use]
    pub fn new(
        course: impl Into<String>,
        section: impl Into<String>,
        instructor: impl Into<String>,
        days: DaySet,
        start: Option<ClockTime>,
        end: Option<ClockTime>,
    ) -> Self {
        Self {
            course: course.into(),
            section: section.into(),
            instructor: instructor.into(),
            days,
            start,
            end,
        }
    }

    /// Stand-in section for a course with no known offerings.
    ///
    /// Meets MWF 8:00 AM to 9:05 AM with instructor and section "TBA", so the
    /// course still appears in every candidate schedule.
    #[must_use]
    pub fn placeholder(course: impl Into<String>) -> Self {
        Self::new(
            course,
            PLACEHOLDER_LABEL,
            PLACEHOLDER_LABEL,
            DaySet::from_days(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]),
            ClockTime::from_hm(8, 0),
            ClockTime::from_hm(9, 5),
        )
    }

    /// Whether this is a generated placeholder rather than catalog data
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.section == PLACEHOLDER_LABEL && self.instructor == PLACEHOLDER_LABEL
    }

    /// Start and end when both are known
    #[must_use]
    pub fn interval(&self) -> Option<(ClockTime, ClockTime)> {
        self.start.zip(self.end)
    }

    /// Human-readable time range (e.g., "9:15 AM-11:00 AM")
    #[must_use]
    pub fn time_range(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!("{start}-{end}"),
            (Some(start), None) => format!("{start}-TBA"),
            (None, Some(end)) => format!("TBA-{end}"),
            (None, None) => "TBA".to_string(),
        }
    }

    /// Days plus time range (e.g., "TTh 5:30 PM-7:10 PM")
    #[must_use]
    pub fn window(&self) -> String {
        format!("{} {}", self.days, self.time_range())
    }

    /// Whether the instructor name contains `needle`, ignoring case
    #[must_use]
    pub fn instructor_matches(&self, needle: &str) -> bool {
        self.instructor
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for CourseOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} ({})",
            self.course,
            self.section,
            self.window(),
            self.instructor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CourseOffering {
        CourseOffering::new(
            "CSEN 174",
            "01",
            "Nicholas Tran",
            DaySet::parse("MW").unwrap(),
            ClockTime::parse("9:15 AM"),
            ClockTime::parse("11:00 AM"),
        )
    }

    #[test]
    fn test_offering_creation() {
        let offering = sample();
        assert_eq!(offering.course, "CSEN 174");
        assert_eq!(offering.section, "01");
        assert!(offering.interval().is_some());
        assert!(!offering.is_placeholder());
    }

    #[test]
    fn test_window_format() {
        assert_eq!(sample().window(), "MW 9:15 AM-11:00 AM");
        let mut tba = sample();
        tba.end = None;
        assert_eq!(tba.time_range(), "9:15 AM-TBA");
        assert!(tba.interval().is_none());
    }

    #[test]
    fn test_placeholder() {
        let placeholder = CourseOffering::placeholder("CSEN 999");
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.course, "CSEN 999");
        assert_eq!(placeholder.window(), "MWF 8:00 AM-9:05 AM");
    }

    #[test]
    fn test_instructor_match_is_case_insensitive() {
        let offering = sample();
        assert!(offering.instructor_matches("tran"));
        assert!(offering.instructor_matches("NICHOLAS"));
        assert!(!offering.instructor_matches("Cui"));
    }

    #[test]
    fn test_serializes_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["course"], "CSEN 174");
        assert_eq!(json["days"], "MW");
        assert_eq!(json["startTime"], "9:15 AM");
        assert_eq!(json["endTime"], "11:00 AM");
        assert_eq!(json["instructor"], "Nicholas Tran");
    }
}
