//! Schedule generation input

use super::time::ClockTime;
use logger::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Upper bound on requested courses accepted by [`SelectionRequest::validate`] by default
pub const DEFAULT_MAX_COURSES: usize = 6;

/// Optional student preferences that shape the preference score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Substring of a preferred instructor's name (matched case-insensitively)
    pub preferred_instructor: Option<String>,
    /// No section should start before this time
    pub earliest_start: Option<ClockTime>,
    /// No section should end after this time
    pub latest_end: Option<ClockTime>,
}

impl Preferences {
    /// Whether no preference is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.preferred_instructor.is_none()
            && self.earliest_start.is_none()
            && self.latest_end.is_none()
    }

    /// Set the preferred instructor; blank input clears the preference
    #[must_use]
    pub fn with_instructor(mut self, name: &str) -> Self {
        let trimmed = name.trim();
        self.preferred_instructor = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Set the earliest start from catalog time text.
    ///
    /// Unparseable text is logged and treated as no preference.
    #[must_use]
    pub fn with_earliest(mut self, raw: &str) -> Self {
        self.earliest_start = parse_bound("earliest start", raw);
        self
    }

    /// Set the latest end from catalog time text.
    ///
    /// Unparseable text is logged and treated as no preference.
    #[must_use]
    pub fn with_latest(mut self, raw: &str) -> Self {
        self.latest_end = parse_bound("latest end", raw);
        self
    }
}

fn parse_bound(label: &str, raw: &str) -> Option<ClockTime> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = ClockTime::parse(raw);
    if parsed.is_none() {
        warn!("Ignoring {label} preference '{raw}': expected a time like \"9:00 AM\"");
    }
    parsed
}

/// Why a selection was refused before generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No courses were requested
    Empty,
    /// More courses were requested than allowed
    TooManyCourses {
        /// Number of courses requested
        requested: usize,
        /// Configured maximum
        max: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No courses selected"),
            Self::TooManyCourses { requested, max } => write!(
                f,
                "Too many courses selected ({requested}); at most {max} can be scheduled together"
            ),
        }
    }
}

impl Error for SelectionError {}

/// The courses a student wants scheduled this term, with preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    courses: Vec<String>,
    /// Optional preferences
    pub preferences: Preferences,
}

impl SelectionRequest {
    /// Create a request from course identifiers.
    ///
    /// Identifiers are trimmed; blanks and repeats are dropped, keeping the
    /// first occurrence so input order is preserved.
    #[must_use]
    pub fn new<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for course in courses {
            let id = course.as_ref().trim();
            if !id.is_empty() && !unique.iter().any(|c| c == id) {
                unique.push(id.to_string());
            }
        }
        Self {
            courses: unique,
            preferences: Preferences::default(),
        }
    }

    /// Attach preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Requested course identifiers in input order
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Whether no course was requested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Check the selection before handing it to the generator
    ///
    /// # Errors
    /// Returns [`SelectionError::Empty`] for an empty selection and
    /// [`SelectionError::TooManyCourses`] when more than `max_courses` are requested
    pub fn validate(&self, max_courses: usize) -> Result<(), SelectionError> {
        if self.courses.is_empty() {
            return Err(SelectionError::Empty);
        }
        if self.courses.len() > max_courses {
            return Err(SelectionError::TooManyCourses {
                requested: self.courses.len(),
                max: max_courses,
            });
        }
        Ok(())
    }
}

/// JSON request body accepted by a schedule service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Requested course identifiers
    pub courses: Vec<String>,
    /// Preferred instructor substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_instructor: Option<String>,
    /// Earliest acceptable start, as `"H:MM AM/PM"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_start: Option<String>,
    /// Latest acceptable end, as `"H:MM AM/PM"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_end: Option<String>,
}

impl From<ScheduleRequest> for SelectionRequest {
    fn from(request: ScheduleRequest) -> Self {
        let preferences = Preferences::default()
            .with_instructor(request.preferred_instructor.as_deref().unwrap_or(""))
            .with_earliest(request.earliest_start.as_deref().unwrap_or(""))
            .with_latest(request.latest_end.as_deref().unwrap_or(""));
        Self::new(request.courses).with_preferences(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dedups_and_keeps_order() {
        let request = SelectionRequest::new(["CSEN 179", " CSEN 177 ", "CSEN 179", ""]);
        assert_eq!(request.courses(), ["CSEN 179", "CSEN 177"]);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            SelectionRequest::new(Vec::<String>::new()).validate(6),
            Err(SelectionError::Empty)
        );
        let many = SelectionRequest::new((0..7).map(|n| format!("CSEN {n}")));
        assert_eq!(
            many.validate(6),
            Err(SelectionError::TooManyCourses {
                requested: 7,
                max: 6
            })
        );
        assert!(SelectionRequest::new(["CSEN 174"]).validate(6).is_ok());
    }

    #[test]
    fn test_unparseable_bounds_are_ignored() {
        let prefs = Preferences::default()
            .with_earliest("sometime")
            .with_latest("5:00 PM");
        assert!(prefs.earliest_start.is_none());
        assert_eq!(prefs.latest_end, ClockTime::parse("5:00 PM"));
    }

    #[test]
    fn test_blank_instructor_is_no_preference() {
        let prefs = Preferences::default().with_instructor("   ");
        assert!(prefs.is_empty());
        let prefs = Preferences::default().with_instructor(" Yan Cui ");
        assert_eq!(prefs.preferred_instructor.as_deref(), Some("Yan Cui"));
    }

    #[test]
    fn test_wire_request_conversion() {
        let wire: ScheduleRequest = serde_json::from_str(
            r#"{"courses":["CSEN 174","CSEN 174"],"earliestStart":"10:00 AM","preferredInstructor":""}"#,
        )
        .unwrap();
        let request = SelectionRequest::from(wire);
        assert_eq!(request.courses(), ["CSEN 174"]);
        assert_eq!(
            request.preferences.earliest_start,
            ClockTime::parse("10:00 AM")
        );
        assert!(request.preferences.preferred_instructor.is_none());
        assert!(request.preferences.latest_end.is_none());
    }
}
