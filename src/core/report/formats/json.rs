//! JSON report in the schedule service response shape

use crate::core::models::{Conflict, CourseOffering, RankedSchedule};
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

/// One schedule as returned to a service client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse<'a> {
    /// Picked sections in request order
    pub sections: &'a [CourseOffering],
    /// Conflicting pairs
    pub conflicts: &'a [Conflict],
    /// Preference score
    pub preference_score: f64,
    /// Preference notes
    pub issues: &'a [String],
    /// Number of time-bound violations
    pub time_violations: usize,
}

impl<'a> From<&'a RankedSchedule> for ScheduleResponse<'a> {
    fn from(ranked: &'a RankedSchedule) -> Self {
        Self {
            sections: &ranked.schedule.picks,
            conflicts: &ranked.evaluation.conflicts,
            preference_score: ranked.evaluation.preference_score,
            issues: &ranked.evaluation.issues,
            time_violations: ranked.evaluation.time_violations,
        }
    }
}

/// JSON reporter; renders the ranked list as a pretty-printed array
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let responses: Vec<ScheduleResponse> =
            ctx.schedules().iter().map(ScheduleResponse::from).collect();
        Ok(serde_json::to_string_pretty(&responses)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::test_support;
    use serde_json::Value;

    #[test]
    fn uses_camel_case_keys() {
        let (request, outcome) = test_support::sample();
        let json = JsonReporter::new()
            .render(&ReportContext::new(&request, &outcome))
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 6);

        let first = &list[0];
        assert!(first["preferenceScore"].is_number());
        assert_eq!(first["timeViolations"], 0);
        assert_eq!(first["conflicts"].as_array().unwrap().len(), 0);
        let section = &first["sections"][0];
        for key in ["course", "section", "instructor", "days", "startTime", "endTime"] {
            assert!(section.get(key).is_some(), "missing {key}");
        }

        let conflicting = list
            .iter()
            .find(|s| !s["conflicts"].as_array().unwrap().is_empty())
            .unwrap();
        let conflict = &conflicting["conflicts"][0];
        for key in ["courseA", "courseB", "windowA", "windowB"] {
            assert!(conflict.get(key).is_some(), "missing {key}");
        }
    }
}
