//! HTML report generator backed by an `askama` template

use crate::core::models::RankedSchedule;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Values bound into `templates/schedules.html`
#[derive(Template)]
#[template(path = "schedules.html")]
struct SchedulesPage<'a> {
    courses: String,
    preferences: String,
    summary: String,
    notice: String,
    schedules: &'a [RankedSchedule],
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = SchedulesPage {
            courses: ctx.course_list(),
            preferences: ctx.preference_lines().join("; "),
            summary: ctx.summary_line(),
            notice: ctx.placeholder_notice().unwrap_or_default(),
            schedules: ctx.schedules(),
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{GenerationOutcome, SelectionRequest};
    use crate::core::report::test_support;

    #[test]
    fn renders_schedules() {
        let (request, outcome) = test_support::sample();
        let html = HtmlReporter::new()
            .render(&ReportContext::new(&request, &outcome))
            .unwrap();
        assert!(html.contains("<title>Schedule Options: CSEN 177, CSEN 179</title>"));
        assert!(html.contains("Schedule 6"));
        assert!(html.contains("Yan Cui"));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn escapes_catalog_text() {
        let request = SelectionRequest::new(["<script>"]);
        let outcome = GenerationOutcome {
            placeholder_courses: vec!["<script>".to_string()],
            ..GenerationOutcome::default()
        };
        let html = HtmlReporter::new()
            .render(&ReportContext::new(&request, &outcome))
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
