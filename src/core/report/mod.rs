//! Report generation for generated schedules
//!
//! Renders a [`GenerationOutcome`] as plain text for the terminal, Markdown,
//! a standalone HTML page, or the JSON response shape used by a schedule
//! service.

pub mod formats;

use crate::core::models::{GenerationOutcome, Preferences, RankedSchedule, SelectionRequest};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// The request the schedules were generated for
    pub request: &'a SelectionRequest,
    /// Generated schedules and diagnostics
    pub outcome: &'a GenerationOutcome,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(request: &'a SelectionRequest, outcome: &'a GenerationOutcome) -> Self {
        Self { request, outcome }
    }

    /// Requested courses joined with commas
    #[must_use]
    pub fn course_list(&self) -> String {
        self.request.courses().join(", ")
    }

    /// Preferences as readable lines, or `["None"]`
    #[must_use]
    pub fn preference_lines(&self) -> Vec<String> {
        describe_preferences(&self.request.preferences)
    }

    /// Ranked schedules, best first
    #[must_use]
    pub fn schedules(&self) -> &'a [RankedSchedule] {
        &self.outcome.schedules
    }

    /// One-line summary of the outcome
    #[must_use]
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "{} schedule(s) from {} candidate(s), {} conflict-free",
            self.outcome.len(),
            self.outcome.total_candidates,
            self.outcome.conflict_free_count()
        );
        if self.outcome.truncated {
            line.push_str(" (enumeration truncated)");
        }
        line
    }

    /// Notice for courses shown with placeholder sections, if any
    #[must_use]
    pub fn placeholder_notice(&self) -> Option<String> {
        if self.outcome.placeholder_courses.is_empty() {
            return None;
        }
        Some(format!(
            "No sections known for {}; shown as TBA",
            self.outcome.placeholder_courses.join(", ")
        ))
    }
}

fn describe_preferences(preferences: &Preferences) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(name) = &preferences.preferred_instructor {
        lines.push(format!("Preferred instructor: {name}"));
    }
    if let Some(earliest) = preferences.earliest_start {
        lines.push(format!("Earliest start: {earliest}"));
    }
    if let Some(latest) = preferences.latest_end {
        lines.push(format!("Latest end: {latest}"));
    }
    if lines.is_empty() {
        lines.push("None".to_string());
    }
    lines
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
