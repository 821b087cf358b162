//! Markdown report generator
//!
//! One overview table plus a section table per ranked schedule. Renders well
//! in GitHub, GitLab, and VS Code.

use crate::core::models::RankedSchedule;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/schedules.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{courses}}", &ctx.course_list());
        output = output.replace("{{preferences}}", &ctx.preference_lines().join("; "));
        output = output.replace("{{summary}}", &ctx.summary_line());

        let notice = ctx
            .placeholder_notice()
            .map_or_else(String::new, |n| format!("\n> ⚠️ {n}\n"));
        output = output.replace("{{placeholder_notice}}", &notice);

        output = output.replace("{{overview_rows}}", &Self::generate_overview_rows(ctx));

        let sections: String = ctx
            .schedules()
            .iter()
            .map(Self::generate_schedule_section)
            .collect();
        output = output.replace("{{schedule_sections}}", &sections);

        output
    }

    fn generate_overview_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();
        for ranked in ctx.schedules() {
            let eval = &ranked.evaluation;
            let _ = writeln!(
                rows,
                "| {} | {} | {} | {} |",
                ranked.rank,
                eval.preference_score,
                eval.conflicts.len(),
                eval.time_violations
            );
        }
        rows
    }

    /// Section table plus conflicts and notes for one schedule
    fn generate_schedule_section(ranked: &RankedSchedule) -> String {
        let mut section = String::new();
        let eval = &ranked.evaluation;
        let badge = if eval.is_conflict_free() {
            "✅ conflict-free"
        } else {
            "❌ has conflicts"
        };

        let _ = writeln!(section, "\n## Schedule {} ({badge})\n", ranked.rank);
        section.push_str("| Course | Section | Days | Time | Instructor |\n");
        section.push_str("|---|---|---|---|---|\n");
        for pick in &ranked.schedule.picks {
            let _ = writeln!(
                section,
                "| {} | {} | {} | {} | {} |",
                pick.course,
                pick.section,
                pick.days,
                pick.time_range(),
                pick.instructor
            );
        }

        if !eval.conflicts.is_empty() {
            section.push_str("\n**Conflicts:**\n\n");
            for conflict in &eval.conflicts {
                let _ = writeln!(
                    section,
                    "- {} ({}) overlaps {} ({})",
                    conflict.course_a, conflict.window_a, conflict.course_b, conflict.window_b
                );
            }
        }
        if !eval.issues.is_empty() {
            section.push_str("\n**Notes:**\n\n");
            for issue in &eval.issues {
                let _ = writeln!(section, "- {issue}");
            }
        }
        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
