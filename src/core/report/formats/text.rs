//! Plain-text report for terminal output

use crate::core::models::RankedSchedule;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_schedule(out: &mut String, ranked: &RankedSchedule) {
        let eval = &ranked.evaluation;
        let status = if eval.is_conflict_free() {
            "conflict-free".to_string()
        } else {
            format!("{} conflict(s)", eval.conflicts.len())
        };
        let _ = writeln!(
            out,
            "#{}  score {}  {status}",
            ranked.rank, eval.preference_score
        );

        for pick in &ranked.schedule.picks {
            let _ = writeln!(
                out,
                "    {:<12} {:<22} {}",
                format!("{}-{}", pick.course, pick.section),
                pick.window(),
                pick.instructor
            );
        }
        for conflict in &eval.conflicts {
            let _ = writeln!(
                out,
                "    ✗ {} ({}) overlaps {} ({})",
                conflict.course_a, conflict.window_a, conflict.course_b, conflict.window_b
            );
        }
        for issue in &eval.issues {
            let _ = writeln!(out, "    • {issue}");
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(out, "Schedules for {}", ctx.course_list());
        let _ = writeln!(out, "Preferences: {}", ctx.preference_lines().join("; "));
        let _ = writeln!(out, "{}", ctx.summary_line());
        if let Some(notice) = ctx.placeholder_notice() {
            let _ = writeln!(out, "Note: {notice}");
        }

        if ctx.schedules().is_empty() {
            out.push_str("\nNo schedules generated.\n");
        }
        for ranked in ctx.schedules() {
            out.push('\n');
            Self::write_schedule(&mut out, ranked);
        }
        Ok(out)
    }
}
