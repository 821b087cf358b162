//! Report command handler
//!
//! Writes the ranked schedules for a selection to a Markdown, HTML, or JSON
//! file in the reports directory.

use super::{exit_with_error, plan_schedules};
use crate::args::PreferenceArgs;
use logger::info;
use schedulai::config::Config;
use schedulai::report::{ReportContext, ReportFormat};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `courses` - Requested course identifiers
/// * `preferences` - Preference flags
/// * `format_str` - Report format (markdown, html, json)
/// * `output_file` - Optional output path
/// * `config` - Configuration containing the default reports directory
///
/// Exits with status 1 when the report cannot be produced.
pub fn run(
    courses: &[String],
    preferences: &PreferenceArgs,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = generate_report(courses, preferences, format_str, output_file, config) {
        exit_with_error("Report generation", &err);
    }
}

/// File name for a report on `courses`, e.g. `schedules_csen177_csen179.html`
fn report_file_name(courses: &[String], format: ReportFormat) -> String {
    let slug = courses
        .iter()
        .map(|c| {
            c.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("schedules_{slug}.{}", format.extension())
}

fn generate_report(
    courses: &[String],
    preferences: &PreferenceArgs,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .ok()
        .filter(|f| *f != ReportFormat::Text)
        .ok_or_else(|| format!("✗ Unknown report format: {format_str}. Use: markdown, html, or json"))?;

    let (request, outcome) = plan_schedules(courses, preferences, config)?;

    let output_path: PathBuf = output_file.map_or_else(
        || Path::new(&config.paths.reports_dir).join(report_file_name(request.courses(), format)),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(&request, &outcome);
    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    println!("\n=== Summary ===");
    println!("Courses: {}", ctx.course_list());
    println!("{}", ctx.summary_line());
    if let Some(notice) = ctx.placeholder_notice() {
        println!("⚠️  {notice}");
    }

    Ok(())
}
