//! Generate command handler

use super::{exit_with_error, plan_schedules};
use crate::args::PreferenceArgs;
use logger::{info, verbose};
use schedulai::config::Config;
use schedulai::export::{default_export_path, export_schedule_csv};
use schedulai::models::GenerationOutcome;
use schedulai::report::{ReportContext, ReportFormat};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options of one `generate` invocation
pub struct GenerateOptions<'a> {
    /// Requested course identifiers
    pub courses: &'a [String],
    /// Preference flags
    pub preferences: &'a PreferenceArgs,
    /// Output format name
    pub format: &'a str,
    /// Rank of the schedule to export as CSV
    pub export: Option<usize>,
    /// File to write the rendered output to
    pub output: Option<&'a Path>,
}

/// Run the generate command, exiting with status 1 on failure.
pub fn run(options: &GenerateOptions, config: &Config) {
    if let Err(err) = generate(options, config) {
        exit_with_error("Schedule generation", &err);
    }
}

fn generate(options: &GenerateOptions, config: &Config) -> Result<(), String> {
    let format = ReportFormat::from_str(options.format)
        .map_err(|e| format!("✗ {e}. Use: text, markdown, html, or json"))?;

    let (request, outcome) = plan_schedules(options.courses, options.preferences, config)?;
    verbose!(
        "✓ Evaluated {} candidate schedule(s) for {}",
        outcome.total_candidates,
        request.courses().join(", ")
    );

    let ctx = ReportContext::new(&request, &outcome);
    let reporter = format.reporter();
    if let Some(path) = options.output {
        reporter
            .generate(&ctx, path)
            .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
        println!("✓ Schedules written: {}", path.display());
        info!("{format} output written to: {}", path.display());
    } else {
        let rendered = reporter
            .render(&ctx)
            .map_err(|e| format!("✗ Failed to render {format} output: {e}"))?;
        print!("{rendered}");
    }

    if let Some(rank) = options.export {
        let path = export_rank(&outcome, rank, Path::new(&config.paths.exports_dir))?;
        println!("✓ Exported schedule {rank} to {}", path.display());
    }

    Ok(())
}

/// Export the schedule at `rank` to `<exports_dir>/schedule_<rank>.csv`
fn export_rank(outcome: &GenerationOutcome, rank: usize, exports_dir: &Path) -> Result<PathBuf, String> {
    let ranked = outcome.get(rank).ok_or_else(|| {
        format!(
            "✗ No schedule at rank {rank} ({} available)",
            outcome.len()
        )
    })?;
    let path = default_export_path(exports_dir, rank);
    export_schedule_csv(&ranked.schedule, &path)
        .map_err(|e| format!("✗ Failed to export {}: {e}", path.display()))?;
    info!("Schedule {rank} exported to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedulai::catalog::Catalog;
    use schedulai::models::SelectionRequest;
    use schedulai::scheduler::ScheduleGenerator;

    #[test]
    fn test_export_rank_bounds() {
        let catalog = Catalog::builtin();
        let outcome = ScheduleGenerator::with_defaults(&catalog)
            .generate(&SelectionRequest::new(["CSEN 174"]));
        let dir = tempfile::tempdir().unwrap();

        let path = export_rank(&outcome, 2, dir.path()).unwrap();
        assert!(path.ends_with("schedule_2.csv"));
        assert!(path.exists());

        assert!(export_rank(&outcome, 0, dir.path()).is_err());
        let err = export_rank(&outcome, 3, dir.path()).unwrap_err();
        assert!(err.contains("2 available"));
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let config = Config::default();
        let preferences = PreferenceArgs::default();
        let courses = vec!["CSEN 174".to_string()];

        let empty = GenerateOptions {
            courses: &[],
            preferences: &preferences,
            format: "text",
            export: None,
            output: None,
        };
        assert!(generate(&empty, &config).is_err());

        let bad_format = GenerateOptions {
            courses: &courses,
            preferences: &preferences,
            format: "pdf",
            export: None,
            output: None,
        };
        let err = generate(&bad_format, &config).unwrap_err();
        assert!(err.starts_with('✗'));

        let too_many: Vec<String> = (0..7).map(|i| format!("CSEN {i}")).collect();
        let crowded = GenerateOptions {
            courses: &too_many,
            preferences: &preferences,
            format: "text",
            export: None,
            output: None,
        };
        assert!(generate(&crowded, &config).is_err());
    }
}
