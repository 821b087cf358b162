//! CLI command handlers for `SchedulAI`.
//!
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod report;

use crate::args::PreferenceArgs;
use logger::{error, info};
use schedulai::catalog::Catalog;
use schedulai::config::Config;
use schedulai::models::{GenerationOutcome, SelectionRequest, DEFAULT_MAX_COURSES};
use schedulai::scheduler::ScheduleGenerator;

/// Report a failed command and exit with status 1
///
/// The log file is closed first so the final error line reaches it.
fn exit_with_error(what: &str, err: &str) -> ! {
    error!("{what} failed: {err}");
    eprintln!("{err}");
    logger::close_file_logging();
    std::process::exit(1)
}

/// Load the catalog described by the configuration
fn load_catalog(config: &Config) -> Result<Catalog, String> {
    let catalog = config.load_catalog().map_err(|e| {
        error!("Catalog load failed for '{}': {e}", config.catalog.file);
        format!("✗ {e}")
    })?;
    info!(
        "Catalog ready: {} courses, {} sections",
        catalog.len(),
        catalog.section_count()
    );
    Ok(catalog)
}

/// Validate the selection and run the schedule generator
fn plan_schedules(
    courses: &[String],
    preferences: &PreferenceArgs,
    config: &Config,
) -> Result<(SelectionRequest, GenerationOutcome), String> {
    let request =
        SelectionRequest::new(courses).with_preferences(preferences.to_preferences());
    request
        .validate(DEFAULT_MAX_COURSES)
        .map_err(|e| format!("✗ {e}"))?;

    let catalog = load_catalog(config)?;
    let generator = ScheduleGenerator::new(&catalog, config.generator_config());
    let outcome = generator.generate(&request);
    Ok((request, outcome))
}
