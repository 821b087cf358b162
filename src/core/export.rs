//! Export a chosen schedule as CSV

use crate::core::models::time::optional_time::ABSENT;
use crate::core::models::{CandidateSchedule, ClockTime, CourseOffering};
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of an exported schedule
pub const EXPORT_HEADERS: [&str; 5] = ["Course", "Day", "Start Time", "End Time", "Instructor"];

/// Trait for writing a schedule to a file
pub trait ScheduleExporter {
    /// Write `schedule` to `output_path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn export(&self, schedule: &CandidateSchedule, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter, one row per section
pub struct CsvExporter;

impl ScheduleExporter for CsvExporter {
    fn export(&self, schedule: &CandidateSchedule, output_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(output_path)?;
        file.write_all(schedule_to_csv(schedule).as_bytes())?;
        Ok(())
    }
}

/// Default export path for the schedule at `rank`: `<dir>/schedule_<rank>.csv`
#[must_use]
pub fn default_export_path(dir: &Path, rank: usize) -> PathBuf {
    dir.join(format!("schedule_{rank}.csv"))
}

/// Convenience wrapper around [`CsvExporter`]
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_schedule_csv<P: AsRef<Path>>(
    schedule: &CandidateSchedule,
    output_path: P,
) -> Result<(), Box<dyn Error>> {
    CsvExporter.export(schedule, output_path.as_ref())
}

/// Render a schedule as CSV text
#[must_use]
pub fn schedule_to_csv(schedule: &CandidateSchedule) -> String {
    let mut out = EXPORT_HEADERS.join(",");
    out.push('\n');
    for pick in &schedule.picks {
        out.push_str(&csv_row(pick));
        out.push('\n');
    }
    out
}

fn csv_row(pick: &CourseOffering) -> String {
    let time = |t: Option<ClockTime>| {
        t.map_or_else(|| ABSENT.to_string(), |t| t.to_string())
    };
    [
        pick.course.clone(),
        pick.days.to_string(),
        time(pick.start),
        time(pick.end),
        pick.instructor.clone(),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field that contains a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
