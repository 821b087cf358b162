//! CSV parser for registrar section exports

use super::Catalog;
use crate::core::models::{ClockTime, CourseOffering, DaySet};
use logger::{debug, info, warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Instructor recorded when the export leaves the column blank
const DEFAULT_INSTRUCTOR: &str = "Staff";

/// Errors raised while loading a catalog file
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file has no header row
    Empty,
    /// A required column is missing from the header
    MissingColumn(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read catalog: {e}"),
            Self::Empty => write!(f, "Catalog file is empty"),
            Self::MissingColumn(name) => write!(f, "Catalog header is missing the '{name}' column"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Column positions resolved from the header row
struct Columns {
    course: Option<usize>,
    subject: Option<usize>,
    number: Option<usize>,
    section: Option<usize>,
    instructor: Option<usize>,
    days: usize,
    start: usize,
    end: usize,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self, CatalogError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };

        let columns = Self {
            course: find(&["Course"]),
            subject: find(&["Subject"]),
            number: find(&["Course Number", "Number", "Catalog Number"]),
            section: find(&["Section"]),
            instructor: find(&["Instructor"]),
            days: find(&["Days", "Day"]).ok_or(CatalogError::MissingColumn("Days"))?,
            start: find(&["Begin Time", "Start Time"])
                .ok_or(CatalogError::MissingColumn("Begin Time"))?,
            end: find(&["End Time"]).ok_or(CatalogError::MissingColumn("End Time"))?,
        };

        if columns.course.is_none() && (columns.subject.is_none() || columns.number.is_none()) {
            return Err(CatalogError::MissingColumn("Subject"));
        }
        Ok(columns)
    }

    /// Course identifier as `"<DEPT> <NUMBER>"`
    fn course_id(&self, fields: &[String]) -> Option<String> {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        match (field(self.subject), field(self.number)) {
            (Some(subject), Some(number)) => Some(format!("{subject} {number}")),
            _ => field(self.course).map(|c| c.split_whitespace().collect::<Vec<_>>().join(" ")),
        }
    }
}

/// Load a catalog from a CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or its header lacks required columns
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog_str(&content)?;
    info!(
        "Loaded {} sections for {} courses from {}",
        catalog.section_count(),
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse catalog CSV text.
///
/// Rows without a course identifier or with unreadable days are skipped with
/// a warning; unreadable times are kept as unknown.
///
/// # Errors
/// Returns an error if the text is empty or its header lacks required columns
pub fn parse_catalog_str(content: &str) -> Result<Catalog, CatalogError> {
    let mut records = csv_records(content)
        .into_iter()
        .filter(|(_, record)| !record.trim().is_empty());

    let (_, header_line) = records.next().ok_or(CatalogError::Empty)?;
    let headers = parse_csv_line(header_line.trim_start_matches('\u{feff}'));
    let columns = Columns::resolve(&headers)?;

    let mut catalog = Catalog::new();
    for (line_no, record) in records {
        let fields = parse_csv_line(&record);

        let Some(course) = columns.course_id(&fields) else {
            warn!("Catalog line {line_no}: no course identifier, skipping");
            continue;
        };

        let get = |i: usize| fields.get(i).map_or("", |s| s.trim());
        let days = match DaySet::parse(get(columns.days)) {
            Ok(days) => days,
            Err(e) => {
                warn!("Catalog line {line_no} ({course}): {e}, skipping");
                continue;
            }
        };

        let section = columns
            .section
            .map(get)
            .filter(|s| !s.is_empty())
            .map_or_else(|| format!("{:02}", catalog.get(&course).map_or(0, <[_]>::len) + 1), str::to_string);
        let instructor = columns
            .instructor
            .map(get)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_INSTRUCTOR);

        let start = ClockTime::parse(get(columns.start));
        let end = ClockTime::parse(get(columns.end));
        if start.is_none() || end.is_none() {
            debug!("Catalog line {line_no} ({course}-{section}): time to be announced");
        }

        catalog.add_section(CourseOffering::new(
            course, section, instructor, days, start, end,
        ));
    }

    Ok(catalog)
}

/// Group physical lines into CSV records with their 1-based starting line.
///
/// A line break inside a double-quoted field continues the record.
fn csv_records(content: &str) -> Vec<(usize, String)> {
    let mut records = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, line) in content.lines().enumerate() {
        let (start, record) = match pending.take() {
            Some((start, mut record)) => {
                record.push('\n');
                record.push_str(line);
                (start, record)
            }
            None => (idx + 1, line.to_string()),
        };
        if record.matches('"').count() % 2 == 1 {
            pending = Some((start, record));
        } else {
            records.push((start, record));
        }
    }
    if let Some(unterminated) = pending {
        warn!("Catalog line {}: unterminated quoted field", unterminated.0);
        records.push(unterminated);
    }
    records
}

/// Split a CSV record into trimmed fields, honoring double-quoted fields
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
