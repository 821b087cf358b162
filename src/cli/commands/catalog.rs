//! Catalog command handler

use super::{exit_with_error, load_catalog};
use crate::args::PreferenceArgs;
use schedulai::catalog::Catalog;
use schedulai::config::Config;

/// Run the catalog command.
///
/// Without a course, lists every known course with its section count. With
/// one, lists its sections that satisfy the preference flags.
pub fn run(course: Option<&str>, preferences: &PreferenceArgs, config: &Config) {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(err) => exit_with_error("Catalog listing", &err),
    };

    match course {
        None => print!("{}", list_courses(&catalog)),
        Some(course) => match list_sections(&catalog, course.trim(), preferences) {
            Ok(listing) => print!("{listing}"),
            Err(err) => exit_with_error("Catalog listing", &err),
        },
    }
}

fn list_courses(catalog: &Catalog) -> String {
    let mut out = format!(
        "\n=== Catalog ({} courses, {} sections) ===\n\n",
        catalog.len(),
        catalog.section_count()
    );
    for id in catalog.course_ids() {
        let count = catalog.get(id).map_or(0, <[_]>::len);
        out.push_str(&format!("  {id:<12} {count} section(s)\n"));
    }
    out
}

fn list_sections(catalog: &Catalog, course: &str, preferences: &PreferenceArgs) -> Result<String, String> {
    if !catalog.contains(course) {
        return Err(format!("✗ Unknown course: '{course}'"));
    }

    let prefs = preferences.to_preferences();
    let sections = catalog.filter_sections(course, &prefs);
    if sections.is_empty() {
        return Ok(format!("No sections of {course} match the given preferences\n"));
    }

    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("  {section}\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_courses() {
        let listing = list_courses(&Catalog::builtin());
        assert!(listing.contains("CSEN 179     3 section(s)"));
    }

    #[test]
    fn test_list_sections_filters() {
        let catalog = Catalog::builtin();
        let prefs = PreferenceArgs {
            earliest: Some("10:00 AM".to_string()),
            ..PreferenceArgs::default()
        };
        let listing = list_sections(&catalog, "CSEN 174", &prefs).unwrap();
        assert!(listing.contains("CSEN 174-02"));
        assert!(!listing.contains("CSEN 174-01"));

        assert!(list_sections(&catalog, "CSEN 999", &prefs).is_err());
    }
}
