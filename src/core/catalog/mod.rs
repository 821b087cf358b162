//! Course section catalog
//!
//! The generator only sees the [`SectionSource`] trait, so the built-in
//! reference table, a CSV export from the registrar, or a backend client can
//! be swapped without touching the ranking logic.

pub mod builtin;
pub mod csv_parser;

use crate::core::models::{CourseOffering, Preferences};
use std::collections::BTreeMap;

pub use csv_parser::{parse_catalog_csv, parse_catalog_str, CatalogError};

/// Lookup of known sections by course identifier
pub trait SectionSource {
    /// Sections offered for `course_id`, in catalog order.
    ///
    /// Matching is exact: `"CSEN 177"` does not match `"csen 177"` or `"CSEN177"`.
    /// An unknown course yields an empty list.
    fn sections(&self, course_id: &str) -> Vec<CourseOffering>;
}

/// In-memory section table keyed by course identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: BTreeMap<String, Vec<CourseOffering>>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// The compiled-in reference table
    #[must_use]
    pub fn builtin() -> Self {
        builtin::reference_catalog()
    }

    /// Add a section under its course.
    ///
    /// A section with the same label for the same course replaces the earlier one.
    pub fn add_section(&mut self, offering: CourseOffering) {
        let sections = self.courses.entry(offering.course.clone()).or_default();
        if let Some(existing) = sections
            .iter_mut()
            .find(|s| s.section == offering.section)
        {
            *existing = offering;
        } else {
            sections.push(offering);
        }
    }

    /// Merge another catalog into this one; its sections win on label clashes
    pub fn merge(&mut self, other: Self) {
        for offering in other.courses.into_values().flatten() {
            self.add_section(offering);
        }
    }

    /// Known course identifiers in sorted order
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Whether any section is known for `course_id`
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.get(course_id).is_some_and(|s| !s.is_empty())
    }

    /// Borrow the sections of a course
    #[must_use]
    pub fn get(&self, course_id: &str) -> Option<&[CourseOffering]> {
        self.courses.get(course_id).map(Vec::as_slice)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Total number of sections across all courses
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sections of `course_id` that satisfy every given preference.
    ///
    /// The instructor must contain the preferred substring (case-insensitive),
    /// the start must not be before `earliest_start` and the end must not be
    /// after `latest_end`. A section with an unknown time passes that bound.
    #[must_use]
    pub fn filter_sections(&self, course_id: &str, preferences: &Preferences) -> Vec<&CourseOffering> {
        self.get(course_id)
            .unwrap_or_default()
            .iter()
            .filter(|s| {
                preferences
                    .preferred_instructor
                    .as_deref()
                    .map_or(true, |name| s.instructor_matches(name))
            })
            .filter(|s| match (preferences.earliest_start, s.start) {
                (Some(bound), Some(start)) => start >= bound,
                _ => true,
            })
            .filter(|s| match (preferences.latest_end, s.end) {
                (Some(bound), Some(end)) => end <= bound,
                _ => true,
            })
            .collect()
    }
}

impl SectionSource for Catalog {
    fn sections(&self, course_id: &str) -> Vec<CourseOffering> {
        self.get(course_id).map(<[_]>::to_vec).unwrap_or_default()
    }
}

impl FromIterator<CourseOffering> for Catalog {
    fn from_iter<I: IntoIterator<Item = CourseOffering>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for offering in iter {
            catalog.add_section(offering);
        }
        catalog
    }
}
