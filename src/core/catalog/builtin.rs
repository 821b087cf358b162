//! Compiled-in section reference table
//!
//! Fall term Computer Science and Engineering offerings used when no catalog
//! file is configured. Rows are `(course, section, instructor, days, start, end)`.

use super::Catalog;
use crate::core::models::{ClockTime, CourseOffering, DaySet};
use logger::warn;

type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const REFERENCE_SECTIONS: &[Row] = &[
    ("CSEN 122", "01", "Helen Park", "MWF", "8:00 AM", "9:05 AM"),
    ("CSEN 122", "02", "Helen Park", "TTh", "3:50 PM", "5:30 PM"),
    ("CSEN 140", "01", "Arjun Mehta", "MW", "3:50 PM", "5:30 PM"),
    ("CSEN 146", "01", "Priya Raman", "TTh", "5:30 PM", "7:10 PM"),
    ("CSEN 146", "02", "Priya Raman", "MW", "11:45 AM", "1:25 PM"),
    ("CSEN 171", "01", "Robert Klein", "TTh", "11:45 AM", "1:25 PM"),
    ("CSEN 171", "02", "Grace Liu", "MWF", "1:00 PM", "2:05 PM"),
    ("CSEN 174", "01", "Nicholas Tran", "MW", "9:15 AM", "11:00 AM"),
    ("CSEN 174", "02", "Laura Whitfield", "TTh", "1:00 PM", "2:40 PM"),
    ("CSEN 176", "01", "Omar Haddad", "TTh", "5:30 PM", "7:10 PM"),
    ("CSEN 176", "02", "Omar Haddad", "MW", "2:00 PM", "3:40 PM"),
    ("CSEN 177", "01", "Yan Cui", "MW", "9:15 AM", "11:00 AM"),
    ("CSEN 177", "02", "Daniel Okafor", "TTh", "9:15 AM", "11:00 AM"),
    ("CSEN 179", "01", "Sofia Alvarez", "MW", "10:20 AM", "12:00 PM"),
    ("CSEN 179", "02", "Sofia Alvarez", "TTh", "10:20 AM", "12:00 PM"),
    ("CSEN 179", "03", "Marcus Lindqvist", "MTWTh", "10:00 AM", "11:00 AM"),
    ("CSEN 194", "01", "Staff", "F", "2:15 PM", "5:00 PM"),
    ("MATH 53", "01", "Elena Rossi", "MWF", "11:45 AM", "12:50 PM"),
    ("MATH 53", "02", "Elena Rossi", "MWF", "2:15 PM", "3:20 PM"),
];

/// Build the reference catalog
#[must_use]
pub fn reference_catalog() -> Catalog {
    REFERENCE_SECTIONS
        .iter()
        .filter_map(|&(course, section, instructor, days, start, end)| {
            let days = DaySet::parse(days)
                .map_err(|e| warn!("Skipping built-in section {course}-{section}: {e}"))
                .ok()?;
            Some(CourseOffering::new(
                course,
                section,
                instructor,
                days,
                ClockTime::parse(start),
                ClockTime::parse(end),
            ))
        })
        .collect()
}
