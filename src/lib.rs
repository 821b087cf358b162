//! `SchedulAI` course schedule planner
//!
//! Builds every section combination for the courses a student wants this
//! term, flags day and time conflicts, scores each candidate against the
//! student's preferences, and returns a short ranked list.
//!
//! ```no_run
//! use schedulai::catalog::Catalog;
//! use schedulai::models::{Preferences, SelectionRequest};
//! use schedulai::scheduler::ScheduleGenerator;
//!
//! let catalog = Catalog::builtin();
//! let request = SelectionRequest::new(["CSEN 177", "CSEN 179"])
//!     .with_preferences(Preferences::default().with_earliest("10:00 AM"));
//! let outcome = ScheduleGenerator::with_defaults(&catalog).generate(&request);
//! for ranked in &outcome.schedules {
//!     println!("#{} score {}", ranked.rank, ranked.evaluation.preference_score);
//! }
//! ```

pub mod core;

pub use self::core::{catalog, config, export, get_version, models, report, scheduler};
