//! Schedule generation
//!
//! [`ScheduleGenerator`] runs the full pipeline for one request:
//! 1. Look up sections for every requested course, substituting a placeholder
//!    section for courses the source does not know
//! 2. Enumerate every combination of one section per course
//! 3. Detect conflicts and score each candidate against the preferences
//! 4. Sort and keep a bounded, presentable subset
//!
//! Generation never fails. It reads only the borrowed section source and
//! its own locals, so one generator can serve concurrent callers.

pub mod conflicts;
pub mod enumerate;
pub mod ranking;
pub mod scoring;

use crate::core::catalog::SectionSource;
use crate::core::models::{CourseOffering, GenerationOutcome, SelectionRequest};
use logger::{debug, warn};

pub use conflicts::{detect_conflicts, overlaps};
pub use enumerate::{enumerate, Enumeration};
pub use ranking::{rank_and_select, RankingPolicy};
pub use scoring::{evaluate, ScoringWeights};

/// Tunable numbers for a generator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Preference scoring weights
    pub weights: ScoringWeights,
    /// Selection limits and enumeration ceiling
    pub ranking: RankingPolicy,
}

/// Builds ranked schedules from any section source
pub struct ScheduleGenerator<'a, S: SectionSource + ?Sized> {
    source: &'a S,
    config: GeneratorConfig,
}

impl<'a, S: SectionSource + ?Sized> ScheduleGenerator<'a, S> {
    /// Create a generator over `source`
    ///
    /// The ranking policy is passed through [`RankingPolicy::validated`].
    #[must_use]
    pub const fn new(source: &'a S, config: GeneratorConfig) -> Self {
        let config = GeneratorConfig {
            weights: config.weights,
            ranking: config.ranking.validated(),
        };
        Self { source, config }
    }

    /// Create a generator with the default weights and policy
    #[must_use]
    pub fn with_defaults(source: &'a S) -> Self {
        Self::new(source, GeneratorConfig::default())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate ranked schedules for a request.
    ///
    /// Every returned schedule has one pick per requested course, in request
    /// order. An empty request yields an empty outcome.
    #[must_use]
    pub fn generate(&self, request: &SelectionRequest) -> GenerationOutcome {
        if request.is_empty() {
            debug!("Empty selection, nothing to schedule");
            return GenerationOutcome::default();
        }

        let mut placeholder_courses = Vec::new();
        let pools: Vec<Vec<CourseOffering>> = request
            .courses()
            .iter()
            .map(|course| {
                let sections = self.source.sections(course);
                if sections.is_empty() {
                    warn!("No sections known for {course}; using a TBA placeholder");
                    placeholder_courses.push(course.clone());
                    vec![CourseOffering::placeholder(course.as_str())]
                } else {
                    debug!("{course}: {} section(s)", sections.len());
                    sections
                }
            })
            .collect();

        let limit = self.config.ranking.max_candidates;
        let Enumeration {
            candidates,
            truncated,
        } = enumerate(&pools, limit);
        if truncated {
            warn!(
                "Section combinations exceed {limit}; only the first {limit} were considered"
            );
        }

        let total_candidates = candidates.len();
        let evaluated = candidates
            .into_iter()
            .map(|candidate| {
                let evaluation =
                    evaluate(&candidate, &request.preferences, &self.config.weights);
                (candidate, evaluation)
            })
            .collect();
        let schedules = rank_and_select(evaluated, &self.config.ranking);

        debug!(
            "Evaluated {total_candidates} candidate(s), returning {}",
            schedules.len()
        );

        GenerationOutcome {
            schedules,
            total_candidates,
            truncated,
            placeholder_courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{ClockTime, DaySet};

    #[test]
    fn test_empty_request() {
        let catalog = Catalog::builtin();
        let generator = ScheduleGenerator::with_defaults(&catalog);
        let outcome = generator.generate(&SelectionRequest::default());
        assert!(outcome.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_unknown_course_gets_placeholder() {
        let catalog = Catalog::builtin();
        let generator = ScheduleGenerator::with_defaults(&catalog);
        let outcome = generator.generate(&SelectionRequest::new(["CSEN 999"]));
        assert_eq!(outcome.placeholder_courses, ["CSEN 999"]);
        assert_eq!(outcome.len(), 1);
        let pick = &outcome.schedules[0].schedule.picks[0];
        assert!(pick.is_placeholder());
        assert_eq!(pick.course, "CSEN 999");
    }

    #[test]
    fn test_truncation_is_reported() {
        let catalog: Catalog = ["A", "B", "C"]
            .iter()
            .flat_map(|course| {
                (1..=3).map(move |n| {
                    CourseOffering::new(
                        *course,
                        format!("0{n}"),
                        "Staff",
                        DaySet::parse("F").unwrap(),
                        ClockTime::from_hm(8 + 2 * n, 0),
                        ClockTime::from_hm(9 + 2 * n, 0),
                    )
                })
            })
            .collect();
        let config = GeneratorConfig {
            ranking: RankingPolicy {
                max_candidates: 5,
                ..RankingPolicy::default()
            },
            ..GeneratorConfig::default()
        };
        let outcome = ScheduleGenerator::new(&catalog, config)
            .generate(&SelectionRequest::new(["A", "B", "C"]));
        assert!(outcome.truncated);
        assert_eq!(outcome.total_candidates, 5);
        assert!(!outcome.is_empty());
    }

    #[test]
    fn test_works_through_trait_object() {
        let catalog = Catalog::builtin();
        let source: &dyn SectionSource = &catalog;
        let outcome = ScheduleGenerator::with_defaults(source)
            .generate(&SelectionRequest::new(["CSEN 174"]));
        assert_eq!(outcome.len(), 2);
    }
}
