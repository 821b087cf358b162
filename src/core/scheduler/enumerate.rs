//! Cartesian product of per-course section pools

use crate::core::models::{CandidateSchedule, CourseOffering};

/// Candidates produced by [`enumerate`]
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Candidates in enumeration order
    pub candidates: Vec<CandidateSchedule>,
    /// Whether the full product was larger than the limit
    pub truncated: bool,
}

/// Number of combinations in the full product, saturating at `usize::MAX`
#[must_use]
pub fn product_size(pools: &[Vec<CourseOffering>]) -> usize {
    if pools.is_empty() {
        return 0;
    }
    pools
        .iter()
        .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()))
        .unwrap_or(usize::MAX)
}

/// Build every combination of one section per pool, stopping after `limit`.
///
/// Picks keep pool order. The first pool varies slowest, so for pools
/// `[a1, a2]` and `[b1, b2]` the order is `a1b1, a1b2, a2b1, a2b2`. An empty
/// pool list or any empty pool yields no candidates.
#[must_use]
pub fn enumerate(pools: &[Vec<CourseOffering>], limit: usize) -> Enumeration {
    let total = product_size(pools);
    if total == 0 {
        return Enumeration::default();
    }

    let wanted = total.min(limit);
    let mut candidates = Vec::with_capacity(wanted);
    let mut indices = vec![0usize; pools.len()];

    while candidates.len() < wanted {
        let picks = pools
            .iter()
            .zip(&indices)
            .map(|(pool, &i)| pool[i].clone())
            .collect();
        candidates.push(CandidateSchedule::new(picks));

        // Odometer step, rightmost digit first
        for pos in (0..indices.len()).rev() {
            indices[pos] += 1;
            if indices[pos] < pools[pos].len() {
                break;
            }
            indices[pos] = 0;
        }
    }

    Enumeration {
        candidates,
        truncated: total > limit,
    }
}
