//! Greedy execution engine.
//!
//! # Algorithm
//!
//! 1. Analyze feasibility; only coverable elements count as work
//! 2. While uncovered coverable elements remain:
//!    a. Select the candidate covering the most uncovered elements,
//!       breaking ties by ascending candidate identifier
//!    b. Mark its elements covered
//! 3. Return the selection in pick order
//!
//! Marginal gains are recomputed from scratch every round, giving
//! O(elements × candidates) per selection. Fast enough for universes
//! in the low thousands of elements.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::time::Instant;

use tracing::debug;

use crate::instance::Instance;
use crate::solution::{Algorithm, OptimalityStatus, Solution};

use super::config::GreedyConfig;

/// Solves with the default configuration (run to full coverage).
pub fn solve_greedy<C, E>(instance: &Instance<C, E>) -> Solution<C, E>
where
    C: Clone + Ord + Debug,
    E: Clone + Ord + Debug,
{
    GreedyRunner::run(instance, &GreedyConfig::default())
}

/// Greedy maximum-marginal-gain runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Executes the greedy heuristic on the given instance.
    ///
    /// The returned solution covers every coverable element unless
    /// [`GreedyConfig::max_selections`] stopped the run early. Candidates
    /// with zero marginal gain at selection time are never chosen, and a
    /// selected candidate is never reconsidered. Output is reproducible:
    /// the same instance always yields the identical selection sequence.
    pub fn run<C, E>(instance: &Instance<C, E>, config: &GreedyConfig) -> Solution<C, E>
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
    {
        let start = Instant::now();
        let report = instance.coverage();

        let mut uncovered = report.coverable.clone();
        let mut covered: BTreeSet<E> = BTreeSet::new();
        let mut chosen: BTreeSet<C> = BTreeSet::new();
        let mut selected: Vec<C> = Vec::new();

        while !uncovered.is_empty() {
            if let Some(limit) = config.max_selections {
                if selected.len() >= limit {
                    debug!(
                        limit,
                        remaining = uncovered.len(),
                        "selection cap reached; stopping early"
                    );
                    break;
                }
            }

            // Candidates iterate in ascending identifier order and the
            // comparison is strict, so the smallest identifier wins ties.
            let mut best: Option<(&C, &BTreeSet<E>)> = None;
            let mut best_gain = 0usize;
            for (id, cover) in instance.candidates() {
                if chosen.contains(id) {
                    continue;
                }
                let gain = cover.intersection(&uncovered).count();
                if gain > best_gain {
                    best_gain = gain;
                    best = Some((id, cover));
                }
            }

            let Some((id, cover)) = best else {
                debug!(
                    remaining = uncovered.len(),
                    "no candidate with positive marginal gain; stopping"
                );
                break;
            };

            for element in cover {
                uncovered.remove(element);
                covered.insert(element.clone());
            }
            chosen.insert(id.clone());
            selected.push(id.clone());
            debug!(
                iteration = selected.len(),
                candidate = ?id,
                gain = best_gain,
                remaining = uncovered.len(),
                "selected candidate"
            );
        }

        let uncovered_coverable = uncovered.len();
        // A complete cover of size 0 or 1 is minimal by definition; any
        // larger cover carries no proof from this heuristic.
        let status = if uncovered_coverable == 0 && selected.len() <= 1 {
            Some(OptimalityStatus::Optimal)
        } else {
            None
        };

        Solution {
            algorithm: Algorithm::Greedy,
            selected,
            covered,
            uncovered_coverable,
            uncoverable: report.uncoverable.len(),
            solve_time_ms: start.elapsed().as_millis() as u64,
            status,
            best_bound: None,
        }
    }
}
