//! Exact solve pipeline: feasibility gate, program construction,
//! incumbent seeding, backend dispatch.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::instance::Instance;
use crate::solution::{Algorithm, OptimalityStatus, Solution};

use super::bnb::BranchBound;
use super::config::ExactConfig;
use super::program::{CoverProgram, IpSolve};

/// Solves to proven optimality (or time-bounded best-found) with the
/// default branch-and-bound backend.
pub fn solve_exact<C, E>(instance: &Instance<C, E>, time_limit_ms: u64) -> Solution<C, E>
where
    C: Clone + Ord + Debug,
    E: Clone + Ord + Debug,
{
    ExactRunner::run(
        instance,
        &ExactConfig::default().with_time_limit_ms(time_limit_ms),
    )
}

/// Exact 0/1 integer-program runner.
pub struct ExactRunner;

impl ExactRunner {
    /// Runs with the default [`BranchBound`] backend.
    pub fn run<C, E>(instance: &Instance<C, E>, config: &ExactConfig) -> Solution<C, E>
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
    {
        Self::run_with(instance, config, &BranchBound)
    }

    /// Runs with a caller-supplied backend.
    ///
    /// The pipeline: analyze feasibility, short-circuit the degenerate
    /// cases, build the covering program over the coverable elements,
    /// seed an incumbent with the greedy cover, and hand program +
    /// incumbent + deadline to the backend. The returned solution's
    /// status is [`OptimalityStatus::Optimal`] when the backend proved
    /// minimality and [`OptimalityStatus::TimeLimitBestFound`]
    /// otherwise, with the backend's bound surfaced for gap reporting.
    pub fn run_with<C, E, B>(
        instance: &Instance<C, E>,
        config: &ExactConfig,
        backend: &B,
    ) -> Solution<C, E>
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
        B: IpSolve,
    {
        let start = Instant::now();
        let deadline = start + Duration::from_millis(config.time_limit_ms);
        let report = instance.coverage();

        // Zero candidates cannot satisfy a non-empty universe under any
        // selection: the program is infeasible, which is a status, not
        // an error.
        if instance.candidate_count() == 0 && instance.universe_len() > 0 {
            info!(
                universe = instance.universe_len(),
                "no candidates; covering program is infeasible"
            );
            return Solution {
                algorithm: Algorithm::Exact,
                selected: Vec::new(),
                covered: BTreeSet::new(),
                uncovered_coverable: 0,
                uncoverable: report.uncoverable.len(),
                solve_time_ms: elapsed_ms(start),
                status: Some(OptimalityStatus::InfeasibleUnderConstraints),
                best_bound: None,
            };
        }

        // Nothing to constrain: the empty selection is minimal.
        if report.coverable.is_empty() {
            return Solution {
                algorithm: Algorithm::Exact,
                selected: Vec::new(),
                covered: BTreeSet::new(),
                uncovered_coverable: 0,
                uncoverable: report.uncoverable.len(),
                solve_time_ms: elapsed_ms(start),
                status: Some(OptimalityStatus::Optimal),
                best_bound: Some(0.0),
            };
        }

        let program = CoverProgram::build(instance, &report);
        debug!(
            vars = program.var_count(),
            constraints = program.element_count,
            "built covering program"
        );

        // Ascending-identifier candidate list fixes the variable
        // indexing; the greedy cover seeds a feasible incumbent.
        let candidates: Vec<(&C, &BTreeSet<E>)> = instance.candidates().collect();
        let index_of: BTreeMap<&C, usize> = candidates
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (*id, i))
            .collect();
        let seed = GreedyRunner::run(instance, &GreedyConfig::default());
        let mut incumbent: Vec<usize> = seed
            .selected
            .iter()
            .filter_map(|id| index_of.get(id).copied())
            .collect();
        incumbent.sort_unstable();

        let outcome = backend.solve(&program, &incumbent, deadline);

        let mut selected: Vec<C> = Vec::with_capacity(outcome.selected.len());
        let mut covered: BTreeSet<E> = BTreeSet::new();
        for &var in &outcome.selected {
            if let Some((id, cover)) = candidates.get(var) {
                selected.push((*id).clone());
                covered.extend(cover.iter().cloned());
            }
        }

        let status = if outcome.proven_optimal {
            OptimalityStatus::Optimal
        } else {
            OptimalityStatus::TimeLimitBestFound
        };
        info!(
            status = %status,
            size = selected.len(),
            bound = outcome.best_bound,
            "exact solve finished"
        );

        Solution {
            algorithm: Algorithm::Exact,
            uncovered_coverable: report.coverable.len() - covered.len(),
            uncoverable: report.uncoverable.len(),
            selected,
            covered,
            solve_time_ms: elapsed_ms(start),
            status: Some(status),
            best_bound: Some(outcome.best_bound),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::Milp;
    use crate::greedy::solve_greedy;
    use crate::instance::Pair;

    fn triangle() -> Instance<&'static str, Pair<&'static str>> {
        Instance::builder()
            .candidate("player1", [Pair::new("A", "B"), Pair::new("A", "C")])
            .candidate("player2", [Pair::new("B", "C")])
            .candidate("player3", [Pair::new("A", "B")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_finds_optimal_pair() {
        let instance = triangle();
        let solution = solve_exact(&instance, 60_000);

        assert_eq!(solution.algorithm, Algorithm::Exact);
        assert_eq!(solution.status, Some(OptimalityStatus::Optimal));
        assert_eq!(solution.selected, vec!["player1", "player2"]);
        assert_eq!(solution.covered, *instance.universe());
        assert!(solution.is_complete());
        assert_eq!(solution.optimality_gap(), Some(0.0));
    }

    #[test]
    fn test_single_candidate_solution() {
        let everything = [
            Pair::new("A", "B"),
            Pair::new("A", "C"),
            Pair::new("B", "C"),
        ];
        let instance = Instance::builder()
            .candidate("super", everything)
            .candidate("normal", [Pair::new("A", "B")])
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 60_000);

        assert_eq!(solution.status, Some(OptimalityStatus::Optimal));
        assert_eq!(solution.selected, vec!["super"]);
    }

    #[test]
    fn test_never_larger_than_greedy() {
        let instance = Instance::builder()
            .candidate("wide", [1u32, 2, 3, 4])
            .candidate("left", [1u32, 3, 5])
            .candidate("right", [2u32, 4, 6])
            .build()
            .unwrap();

        let exact = solve_exact(&instance, 60_000);
        let greedy = solve_greedy(&instance);

        assert_eq!(exact.status, Some(OptimalityStatus::Optimal));
        assert!(exact.selected.len() <= greedy.selected.len());
        assert_eq!(exact.selected.len(), 2);
        assert_eq!(greedy.selected.len(), 3);
    }

    #[test]
    fn test_zero_candidates_is_infeasible() {
        let instance: Instance<&str, Pair<&str>> = Instance::builder()
            .universe([Pair::new("X", "Y")])
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 60_000);

        assert_eq!(
            solution.status,
            Some(OptimalityStatus::InfeasibleUnderConstraints)
        );
        assert!(solution.selected.is_empty());
        assert!(solution.covered.is_empty());
        assert_eq!(solution.uncoverable, 1);
        assert_eq!(solution.optimality_gap(), None);
    }

    #[test]
    fn test_empty_universe_is_trivially_optimal() {
        let instance: Instance<&str, u32> = Instance::builder()
            .universe(std::iter::empty())
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 60_000);

        assert_eq!(solution.status, Some(OptimalityStatus::Optimal));
        assert!(solution.selected.is_empty());
    }

    #[test]
    fn test_all_elements_uncoverable_is_trivially_optimal() {
        let instance = Instance::builder()
            .universe(["orphan1", "orphan2"])
            .candidate("idle", [])
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 60_000);

        assert_eq!(solution.status, Some(OptimalityStatus::Optimal));
        assert!(solution.selected.is_empty());
        assert_eq!(solution.uncoverable, 2);
    }

    #[test]
    fn test_uncoverable_elements_still_reported() {
        let instance = Instance::builder()
            .universe(["a", "b", "orphan"])
            .candidate("p1", ["a", "b"])
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 60_000);

        assert_eq!(solution.status, Some(OptimalityStatus::Optimal));
        assert_eq!(solution.selected, vec!["p1"]);
        assert!(solution.is_complete());
        assert_eq!(solution.uncoverable, 1);
    }

    #[test]
    fn test_zero_budget_returns_best_found() {
        let instance = Instance::builder()
            .candidate("wide", [1u32, 2, 3, 4])
            .candidate("left", [1u32, 3, 5])
            .candidate("right", [2u32, 4, 6])
            .build()
            .unwrap();

        let solution = solve_exact(&instance, 0);

        assert_eq!(solution.status, Some(OptimalityStatus::TimeLimitBestFound));
        // The greedy incumbent comes back: feasible, no worse than
        // selecting every candidate.
        assert!(!solution.selected.is_empty());
        assert!(solution.selected.len() <= instance.candidate_count());
        assert!(solution.is_complete());
        assert!(solution.best_bound.is_some());
        assert!(solution.optimality_gap().is_some());
    }

    #[test]
    fn test_milp_backend_agrees_on_objective() {
        let instance = triangle();
        let config = ExactConfig::default();

        let bnb = ExactRunner::run(&instance, &config);
        let milp = ExactRunner::run_with(&instance, &config, &Milp);

        assert_eq!(milp.status, Some(OptimalityStatus::Optimal));
        assert_eq!(milp.selected.len(), bnb.selected.len());
        assert_eq!(milp.covered, *instance.universe());
    }
}
