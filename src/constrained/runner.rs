//! Constrained solve entry points.

use std::collections::BTreeSet;
use std::fmt::Debug;

use tracing::info;

use crate::exact::{ExactConfig, ExactRunner};
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::instance::{CoverageReport, Instance};
use crate::solution::Solution;

/// Outcome of a constrained solve: the restricted instance's solution
/// plus the feasibility report of the restriction.
#[derive(Debug, Clone)]
pub struct ConstrainedSolve<C, E> {
    /// Solution over the restricted candidate set.
    pub solution: Solution<C, E>,
    /// Feasibility of the restricted instance, recomputed after the
    /// restriction (the parent's report must not be reused).
    pub report: CoverageReport<E>,
}

impl<C, E> ConstrainedSolve<C, E> {
    /// Elements no candidate covers under this restriction.
    pub fn uncoverable_elements(&self) -> &BTreeSet<E> {
        &self.report.uncoverable
    }
}

/// Runs a solver over the subset of candidates satisfying a predicate.
pub struct ConstrainedRunner;

impl ConstrainedRunner {
    /// Greedy solve of the restriction.
    pub fn run_greedy<C, E, F>(
        base: &Instance<C, E>,
        predicate: F,
        config: &GreedyConfig,
    ) -> ConstrainedSolve<C, E>
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
        F: FnMut(&C) -> bool,
    {
        let (restricted, report) = Self::analyze(base, predicate);
        let solution = GreedyRunner::run(&restricted, config);
        ConstrainedSolve { solution, report }
    }

    /// Exact solve of the restriction.
    ///
    /// When the predicate rejects every candidate over a non-empty
    /// universe, the solution carries the infeasible-under-constraints
    /// status; callers recover by choosing a different constraint.
    pub fn run_exact<C, E, F>(
        base: &Instance<C, E>,
        predicate: F,
        config: &ExactConfig,
    ) -> ConstrainedSolve<C, E>
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
        F: FnMut(&C) -> bool,
    {
        let (restricted, report) = Self::analyze(base, predicate);
        let solution = ExactRunner::run(&restricted, config);
        ConstrainedSolve { solution, report }
    }

    fn analyze<C, E, F>(base: &Instance<C, E>, predicate: F) -> (Instance<C, E>, CoverageReport<E>)
    where
        C: Clone + Ord + Debug,
        E: Clone + Ord + Debug,
        F: FnMut(&C) -> bool,
    {
        let restricted = base.restrict(predicate);
        let report = restricted.coverage();
        info!(
            candidates = restricted.candidate_count(),
            coverable = report.coverable.len(),
            universe = restricted.universe_len(),
            "solving restricted instance"
        );
        (restricted, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Pair;
    use crate::solution::OptimalityStatus;
    use std::collections::BTreeMap;

    type Franchises = BTreeMap<&'static str, BTreeSet<&'static str>>;

    /// Players with the franchises they appeared for; the universe is
    /// every franchise pair, most of which stay uncoverable here.
    fn roster() -> (Instance<&'static str, Pair<&'static str>>, Franchises) {
        let mut franchises = Franchises::new();
        franchises.insert("p1", BTreeSet::from(["MIN", "ATL", "BOS"]));
        franchises.insert("p2", BTreeSet::from(["LAD", "MIN", "NYY"]));
        franchises.insert("p3", BTreeSet::from(["CHC", "CHW", "CIN"]));

        let mut builder = Instance::builder();
        for (player, teams) in &franchises {
            let mut pairs = Vec::new();
            for a in teams {
                for b in teams {
                    if a < b {
                        pairs.push(Pair::new(*a, *b));
                    }
                }
            }
            builder = builder.candidate(*player, pairs);
        }
        (builder.build().unwrap(), franchises)
    }

    #[test]
    fn test_restriction_keeps_only_matching_candidates() {
        let (instance, franchises) = roster();

        let outcome = ConstrainedRunner::run_greedy(
            &instance,
            |player| franchises[player].contains("MIN"),
            &GreedyConfig::default(),
        );

        assert!(outcome.solution.selected.contains(&"p1"));
        assert!(outcome.solution.selected.contains(&"p2"));
        assert!(!outcome.solution.selected.contains(&"p3"));
    }

    #[test]
    fn test_report_reflects_the_restriction() {
        let (instance, franchises) = roster();

        let outcome = ConstrainedRunner::run_greedy(
            &instance,
            |player| franchises[player].contains("MIN"),
            &GreedyConfig::default(),
        );

        // p3's pairs become uncoverable once p3 is excluded.
        assert!(outcome
            .uncoverable_elements()
            .contains(&Pair::new("CHC", "CHW")));
        assert_eq!(
            outcome.report.coverable.len() + outcome.report.uncoverable.len(),
            instance.universe_len()
        );
        assert_eq!(
            outcome.solution.uncoverable,
            outcome.report.uncoverable.len()
        );
    }

    #[test]
    fn test_always_true_predicate_preserves_feasibility() {
        let (instance, _) = roster();

        let outcome =
            ConstrainedRunner::run_greedy(&instance, |_| true, &GreedyConfig::default());

        assert_eq!(outcome.report, instance.coverage());
    }

    #[test]
    fn test_rejecting_every_candidate_is_infeasible() {
        let (instance, _) = roster();

        let outcome =
            ConstrainedRunner::run_exact(&instance, |_| false, &ExactConfig::default());

        assert_eq!(
            outcome.solution.status,
            Some(OptimalityStatus::InfeasibleUnderConstraints)
        );
        assert!(outcome.solution.selected.is_empty());
        assert_eq!(
            outcome.report.uncoverable.len(),
            instance.universe_len()
        );
    }

    #[test]
    fn test_exact_solves_the_restriction_optimally() {
        let (instance, franchises) = roster();

        let outcome = ConstrainedRunner::run_exact(
            &instance,
            |player| franchises[player].contains("MIN"),
            &ExactConfig::default(),
        );

        assert_eq!(
            outcome.solution.status,
            Some(OptimalityStatus::Optimal)
        );
        // Both MIN players are needed to cover the coverable pairs.
        assert_eq!(outcome.solution.selected, vec!["p1", "p2"]);
        assert!(outcome.solution.is_complete());
    }

    #[test]
    fn test_greedy_and_exact_see_the_same_restriction() {
        let (instance, franchises) = roster();
        let predicate = |player: &&str| franchises[player].contains("MIN");

        let greedy = ConstrainedRunner::run_greedy(&instance, predicate, &GreedyConfig::default());
        let exact = ConstrainedRunner::run_exact(&instance, predicate, &ExactConfig::default());

        assert_eq!(greedy.report, exact.report);
        assert!(exact.solution.selected.len() <= greedy.solution.selected.len());
    }
}
