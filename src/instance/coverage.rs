//! Feasibility analysis: which elements can be covered at all.

use std::collections::BTreeSet;

use super::model::Instance;

/// Partition of an instance's universe into elements covered by at
/// least one candidate and elements no candidate reaches.
///
/// Computed fresh per [`Instance`]; instances are immutable, so a
/// report can never go stale. Requiring coverage of an uncoverable
/// element is a caller error, not a solver error: both solvers
/// restrict their guarantees to [`coverable`](Self::coverable).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverageReport<E> {
    /// Universe elements at least one candidate covers.
    pub coverable: BTreeSet<E>,
    /// Universe elements no candidate covers.
    pub uncoverable: BTreeSet<E>,
}

impl<E: Clone + Ord> CoverageReport<E> {
    /// Analyzes an instance.
    ///
    /// Takes the union of all candidates' coverage sets and complements
    /// it against the universe. No side effects and no failure modes: a
    /// degenerate instance with zero candidates yields an empty
    /// coverable set.
    pub fn of<C>(instance: &Instance<C, E>) -> Self {
        let mut reached: BTreeSet<&E> = BTreeSet::new();
        for (_, cover) in instance.candidates() {
            reached.extend(cover.iter());
        }

        let mut coverable = BTreeSet::new();
        let mut uncoverable = BTreeSet::new();
        for element in instance.universe() {
            if reached.contains(element) {
                coverable.insert(element.clone());
            } else {
                uncoverable.insert(element.clone());
            }
        }

        Self {
            coverable,
            uncoverable,
        }
    }

    /// Number of elements in the analyzed universe.
    pub fn universe_len(&self) -> usize {
        self.coverable.len() + self.uncoverable.len()
    }

    /// Whether every universe element is coverable.
    pub fn is_fully_coverable(&self) -> bool {
        self.uncoverable.is_empty()
    }

    /// Share of the universe that is coverable, in percent.
    ///
    /// An empty universe counts as fully coverable.
    pub fn coverage_percentage(&self) -> f64 {
        let total = self.universe_len();
        if total == 0 {
            100.0
        } else {
            self.coverable.len() as f64 / total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Pair;

    #[test]
    fn test_full_coverage() {
        let instance = Instance::builder()
            .universe(["a", "b", "c"])
            .candidate("p1", ["a", "b"])
            .candidate("p2", ["c"])
            .build()
            .unwrap();

        let report = instance.coverage();

        assert!(report.is_fully_coverable());
        assert_eq!(report.coverable.len(), 3);
        assert!((report.coverage_percentage() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_partition_of_universe() {
        let instance = Instance::builder()
            .universe(["a", "b", "c", "d"])
            .candidate("p1", ["a", "c"])
            .build()
            .unwrap();

        let report = instance.coverage();

        let coverable: Vec<&str> = report.coverable.iter().copied().collect();
        let uncoverable: Vec<&str> = report.uncoverable.iter().copied().collect();
        assert_eq!(coverable, vec!["a", "c"]);
        assert_eq!(uncoverable, vec!["b", "d"]);
        assert_eq!(report.universe_len(), 4);
        assert!((report.coverage_percentage() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_candidates_yields_empty_coverable_set() {
        let instance: Instance<&str, Pair<&str>> = Instance::builder()
            .universe([Pair::new("X", "Y")])
            .build()
            .unwrap();

        let report = instance.coverage();

        assert!(report.coverable.is_empty());
        assert_eq!(report.uncoverable.len(), 1);
        assert!(report.uncoverable.contains(&Pair::new("Y", "X")));
    }

    #[test]
    fn test_empty_universe() {
        let instance: Instance<&str, &str> = Instance::builder()
            .universe(std::iter::empty())
            .build()
            .unwrap();

        let report = instance.coverage();

        assert!(report.is_fully_coverable());
        assert!((report.coverage_percentage() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_recomputed_after_restriction() {
        let base = Instance::builder()
            .universe(["a", "b"])
            .candidate("p1", ["a"])
            .candidate("p2", ["b"])
            .build()
            .unwrap();

        let restricted = base.restrict(|id| *id == "p1");

        assert!(base.coverage().is_fully_coverable());
        let report = restricted.coverage();
        assert_eq!(report.coverable.len(), 1);
        assert_eq!(report.uncoverable.len(), 1);
        assert!(report.uncoverable.contains("b"));
    }
}
