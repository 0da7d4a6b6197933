//! Solution records shared by all solvers.

use std::collections::BTreeSet;
use std::fmt;

/// Identifies which solver produced a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// Maximum-marginal-gain heuristic.
    Greedy,
    /// 0/1 integer-program solve.
    Exact,
}

impl Algorithm {
    /// Stable lowercase name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Exact => "exact",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimality guarantee attached to a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum OptimalityStatus {
    /// The selection was proven minimal.
    Optimal,
    /// The time budget ran out first; the selection is the best feasible
    /// cover found so far, with [`Solution::best_bound`] quantifying how
    /// far from the optimum it might be.
    TimeLimitBestFound,
    /// No candidate selection can satisfy the constraints (zero
    /// candidates against a non-empty universe). Not an error: callers
    /// recover by choosing a different constraint.
    InfeasibleUnderConstraints,
}

impl OptimalityStatus {
    /// Stable kebab-case name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimalityStatus::Optimal => "optimal",
            OptimalityStatus::TimeLimitBestFound => "time-limit-best-found",
            OptimalityStatus::InfeasibleUnderConstraints => "infeasible-under-constraints",
        }
    }
}

impl fmt::Display for OptimalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single solver invocation over one instance.
///
/// Inert data: safe to hand to storage or presentation layers without
/// further engine involvement. The uncoverable count is always reported;
/// a caller treating a solution as complete without checking
/// [`uncovered_coverable`](Self::uncovered_coverable) owns that misuse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<C, E> {
    /// Algorithm that produced this solution.
    pub algorithm: Algorithm,
    /// Selected candidates, in selection order.
    ///
    /// Selection order is the greedy solver's provenance; the exact
    /// solver returns ascending identifier order.
    pub selected: Vec<C>,
    /// Elements actually covered by the selection.
    pub covered: BTreeSet<E>,
    /// Coverable elements the selection failed to cover.
    ///
    /// Zero for any complete solver run; nonzero only when a run was
    /// explicitly stopped early.
    pub uncovered_coverable: usize,
    /// Universe elements no candidate in the instance covers.
    pub uncoverable: usize,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
    /// Optimality guarantee, when one exists.
    ///
    /// Always set by the exact solver. The greedy solver certifies
    /// `Optimal` only for complete covers of size 0 or 1 (which are
    /// minimal by definition) and reports `None` otherwise.
    pub status: Option<OptimalityStatus>,
    /// Best proven lower bound on the minimum selection size, when the
    /// exact solver could compute one.
    pub best_bound: Option<f64>,
}

impl<C, E> Solution<C, E> {
    /// Whether every coverable element ended up covered.
    pub fn is_complete(&self) -> bool {
        self.uncovered_coverable == 0
    }

    /// Wall-clock solve time in seconds.
    pub fn runtime_secs(&self) -> f64 {
        self.solve_time_ms as f64 / 1000.0
    }

    /// Relative optimality gap, when one can be computed.
    ///
    /// Zero for proven-optimal solutions. For time-limited solutions the
    /// gap is `(size - bound) / size` against the best proven lower
    /// bound. `None` when no bound is available or the selection is
    /// empty.
    pub fn optimality_gap(&self) -> Option<f64> {
        match self.status {
            Some(OptimalityStatus::Optimal) => Some(0.0),
            Some(OptimalityStatus::TimeLimitBestFound) => {
                let bound = self.best_bound?;
                if self.selected.is_empty() {
                    return None;
                }
                let size = self.selected.len() as f64;
                Some(((size - bound) / size).max(0.0))
            }
            _ => None,
        }
    }
}
