//! Covering-program representation and the backend capability interface.

use std::collections::BTreeMap;
use std::time::Instant;

use bit_set::BitSet;

use crate::instance::{CoverageReport, Instance};

/// Dense matrix form of a set-cover 0/1 integer program.
///
/// One binary decision variable per candidate (variable indices follow
/// ascending candidate-identifier order) and one covering constraint
/// per coverable element, on dense element indices in ascending element
/// order. Uncoverable elements generate no constraint.
#[derive(Debug, Clone)]
pub struct CoverProgram {
    /// Per-variable coverage rows over the constrained element indices.
    pub covers: Vec<BitSet>,
    /// Number of constrained (coverable) elements.
    pub element_count: usize,
}

impl CoverProgram {
    /// Builds the program for `instance`, constraining exactly the
    /// coverable elements of `report`.
    pub fn build<C, E: Ord>(instance: &Instance<C, E>, report: &CoverageReport<E>) -> Self {
        let index: BTreeMap<&E, usize> = report
            .coverable
            .iter()
            .enumerate()
            .map(|(i, element)| (element, i))
            .collect();

        let covers = instance
            .candidates()
            .map(|(_, cover)| {
                let mut row = BitSet::with_capacity(index.len());
                for element in cover {
                    if let Some(&i) = index.get(element) {
                        row.insert(i);
                    }
                }
                row
            })
            .collect();

        Self {
            covers,
            element_count: index.len(),
        }
    }

    /// Number of decision variables.
    pub fn var_count(&self) -> usize {
        self.covers.len()
    }

    /// Size of the largest coverage row; 0 without variables.
    pub fn max_cover(&self) -> usize {
        self.covers.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Lower bound on the optimum before any branching:
    /// `ceil(element_count / max_cover)`.
    pub fn root_bound(&self) -> usize {
        let widest = self.max_cover();
        if widest == 0 {
            0
        } else {
            self.element_count.div_ceil(widest)
        }
    }
}

/// Outcome of one backend solve.
#[derive(Debug, Clone, PartialEq)]
pub struct IpOutcome {
    /// Selected variable indices, ascending.
    pub selected: Vec<usize>,
    /// Whether the selection was proven minimal.
    pub proven_optimal: bool,
    /// Best proven lower bound on the optimum.
    pub best_bound: f64,
}

/// Capability interface for 0/1 covering-program backends.
///
/// A backend receives the program, a feasible incumbent selection (the
/// upper bound to improve on), and a wall-clock deadline acting as a
/// cooperative cancellation signal. It returns the best selection it
/// can certify within the budget; when the deadline expires first, the
/// incumbent (possibly improved) comes back with `proven_optimal`
/// false. Backends never fail: degraded outcomes are still outcomes.
pub trait IpSolve {
    /// Solves the program under the given deadline.
    fn solve(&self, program: &CoverProgram, incumbent: &[usize], deadline: Instant) -> IpOutcome;
}
