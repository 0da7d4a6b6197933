//! Branch-and-bound backend for the covering program.
//!
//! # Algorithm
//!
//! Depth-first search over candidate inclusions. Every node picks the
//! uncovered element with the fewest remaining covering variables and
//! branches on each of them in ascending index order; once a variable's
//! branch is explored, it is banned from the sibling subtrees so no
//! cover is enumerated twice. Subtrees whose
//! `selected + ceil(uncovered / max_cover)` bound cannot beat the
//! incumbent are pruned. The wall-clock deadline is polled every few
//! hundred nodes; on expiry the incumbent is returned as best-found.

use std::time::Instant;

use bit_set::BitSet;
use tracing::debug;

use super::program::{CoverProgram, IpOutcome, IpSolve};

const DEADLINE_POLL_NODES: u64 = 256;

/// Deterministic depth-first branch-and-bound backend.
///
/// The search order is a pure function of the program, so repeated runs
/// return the identical selection (a stronger guarantee than the engine
/// requires of exact backends).
pub struct BranchBound;

impl IpSolve for BranchBound {
    fn solve(&self, program: &CoverProgram, incumbent: &[usize], deadline: Instant) -> IpOutcome {
        if program.element_count == 0 {
            return IpOutcome {
                selected: Vec::new(),
                proven_optimal: true,
                best_bound: 0.0,
            };
        }

        let root_bound = program.root_bound();
        let mut best: Vec<usize> = incumbent.to_vec();
        best.sort_unstable();

        if Instant::now() >= deadline {
            return IpOutcome {
                selected: best,
                proven_optimal: false,
                best_bound: root_bound as f64,
            };
        }

        // Element → covering variables, ascending.
        let mut element_covers: Vec<Vec<usize>> = vec![Vec::new(); program.element_count];
        for (var, row) in program.covers.iter().enumerate() {
            for element in row.iter() {
                element_covers[element].push(var);
            }
        }

        let mut uncovered = BitSet::with_capacity(program.element_count);
        for element in 0..program.element_count {
            uncovered.insert(element);
        }

        let mut search = Search {
            program,
            element_covers,
            // Clamp avoids a zero division when every row is empty;
            // such programs die in the element scan anyway.
            max_cover: program.max_cover().max(1),
            deadline,
            nodes: 0,
            timed_out: false,
            best,
        };
        let banned = BitSet::with_capacity(program.var_count());
        search.dfs(&mut Vec::new(), &uncovered, &banned);

        let proven = !search.timed_out;
        debug!(
            nodes = search.nodes,
            size = search.best.len(),
            proven,
            "branch-and-bound finished"
        );
        let best_bound = if proven {
            search.best.len() as f64
        } else {
            root_bound as f64
        };
        IpOutcome {
            selected: search.best,
            proven_optimal: proven,
            best_bound,
        }
    }
}

struct Search<'a> {
    program: &'a CoverProgram,
    element_covers: Vec<Vec<usize>>,
    max_cover: usize,
    deadline: Instant,
    nodes: u64,
    timed_out: bool,
    best: Vec<usize>,
}

impl Search<'_> {
    fn dfs(&mut self, chosen: &mut Vec<usize>, uncovered: &BitSet, banned: &BitSet) {
        if self.timed_out {
            return;
        }
        self.nodes += 1;
        if self.nodes % DEADLINE_POLL_NODES == 0 && Instant::now() >= self.deadline {
            self.timed_out = true;
            return;
        }

        if uncovered.is_empty() {
            if chosen.len() < self.best.len() {
                self.best = chosen.clone();
                self.best.sort_unstable();
                debug!(size = self.best.len(), nodes = self.nodes, "improved incumbent");
            }
            return;
        }

        let bound = chosen.len() + uncovered.len().div_ceil(self.max_cover);
        if bound >= self.best.len() {
            return;
        }

        // Branch on the uncovered element with the fewest available
        // covering variables; a dead element prunes the whole node.
        let mut element = None;
        let mut fewest = usize::MAX;
        for e in uncovered.iter() {
            let available = self.element_covers[e]
                .iter()
                .filter(|&&v| !banned.contains(v))
                .count();
            if available == 0 {
                return;
            }
            if available < fewest {
                fewest = available;
                element = Some(e);
            }
        }
        let Some(element) = element else { return };

        let mut banned_below = banned.clone();
        let vars = self.element_covers[element].clone();
        for var in vars {
            if banned.contains(var) {
                continue;
            }
            let mut next = uncovered.clone();
            next.difference_with(&self.program.covers[var]);
            chosen.push(var);
            self.dfs(chosen, &next, &banned_below);
            chosen.pop();
            if self.timed_out {
                return;
            }
            banned_below.insert(var);
        }
    }
}
