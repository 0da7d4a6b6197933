//! Greedy set cover approximation.
//!
//! Repeatedly selects the candidate whose coverage set has the largest
//! intersection with the still-uncovered, coverable elements. Simple,
//! deterministic, and fast enough for universes in the low thousands of
//! elements; the solution size is at most H(d) · OPT, where d is the
//! largest coverage-set size and H the harmonic number.
//!
//! # Reference
//!
//! Chvátal, V. (1979). "A Greedy Heuristic for the Set-Covering
//! Problem", *Mathematics of Operations Research* 4(3), 233-235.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{solve_greedy, GreedyRunner};
