//! Exact set cover via 0/1 integer programming.
//!
//! One binary decision variable per candidate, one covering constraint
//! per coverable element, objective minimizing the number of selected
//! candidates. Uncoverable elements generate no constraint, which is
//! what keeps the program feasible on restricted instances.
//!
//! The formulation lives in [`CoverProgram`]; solving it is a pluggable
//! capability behind the [`IpSolve`] trait. Two backends ship with the
//! crate: [`BranchBound`], a deterministic depth-first branch-and-bound
//! that honors the wall-clock budget cooperatively, and [`Milp`], which
//! hands the program to `good_lp`'s pure-Rust microlp solver. Any
//! conforming backend can be substituted without touching the instance
//! or solution model.
//!
//! # Reference
//!
//! Land, A. H. & Doig, A. G. (1960). "An Automatic Method of Solving
//! Discrete Programming Problems", *Econometrica* 28(3), 497-520.

mod bnb;
mod config;
mod milp;
mod program;
mod runner;

pub use bnb::BranchBound;
pub use config::ExactConfig;
pub use milp::Milp;
pub use program::{CoverProgram, IpOutcome, IpSolve};
pub use runner::{solve_exact, ExactRunner};
