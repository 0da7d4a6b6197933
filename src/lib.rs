//! Set cover solving engine.
//!
//! Computes minimum (or near-minimum) collections of *candidates* that
//! jointly cover a finite universe of *elements*, an instance of the
//! classic Set Cover problem. The engine is domain-agnostic: elements
//! and candidates are opaque, totally ordered identifiers supplied by
//! the caller.
//!
//! # Components
//!
//! - **Instance model** ([`instance`]): immutable [`Instance`](instance::Instance)
//!   values built from a universe and a candidate → coverage-set mapping,
//!   validated at construction.
//! - **Feasibility analysis** ([`instance::CoverageReport`]): partitions
//!   the universe into elements coverable by at least one candidate and
//!   elements no candidate reaches. Both solvers honor this partition.
//! - **Greedy solver** ([`greedy`]): iterative maximum-marginal-gain
//!   approximation with deterministic tie-breaking. Solution size is at
//!   most H(d) · OPT, where d is the largest coverage set.
//! - **Exact solver** ([`exact`]): 0/1 integer-program formulation solved
//!   to proven optimality or to a time-bounded best-found solution with a
//!   reported bound. Backends are pluggable via [`exact::IpSolve`]; a
//!   branch-and-bound backend and a `good_lp`/microlp backend ship with
//!   the crate.
//! - **Constrained solves** ([`constrained`]): restrict an instance to the
//!   candidates satisfying a predicate and solve the restriction,
//!   reporting which elements become uncoverable.
//!
//! # Design
//!
//! Every solver call is a pure, blocking computation over an immutable
//! [`Instance`](instance::Instance): no shared state, no caches, no I/O.
//! The exact solver's wall-clock budget is the only cooperative
//! cancellation mechanism. Parallelism, ingestion, and persistence belong
//! to callers.

pub mod constrained;
pub mod exact;
pub mod greedy;
pub mod instance;
pub mod solution;
