//! Constrained solves over restricted instances.
//!
//! Restricting an instance to the candidates satisfying a predicate
//! (for example "appeared for franchise X") can only shrink coverage,
//! so the restriction is re-analyzed before solving and the resulting
//! feasibility report is returned alongside the solution. That lets
//! callers state "N of M elements are coverable under this constraint"
//! instead of silently losing the difference.
//!
//! The restriction itself is [`Instance::restrict`]; this module adds
//! the solve entry points so the variant needs no duplicated solver
//! logic.
//!
//! [`Instance::restrict`]: crate::instance::Instance::restrict

mod runner;

pub use runner::{ConstrainedRunner, ConstrainedSolve};
