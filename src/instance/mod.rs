//! Set-cover instance model and feasibility analysis.
//!
//! An [`Instance`] is the immutable representation of one set-cover
//! problem: a universe of elements and a mapping from candidate
//! identifier to the subset of elements it covers. Instances are built
//! through [`InstanceBuilder`], which validates consistency at
//! construction; derived instances ([`Instance::restrict`]) are new
//! values, never in-place mutations.
//!
//! [`CoverageReport`] is the feasibility analysis over an instance:
//! the partition of the universe into elements at least one candidate
//! covers and elements nothing covers. Solvers compute it first and
//! restrict their guarantees to the coverable subset.
//!
//! [`Pair`] is a convenience element type for universes of unordered
//! identifier pairs, canonicalized so `(A, B)` and `(B, A)` name the
//! same element.

mod coverage;
mod model;
mod pair;

pub use coverage::CoverageReport;
pub use model::{Instance, InstanceBuilder, MalformedInstance};
pub use pair::Pair;
