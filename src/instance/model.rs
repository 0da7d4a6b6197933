//! Instance definition and construction-time validation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use thiserror::Error;

use super::coverage::CoverageReport;

/// Error raised when instance construction input is inconsistent.
///
/// Construction failures are fatal to the call that made them: the
/// builder is consumed and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInstance {
    /// A coverage set references an element outside the declared universe.
    #[error("candidate {candidate} covers {element}, which is outside the universe")]
    ElementOutsideUniverse {
        /// The offending candidate, in its `Debug` rendering.
        candidate: String,
        /// The stray element, in its `Debug` rendering.
        element: String,
    },

    /// The same candidate identifier was added more than once.
    #[error("candidate {candidate} was added more than once")]
    DuplicateCandidate {
        /// The duplicated candidate, in its `Debug` rendering.
        candidate: String,
    },
}

/// An immutable set-cover problem instance.
///
/// Owns the universe of elements and the candidate → coverage-set
/// mapping. Every element referenced by a coverage set belongs to the
/// universe, and every candidate identifier is unique; both invariants
/// are enforced by [`InstanceBuilder::build`].
///
/// Candidates are stored in ascending identifier order, which is what
/// makes solver runs over the same instance reproducible.
///
/// # Examples
///
/// ```
/// use mincover::instance::Instance;
///
/// let instance = Instance::builder()
///     .candidate("p1", ["a", "b"])
///     .candidate("p2", ["b", "c"])
///     .build()
///     .unwrap();
///
/// assert_eq!(instance.universe_len(), 3);
/// assert_eq!(instance.candidate_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance<C, E> {
    universe: BTreeSet<E>,
    candidates: BTreeMap<C, BTreeSet<E>>,
}

impl<C, E> Instance<C, E> {
    /// The full universe of elements this instance should cover.
    pub fn universe(&self) -> &BTreeSet<E> {
        &self.universe
    }

    /// Number of elements in the universe.
    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    /// Number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Iterates candidates and their coverage sets in ascending
    /// identifier order.
    pub fn candidates(&self) -> impl Iterator<Item = (&C, &BTreeSet<E>)> {
        self.candidates.iter()
    }
}

impl<C: Ord, E> Instance<C, E> {
    /// The coverage set of one candidate, if present.
    pub fn coverage_of(&self, id: &C) -> Option<&BTreeSet<E>> {
        self.candidates.get(id)
    }
}

impl<C: Clone + Ord, E: Clone + Ord> Instance<C, E> {
    /// Starts building a new instance.
    pub fn builder() -> InstanceBuilder<C, E> {
        InstanceBuilder::new()
    }

    /// Runs the feasibility analysis for this instance.
    ///
    /// Equivalent to [`CoverageReport::of`].
    pub fn coverage(&self) -> CoverageReport<E> {
        CoverageReport::of(self)
    }

    /// Derives a new instance containing only the candidates for which
    /// `keep` returns `true`, over the same universe.
    ///
    /// Restricting can only shrink coverage, so the derived instance's
    /// coverable subset is a subset of this one's; callers must re-run
    /// [`Instance::coverage`] on the restriction rather than reuse the
    /// parent's report.
    pub fn restrict<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&C) -> bool,
    {
        let mut candidates = BTreeMap::new();
        for (id, cover) in &self.candidates {
            if keep(id) {
                candidates.insert(id.clone(), cover.clone());
            }
        }
        Self {
            universe: self.universe.clone(),
            candidates,
        }
    }
}

/// Builder for [`Instance`].
///
/// The universe may be given explicitly with [`universe`](Self::universe);
/// when omitted, it defaults to the union of all coverage sets.
#[derive(Debug, Clone)]
pub struct InstanceBuilder<C, E> {
    universe: Option<BTreeSet<E>>,
    candidates: Vec<(C, BTreeSet<E>)>,
}

impl<C, E> Default for InstanceBuilder<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> InstanceBuilder<C, E> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            universe: None,
            candidates: Vec::new(),
        }
    }
}

impl<C: Clone + Ord, E: Clone + Ord> InstanceBuilder<C, E> {
    /// Declares the universe explicitly.
    pub fn universe(mut self, elements: impl IntoIterator<Item = E>) -> Self {
        self.universe = Some(elements.into_iter().collect());
        self
    }

    /// Adds a candidate with its coverage set.
    ///
    /// An empty coverage set is legal; such a candidate is never
    /// selected by any solver.
    pub fn candidate(mut self, id: C, covers: impl IntoIterator<Item = E>) -> Self {
        self.candidates.push((id, covers.into_iter().collect()));
        self
    }
}

impl<C: Clone + Ord + Debug, E: Clone + Ord + Debug> InstanceBuilder<C, E> {
    /// Validates and freezes the instance.
    ///
    /// Fails with [`MalformedInstance`] when a candidate identifier is
    /// duplicated or a coverage set references an element outside the
    /// explicit universe.
    pub fn build(self) -> Result<Instance<C, E>, MalformedInstance> {
        let mut candidates: BTreeMap<C, BTreeSet<E>> = BTreeMap::new();
        for (id, cover) in self.candidates {
            if candidates.contains_key(&id) {
                return Err(MalformedInstance::DuplicateCandidate {
                    candidate: format!("{id:?}"),
                });
            }
            candidates.insert(id, cover);
        }

        let universe = match self.universe {
            Some(universe) => {
                for (id, cover) in &candidates {
                    if let Some(stray) = cover.iter().find(|e| !universe.contains(e)) {
                        return Err(MalformedInstance::ElementOutsideUniverse {
                            candidate: format!("{id:?}"),
                            element: format!("{stray:?}"),
                        });
                    }
                }
                universe
            }
            None => candidates
                .values()
                .flat_map(|cover| cover.iter().cloned())
                .collect(),
        };

        Ok(Instance {
            universe,
            candidates,
        })
    }
}
