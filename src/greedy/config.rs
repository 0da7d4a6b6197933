//! Greedy solver configuration.

/// Configuration for the greedy solver.
///
/// # Examples
///
/// ```
/// use mincover::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_max_selections(5);
/// assert_eq!(config.max_selections, Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyConfig {
    /// Maximum number of candidates to select before stopping early.
    ///
    /// `None` (the default) runs until the coverable universe is
    /// covered. A truncated run reports what it left uncovered through
    /// `Solution::uncovered_coverable`.
    pub max_selections: Option<usize>,
}

impl GreedyConfig {
    /// Caps the number of selections.
    pub fn with_max_selections(mut self, n: usize) -> Self {
        self.max_selections = Some(n);
        self
    }
}
