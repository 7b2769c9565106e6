//! Backtracking configuration.

/// What the search collects before it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Enumerate every solution.
    #[default]
    All,
    /// Stop at the first solution found.
    First,
}

/// Configuration for the backtracking solver.
///
/// # Examples
///
/// ```
/// use u_nqueens::backtrack::{BacktrackConfig, SearchMode};
///
/// let config = BacktrackConfig::first().with_max_nodes(10_000);
/// assert_eq!(config.mode, SearchMode::First);
/// assert_eq!(config.max_nodes, 10_000);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackConfig {
    /// Enumerate all solutions or stop at the first.
    pub mode: SearchMode,

    /// Maximum number of queen placements (hard budget). 0 = no limit.
    pub max_nodes: usize,
}

impl BacktrackConfig {
    /// Enumerate-all configuration.
    pub fn all() -> Self {
        Self::default()
    }

    /// Stop-at-first configuration.
    pub fn first() -> Self {
        Self::default().with_mode(SearchMode::First)
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }
}
