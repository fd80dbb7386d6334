// Search configuration

/// Options controlling the assignment search.
///
/// The defaults search exhaustively: the result is always a true maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Upper bound on the number of nodes the backtracking phase may visit.
    ///
    /// `None` means no bound. When the bound is hit the search stops and the
    /// best assignment found so far is returned, which may not be maximal;
    /// [`SearchStatistics::budget_exhausted`](crate::SearchStatistics) reports it.
    pub node_limit: Option<u64>,
}

impl SearchOptions {
    /// Exhaustive search with no node bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the backtracking phase to `limit` nodes.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}
