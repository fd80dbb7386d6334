// Search statistics

use std::fmt;
use std::time::Duration;

/// Counters collected while building a network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchStatistics {
    /// Number of distinct cities considered.
    pub cities: usize,
    /// Input names dropped because the same name appeared earlier.
    pub duplicates_collapsed: usize,
    /// Full scans made by the forced-assignment phase.
    pub forced_rounds: u64,
    /// Cities assigned by the forced-assignment phase.
    pub forced_assignments: usize,
    /// Cities left for the backtracking phase.
    pub residual_cities: usize,
    /// Nodes visited by the backtracking phase.
    pub nodes_explored: u64,
    /// Complete assignments evaluated by the backtracking phase.
    pub leaves_reached: u64,
    /// Times the best assignment was replaced by a larger one.
    pub improvements: u64,
    /// Whether the node limit cut the search short.
    pub budget_exhausted: bool,
    /// Cities in the final network.
    pub assigned: usize,
    /// Wall-clock time of the whole build.
    pub duration: Duration,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Cities: {}", self.cities)?;
        writeln!(f, "  Duplicates Collapsed: {}", self.duplicates_collapsed)?;
        writeln!(f, "  Forced Rounds: {}", self.forced_rounds)?;
        writeln!(f, "  Forced Assignments: {}", self.forced_assignments)?;
        writeln!(f, "  Residual Cities: {}", self.residual_cities)?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Leaves Reached: {}", self.leaves_reached)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(f, "  Budget Exhausted: {}", self.budget_exhausted)?;
        writeln!(f, "  Assigned: {}", self.assigned)?;
        write!(f, "  Duration (secs): {:.3}", self.duration.as_secs_f64())
    }
}
