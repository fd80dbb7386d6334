// Maximal assignment engine
//
// Two phases over one `SearchState`:
// 1. Forced assignment. Scan unassigned cities in order and give each one
//    the first of its candidates that no other city lists. Repeat until a
//    scan changes nothing, then commit.
// 2. Backtracking. Walk the remaining cities in order; for each, try every
//    still-free exclusive candidate and also leaving it out. Keep the
//    largest complete assignment seen (first found wins a tie).
//
// Several maximal assignments can exist. Which one is returned depends only
// on input order and candidate order, but callers should rely only on its
// size and validity.

use std::time::Instant;

use tla_core::{CityName, Code};
use tracing::{debug, trace, warn};

use crate::index::{CandidateIndex, CityIndex};
use crate::network::{CityEntry, Network};
use crate::options::SearchOptions;
use crate::state::SearchState;
use crate::stats::SearchStatistics;

/// A finished build: the network and how it was found.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub network: Network,
    pub statistics: SearchStatistics,
}

/// Builds maximal ambiguity-free networks.
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    options: SearchOptions,
}

impl AssignmentEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Assign codes to as many of `names` as possible.
    ///
    /// Repeated names are treated as one city. Entries come out in the order
    /// their cities first appear in `names`.
    pub fn run(&self, names: &[CityName]) -> Assignment {
        let started = Instant::now();
        let index = CandidateIndex::new(names);
        let mut statistics = SearchStatistics {
            cities: index.len(),
            duplicates_collapsed: index.duplicates(),
            ..Default::default()
        };
        debug!(
            cities = index.len(),
            duplicates = index.duplicates(),
            codes = index.code_count(),
            "candidate index built"
        );

        let mut state = SearchState::new(index.len());
        assign_forced(&index, &mut state, &mut statistics);

        let residual: Vec<CityIndex> = (0..index.len())
            .filter(|&city| !state.is_assigned(city))
            .collect();
        statistics.residual_cities = residual.len();
        debug!(
            forced = statistics.forced_assignments,
            rounds = statistics.forced_rounds,
            residual = residual.len(),
            "forced assignment finished"
        );

        let best = {
            let mut search = Backtrack::new(&index, &residual, &state, self.options, &mut statistics);
            search.explore(&mut state, 0);
            search.best
        };
        if statistics.budget_exhausted {
            warn!(
                limit = ?self.options.node_limit,
                "node limit reached; returning the best assignment found so far"
            );
        }

        let network = Network::from_entries(
            best.iter()
                .enumerate()
                .filter_map(|(city, code)| {
                    code.map(|code| CityEntry::new(index.city(city).clone(), code))
                })
                .collect(),
        );
        statistics.assigned = network.len();
        statistics.duration = started.elapsed();
        debug!(
            assigned = statistics.assigned,
            nodes = statistics.nodes_explored,
            "network built"
        );

        Assignment {
            network,
            statistics,
        }
    }
}

/// Phase 1: lock in codes no other city lists, until nothing changes.
fn assign_forced(index: &CandidateIndex, state: &mut SearchState, stats: &mut SearchStatistics) {
    loop {
        stats.forced_rounds += 1;
        let mut progress = false;
        for city in 0..index.len() {
            if state.is_assigned(city) {
                continue;
            }
            let forced = index
                .candidates(city)
                .iter()
                .copied()
                .find(|&code| !state.is_used(code) && index.is_exclusive(code));
            if let Some(code) = forced {
                trace!(city = %index.city(city), %code, "forced");
                state.assign(city, code);
                stats.forced_assignments += 1;
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }
    state.commit();
}

/// Phase 2 search context. The mutable `SearchState` is threaded through
/// `explore` by `&mut` and restored from its trail after every branch.
struct Backtrack<'a> {
    index: &'a CandidateIndex,
    residual: &'a [CityIndex],
    node_limit: Option<u64>,
    stats: &'a mut SearchStatistics,
    best: Vec<Option<Code>>,
    best_count: usize,
}

impl<'a> Backtrack<'a> {
    fn new(
        index: &'a CandidateIndex,
        residual: &'a [CityIndex],
        start: &SearchState,
        options: SearchOptions,
        stats: &'a mut SearchStatistics,
    ) -> Self {
        Self {
            index,
            residual,
            node_limit: options.node_limit,
            stats,
            best: start.assignments().to_vec(),
            best_count: start.assigned_count(),
        }
    }

    fn out_of_budget(&mut self) -> bool {
        if self
            .node_limit
            .is_some_and(|limit| self.stats.nodes_explored >= limit)
        {
            self.stats.budget_exhausted = true;
        }
        self.stats.budget_exhausted
    }

    /// Explore every assignment of `residual[depth..]`.
    fn explore(&mut self, state: &mut SearchState, depth: usize) {
        if self.out_of_budget() {
            return;
        }
        self.stats.nodes_explored += 1;

        let Some(&city) = self.residual.get(depth) else {
            self.stats.leaves_reached += 1;
            if state.assigned_count() > self.best_count {
                self.best_count = state.assigned_count();
                self.best.copy_from_slice(state.assignments());
                self.stats.improvements += 1;
                trace!(assigned = self.best_count, "improved assignment");
            }
            return;
        };

        let index = self.index;
        for &code in index.candidates(city) {
            if state.is_used(code) || !index.is_exclusive(code) {
                continue;
            }
            let mark = state.mark();
            state.assign(city, code);
            self.explore(state, depth + 1);
            state.backtrack_to(mark);
        }

        // Leaving this city out may let the rest do better.
        self.explore(state, depth + 1);
    }
}
