// Mutable search state with an undo trail

use hashbrown::HashSet;
use tla_core::Code;

use crate::index::CityIndex;

/// One assignment recorded on the trail, enough to undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    city: CityIndex,
    code: Code,
}

/// Assignment state shared by both search phases.
///
/// Every [`assign`](Self::assign) pushes a trail entry. A caller takes a
/// [`mark`](Self::mark) before a decision and calls
/// [`backtrack_to`](Self::backtrack_to) to undo everything made since,
/// which restores `assigned` and `used` exactly.
#[derive(Debug, Clone)]
pub struct SearchState {
    assigned: Vec<Option<Code>>,
    used: HashSet<Code>,
    assigned_count: usize,
    trail: Vec<TrailEntry>,
}

impl SearchState {
    /// Empty state for `city_count` cities.
    pub fn new(city_count: usize) -> Self {
        Self {
            assigned: vec![None; city_count],
            used: HashSet::new(),
            assigned_count: 0,
            trail: Vec::new(),
        }
    }

    /// Assign `code` to `city`.
    ///
    /// The city must be unassigned and the code unused.
    pub fn assign(&mut self, city: CityIndex, code: Code) {
        debug_assert!(self.assigned[city].is_none(), "city {city} already assigned");
        debug_assert!(!self.used.contains(&code), "code {code} already used");
        self.assigned[city] = Some(code);
        self.used.insert(code);
        self.assigned_count += 1;
        self.trail.push(TrailEntry { city, code });
    }

    /// Current trail position.
    #[inline]
    pub fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Undo every assignment made after `mark`, newest first.
    pub fn backtrack_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let Some(entry) = self.trail.pop() else {
                break;
            };
            self.assigned[entry.city] = None;
            self.used.remove(&entry.code);
            self.assigned_count -= 1;
        }
    }

    /// Make all current assignments permanent; they can no longer be undone.
    pub fn commit(&mut self) {
        self.trail.clear();
    }

    #[inline]
    pub fn is_assigned(&self, city: CityIndex) -> bool {
        self.assigned[city].is_some()
    }

    #[inline]
    pub fn is_used(&self, code: Code) -> bool {
        self.used.contains(&code)
    }

    pub fn code_of(&self, city: CityIndex) -> Option<Code> {
        self.assigned[city]
    }

    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    /// Per-city assignments, indexed by city.
    pub fn assignments(&self) -> &[Option<Code>] {
        &self.assigned
    }
}
