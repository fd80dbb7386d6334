// Candidate universe: every city's usable codes and who else claims them

use hashbrown::{HashMap, HashSet};
use tla_core::{CityName, Code, valid_codes};

/// Dense index of a city inside a [`CandidateIndex`].
pub type CityIndex = usize;

/// The candidate universe for one set of cities.
///
/// Cities are kept in first-appearance order with exact duplicates removed.
/// Each city's candidates are its generated codes that also pass the
/// validity rule, sorted. `claims` counts, per code, how many cities list it;
/// a code listed by exactly one city is the only kind that may be assigned.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    cities: Vec<CityName>,
    candidates: Vec<Vec<Code>>,
    claims: HashMap<Code, usize>,
    duplicates: usize,
}

impl CandidateIndex {
    /// Build the index for `names`, collapsing repeated names.
    pub fn new(names: &[CityName]) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
        let mut cities = Vec::with_capacity(names.len());
        let mut duplicates = 0;
        for name in names {
            if seen.insert(name.as_str()) {
                cities.push(name.clone());
            } else {
                duplicates += 1;
            }
        }

        let candidates: Vec<Vec<Code>> = cities.iter().map(valid_codes).collect();
        let mut claims: HashMap<Code, usize> = HashMap::new();
        for code in candidates.iter().flatten() {
            *claims.entry(*code).or_insert(0) += 1;
        }

        Self {
            cities,
            candidates,
            claims,
            duplicates,
        }
    }

    /// Number of distinct cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Input names dropped as repeats.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn cities(&self) -> &[CityName] {
        &self.cities
    }

    pub fn city(&self, city: CityIndex) -> &CityName {
        &self.cities[city]
    }

    /// Sorted candidate codes of `city`.
    pub fn candidates(&self, city: CityIndex) -> &[Code] {
        &self.candidates[city]
    }

    /// Number of cities listing `code` as a candidate.
    pub fn claim_count(&self, code: Code) -> usize {
        self.claims.get(&code).copied().unwrap_or(0)
    }

    /// Whether exactly one city lists `code`.
    ///
    /// For a code taken from a city's own candidates this means no other
    /// city, assigned or not, could also be abbreviated by it.
    pub fn is_exclusive(&self, code: Code) -> bool {
        self.claim_count(code) == 1
    }

    /// Total number of distinct candidate codes.
    pub fn code_count(&self) -> usize {
        self.claims.len()
    }
}
