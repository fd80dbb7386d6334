//! Maximal ambiguity-free three-letter code assignment.
//!
//! Given a list of city names, [`build_network`] picks at most one code per
//! city so that no two cities share a code, no assigned code is also a valid
//! code of another city in the list, and as many cities as possible get a
//! code.
//!
//! ```
//! let network = tla_network::build_network(&["AAA", "AAB", "AAC"]).unwrap();
//! assert_eq!(network.len(), 3);
//! assert!(network.check_rep());
//! ```
//!
//! # Architecture
//!
//! - [`index`] -- Candidate universe: per-city codes and per-code claims
//! - [`state`] -- Assignment state with an undo trail
//! - [`engine`] -- Forced assignment followed by exhaustive backtracking
//! - [`network`] -- The result container and its consistency check
//! - [`options`] -- Search configuration
//! - [`stats`] -- Counters reported for each build

pub mod engine;
pub mod index;
pub mod network;
pub mod options;
pub mod state;
pub mod stats;

pub use engine::{Assignment, AssignmentEngine};
pub use network::{CityEntry, Network, Violation};
pub use options::SearchOptions;
pub use stats::SearchStatistics;
pub use tla_core::{CityName, Code, TlaError, generate_valid_tlas, is_valid_code};

/// Error type for network construction.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// An input name broke the upper-case-letters-and-spaces rule.
    #[error("invalid city name: {0}")]
    InvalidCityName(#[from] TlaError),
}

/// Build a maximal network for `names` with default options.
///
/// Every name must consist of `A`-`Z` and spaces only. Empty input yields an
/// empty network. Repeated names count as one city.
pub fn build_network<S: AsRef<str>>(names: &[S]) -> Result<Network, NetworkError> {
    let names = parse_names(names)?;
    Ok(AssignmentEngine::default().run(&names).network)
}

/// Validate every name, stopping at the first bad one.
pub fn parse_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<CityName>, NetworkError> {
    names
        .iter()
        .map(|name| CityName::new(name.as_ref()).map_err(NetworkError::from))
        .collect()
}
