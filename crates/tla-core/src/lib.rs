//! Core types and string rules for three-letter city codes.
//!
//! A city name is a string of upper-case letters and spaces. A code is three
//! upper-case letters picked from the name in order, subject to the anchoring
//! rule implemented in [`validity`].
//!
//! # Architecture
//!
//! - [`name`] -- Validated city names and their space-stripped letters
//! - [`code`] -- The three-letter code value type
//! - [`validity`] -- The code validity rule
//! - [`candidates`] -- Enumeration of every 3-letter subsequence of a name

pub mod candidates;
pub mod code;
pub mod name;
pub mod validity;

pub use candidates::{generate_valid_tlas, valid_codes};
pub use code::{CODE_LEN, Code};
pub use name::CityName;
pub use validity::is_valid_code;

/// Error type for rejected names and codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TlaError {
    /// A city name contains something other than `A`-`Z` or a space.
    #[error("invalid character {ch:?} at position {position} in city name {name:?}")]
    InvalidNameChar {
        name: String,
        ch: char,
        position: usize,
    },
    /// A code string is not exactly three `A`-`Z` letters.
    #[error("invalid code {0:?}: expected three upper-case letters")]
    InvalidCode(String),
}
