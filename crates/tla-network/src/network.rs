// Network: the final list of (city, code) pairs and its consistency check

use std::fmt;
use std::ops::ControlFlow;

use tla_core::{CityName, Code, is_valid_code};

/// A city together with the code assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CityEntry {
    name: CityName,
    code: Code,
}

impl CityEntry {
    pub fn new(name: CityName, code: Code) -> Self {
        Self { name, code }
    }

    pub fn name(&self) -> &CityName {
        &self.name
    }

    pub fn code(&self) -> Code {
        self.code
    }

    /// Whether the entry's code is a valid code for its own name.
    pub fn check_rep(&self) -> bool {
        self.name.accepts(&self.code)
    }
}

/// A broken network invariant, as reported by [`Network::violations`].
///
/// Indices refer to positions in [`Network::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The entry's code is not a valid code for its own name.
    InvalidOwnCode { entry: usize, code: Code },
    /// Two entries carry the same code.
    DuplicateCode { first: usize, second: usize, code: Code },
    /// The code of `holder` is also a valid code for the name of `other`.
    AmbiguousCode {
        holder: usize,
        other: usize,
        code: Code,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidOwnCode { entry, code } => {
                write!(f, "entry {entry}: {code} is not a valid code for its city")
            }
            Violation::DuplicateCode {
                first,
                second,
                code,
            } => write!(f, "entries {first} and {second} share code {code}"),
            Violation::AmbiguousCode {
                holder,
                other,
                code,
            } => write!(
                f,
                "code {code} of entry {holder} is also a valid code for entry {other}"
            ),
        }
    }
}

/// An ordered set of city/code assignments.
///
/// A network produced by the assignment engine satisfies, for all distinct
/// entries `i` and `j`: every code is valid for its own city, `code[i] !=
/// code[j]`, and neither code is a valid code for the other city's name.
/// [`check_rep`](Self::check_rep) verifies this for any network, including
/// ones assembled by hand with [`from_entries`](Self::from_entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Network {
    cities: Vec<CityEntry>,
}

impl Network {
    /// An empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap explicit entries without checking them.
    pub fn from_entries(entries: Vec<CityEntry>) -> Self {
        Self { cities: entries }
    }

    pub fn entries(&self) -> &[CityEntry] {
        &self.cities
    }

    pub fn into_entries(self) -> Vec<CityEntry> {
        self.cities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityEntry> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The code assigned to the city called `name`, if any.
    pub fn code_of(&self, name: &str) -> Option<Code> {
        self.cities
            .iter()
            .find(|e| e.name.as_str() == name)
            .map(|e| e.code)
    }

    /// Whether every network invariant holds. Stops at the first violation.
    pub fn check_rep(&self) -> bool {
        self.scan(|_| ControlFlow::Break(())).is_continue()
    }

    /// Every invariant violation, in scan order.
    pub fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        let _ = self.scan(|v| {
            found.push(v);
            ControlFlow::Continue(())
        });
        found
    }

    fn scan(&self, mut report: impl FnMut(Violation) -> ControlFlow<()>) -> ControlFlow<()> {
        for (i, a) in self.cities.iter().enumerate() {
            if !a.check_rep() {
                report(Violation::InvalidOwnCode {
                    entry: i,
                    code: a.code,
                })?;
            }
            for (j, b) in self.cities.iter().enumerate().skip(i + 1) {
                if is_valid_code(a.name.as_str(), b.code.as_str()) {
                    report(Violation::AmbiguousCode {
                        holder: j,
                        other: i,
                        code: b.code,
                    })?;
                }
                if is_valid_code(b.name.as_str(), a.code.as_str()) {
                    report(Violation::AmbiguousCode {
                        holder: i,
                        other: j,
                        code: a.code,
                    })?;
                }
                if a.code == b.code {
                    report(Violation::DuplicateCode {
                        first: i,
                        second: j,
                        code: a.code,
                    })?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a CityEntry;
    type IntoIter = std::slice::Iter<'a, CityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

impl fmt::Display for Network {
    /// One `CODE<TAB>NAME` line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.cities {
            writeln!(f, "{}\t{}", entry.code, entry.name)?;
        }
        Ok(())
    }
}
