// Validated city names

use std::fmt;
use std::str::FromStr;

use crate::TlaError;
use crate::code::Code;
use crate::validity::is_valid_code;

/// A city name made of upper-case ASCII letters and spaces.
///
/// Spaces carry no meaning for codes; [`CityName::letters`] holds the name
/// with every space removed, and all code derivation works on that form.
/// The empty name is accepted and simply has no codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityName {
    name: String,
    letters: String,
}

impl CityName {
    /// Validate and wrap a city name.
    ///
    /// Returns [`TlaError::InvalidNameChar`] for the first character that is
    /// neither `A`-`Z` nor a space. `position` counts characters, not bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, TlaError> {
        let name = name.into();
        if let Some((position, ch)) = name
            .chars()
            .enumerate()
            .find(|&(_, c)| !(c.is_ascii_uppercase() || c == ' '))
        {
            return Err(TlaError::InvalidNameChar {
                name,
                ch,
                position,
            });
        }
        let letters = name.chars().filter(|&c| c != ' ').collect();
        Ok(Self { name, letters })
    }

    /// The name exactly as given.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The name with spaces removed.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Whether `code` is a valid code for this city.
    pub fn accepts(&self, code: &Code) -> bool {
        is_valid_code(&self.letters, code.as_str())
    }

    /// Whether the name has no letters at all.
    pub fn is_blank(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

impl FromStr for CityName {
    type Err = TlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CityName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CityName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
