// Three-letter code value type

use std::fmt;
use std::str::FromStr;

use crate::TlaError;

/// Number of letters in a code.
pub const CODE_LEN: usize = 3;

/// A three-letter code: exactly three ASCII upper-case letters.
///
/// Ordering is lexicographic on the letters, which gives the engine a stable
/// order when several candidates are equally good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LEN]);

impl Code {
    /// Parse a code from a string.
    ///
    /// The string must consist of exactly three characters in `A`-`Z`.
    pub fn parse(s: &str) -> Result<Self, TlaError> {
        match *s.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            _ => Err(TlaError::InvalidCode(s.to_string())),
        }
    }

    /// Build a code from letters already known to be `A`-`Z`.
    pub(crate) fn from_letters(letters: [u8; CODE_LEN]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self(letters)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Always ASCII, so this never falls back.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The three letters as characters.
    pub fn letters(&self) -> [char; CODE_LEN] {
        self.0.map(char::from)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Code {
    type Err = TlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Code {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Code {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_upper_case_code() {
        let code = Code::parse("NYK").unwrap();
        assert_eq!(code.as_str(), "NYK");
        assert_eq!(code.letters(), ['N', 'Y', 'K']);
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(
            Code::parse("AB").unwrap_err(),
            TlaError::InvalidCode("AB".to_string())
        );
        assert!(Code::parse("ABCD").is_err());
        assert!(Code::parse("").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Code::parse("A1C").is_err());
        assert!(Code::parse("A C").is_err());
        assert!(Code::parse("nyk").is_err());
        // Three bytes but not three ASCII letters
        assert!(Code::parse("\u{00C4}B").is_err());
    }

    #[test]
    fn display_honours_width() {
        let code: Code = "LON".parse().unwrap();
        assert_eq!(format!("{code}"), "LON");
        assert_eq!(format!("[{code:<5}]"), "[LON  ]");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut codes: Vec<Code> = ["NYK", "ABC", "ABD", "LON"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        codes.sort();
        let sorted: Vec<&str> = codes.iter().map(Code::as_str).collect();
        assert_eq!(sorted, ["ABC", "ABD", "LON", "NYK"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_plain_string() {
        let code = Code::parse("LON").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"LON\"");
        let back: Code = serde_json::from_str("\"LON\"").unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<Code>("\"LO\"").is_err());
    }
}
