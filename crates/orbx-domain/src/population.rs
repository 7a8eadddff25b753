//! Arbitrary-precision population counts.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

/// A non-negative population count of unbounded magnitude.
///
/// Never converted through a float. The textual form is plain decimal digits
/// with no grouping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Population(BigUint);

/// Returned when a population string is not a grouped decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid population")]
pub struct ParsePopulationError;

impl Population {
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    /// Parse a count that may use `.` as a thousands separator.
    ///
    /// Surrounding whitespace and every `.` are removed before parsing, so
    /// `" 1.234.567 "` yields `1234567`. Anything but ASCII digits left over
    /// (signs, commas, letters, inner spaces) is rejected, as is an empty
    /// remainder.
    ///
    /// ```
    /// use orbx_domain::population::Population;
    ///
    /// let p = Population::parse_grouped("1.234.567").unwrap();
    /// assert_eq!(p.to_string(), "1234567");
    /// assert!(Population::parse_grouped("12a").is_err());
    /// ```
    pub fn parse_grouped(raw: &str) -> Result<Self, ParsePopulationError> {
        let digits: String = raw.trim().chars().filter(|c| *c != '.').collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePopulationError);
        }
        BigUint::from_str(&digits)
            .map(Self)
            .map_err(|_| ParsePopulationError)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

impl From<u64> for Population {
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl From<BigUint> for Population {
    fn from(v: BigUint) -> Self {
        Self(v)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Population {
    type Err = ParsePopulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_grouped(s)
    }
}
