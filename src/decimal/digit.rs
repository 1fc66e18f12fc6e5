//! Single decimal digit.
//!
//! A digit holds one value in 0..=9 and is the unit every arithmetic
//! kernel operates on. Magnitudes store digits least significant first.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single decimal digit (0–9).
///
/// Stored as a plain `u8`; the constructors guarantee the value
/// never leaves the decimal range. Deserialization routes through
/// [`TryFrom<u8>`] so the range invariant holds on that path too.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The digit 0.
    pub const ZERO: Digit = Digit(0);

    /// The digit 1.
    pub const ONE: Digit = Digit(1);

    /// All ten digit values in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0), Digit(1), Digit(2), Digit(3), Digit(4),
        Digit(5), Digit(6), Digit(7), Digit(8), Digit(9),
    ];

    /// Create a digit from a raw value, rejecting anything above 9.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Create a digit from a value the caller has already reduced mod 10.
    ///
    /// In debug mode, panics on values above 9.
    #[inline]
    pub(crate) fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= 9, "digit value out of range: {}", value);
        Digit(value)
    }

    /// Create a digit from an ASCII character `'0'..='9'`.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    /// Get the numeric value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Render as an ASCII character.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Returns true if this digit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parity of the digit. The least-significant digit's parity
    /// decides the parity of the whole number.
    #[inline]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::from_char(c).ok_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range() {
        for value in 0..=9u8 {
            assert_eq!(Digit::new(value).map(Digit::value), Some(value));
        }
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
    }

    #[test]
    fn test_char_roundtrip() {
        for d in Digit::ALL {
            assert_eq!(Digit::from_char(d.to_char()), Some(d));
        }
    }

    #[test]
    fn test_from_char_rejects_non_digits() {
        for c in ['a', '-', '+', ' ', 'é', '٣'] {
            assert_eq!(Digit::from_char(c), None, "'{}' should not parse", c);
        }
    }

    #[test]
    fn test_parity() {
        assert!(Digit::ZERO.is_even());
        assert!(!Digit::ONE.is_even());
        for d in Digit::ALL {
            assert_eq!(d.is_even(), d.value() % 2 == 0);
        }
    }

    #[test]
    fn test_ordering_matches_values() {
        for a in Digit::ALL {
            for b in Digit::ALL {
                assert_eq!(a.cmp(&b), a.value().cmp(&b.value()));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Digit::new(7).unwrap()), "7");
        assert_eq!(format!("{:?}", Digit::new(7).unwrap()), "Digit(7)");
    }

    #[test]
    fn test_serde_enforces_range() {
        let d: Digit = serde_json::from_str("9").unwrap();
        assert_eq!(d.value(), 9);
        assert_eq!(serde_json::to_string(&d).unwrap(), "9");

        assert!(serde_json::from_str::<Digit>("10").is_err());
        assert!(serde_json::from_str::<Digit>("17").is_err());
        assert!(serde_json::from_str::<Digit>("255").is_err());
    }
}
