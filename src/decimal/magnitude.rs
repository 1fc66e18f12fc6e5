//! Unsigned digit-sequence magnitudes.
//!
//! A [`Magnitude`] is the storage substrate for every kernel: a growable
//! sequence of decimal digits, least significant first. The canonical
//! form has no high-index zero digits, and zero itself is the single
//! digit `[0]`.

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::decimal::Digit;

/// An unsigned arbitrary-precision decimal magnitude.
///
/// Digits are stored from least significant (index 0) to most
/// significant. Every constructor normalizes to canonical form, so two
/// magnitudes are equal iff their digit vectors are equal. The serde
/// representation is the bare digit vector, routed through
/// [`from_lsb_digits`] on the way in so deserialized magnitudes are
/// canonical too.
///
/// [`from_lsb_digits`]: Magnitude::from_lsb_digits
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Digit>", into = "Vec<Digit>")]
pub struct Magnitude {
    /// Digits from least significant (index 0) to most significant.
    digits: Vec<Digit>,
}

impl Magnitude {
    /// The magnitude zero.
    #[inline]
    pub fn zero() -> Self {
        Self { digits: vec![Digit::ZERO] }
    }

    /// The magnitude one.
    #[inline]
    pub fn one() -> Self {
        Self { digits: vec![Digit::ONE] }
    }

    /// Create from a least-significant-first digit vector.
    ///
    /// High-index zeros are stripped; an empty or all-zero input
    /// becomes canonical zero.
    pub fn from_lsb_digits(mut digits: Vec<Digit>) -> Self {
        while digits.len() > 1 && digits.last().is_some_and(|d| d.is_zero()) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(Digit::ZERO);
        }
        Self { digits }
    }

    /// Create from a most-significant-first digit slice, the order
    /// digits arrive in from parsed input.
    pub fn from_msb_digits(digits: &[Digit]) -> Self {
        Self::from_lsb_digits(digits.iter().rev().copied().collect())
    }

    /// Parse a run of decimal characters (no sign, no whitespace).
    ///
    /// Returns `None` on an empty string or any non-digit character.
    pub fn parse_digits(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            digits.push(Digit::from_char(c)?);
        }
        Some(Self::from_msb_digits(&digits))
    }

    /// Number of digits in canonical form (zero has length 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Get a single digit by index (0 = least significant).
    ///
    /// # Panics
    /// Panics if the index is out of range.
    #[inline]
    pub fn digit(&self, index: usize) -> Digit {
        self.digits[index]
    }

    /// Digit value at an index, reading past the high end as zero.
    /// The kernels use this to walk two operands of different lengths.
    #[inline]
    pub fn digit_value(&self, index: usize) -> u8 {
        self.digits.get(index).map_or(0, |d| d.value())
    }

    /// The underlying digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Check if this magnitude is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.is_zero())
    }

    /// Check if this magnitude is exactly one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == Digit::ONE
    }

    /// Parity, read off the least-significant digit.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.digits[0].is_even()
    }

    /// Shift up one decimal position and set the vacated low digit:
    /// `self * 10 + low`. This is the "bring down the next digit" step
    /// of long division.
    pub(crate) fn shifted_up(&self, low: Digit) -> Self {
        if self.is_zero() {
            return Self { digits: vec![low] };
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(low);
        digits.extend_from_slice(&self.digits);
        Self { digits }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<Digit>> for Magnitude {
    fn from(digits: Vec<Digit>) -> Self {
        Self::from_lsb_digits(digits)
    }
}

impl From<Magnitude> for Vec<Digit> {
    fn from(magnitude: Magnitude) -> Self {
        magnitude.digits
    }
}

impl Ord for Magnitude {
    /// Length decides first; equal lengths compare digit by digit from
    /// the most significant end.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        for index in (0..self.digits.len()).rev() {
            match self.digits[index].cmp(&other.digits[index]) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({})", self)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.digits.len()).rev() {
            write!(f, "{}", self.digits[index])?;
        }
        Ok(())
    }
}
