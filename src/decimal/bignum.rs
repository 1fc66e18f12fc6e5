//! Signed arbitrary-precision decimal integers.
//!
//! [`BigNumber`] pairs a [`Magnitude`] with a [`Sign`] and layers sign
//! dispatch over the magnitude kernels in [`arith`]. Every operation
//! returns a fresh value and leaves its operands untouched; every
//! fallible operation returns a [`NumError`] instead of producing a
//! poisoned value.
//!
//! [`arith`]: crate::decimal::arith

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::decimal::{arith, Digit, Magnitude};

/// Errors for construction and arithmetic.
///
/// Both kinds are terminal: an operation that fails never yields a
/// value, so an errored result cannot leak into further arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumError {
    /// Input failed decimal-number validation, or a negative exponent
    /// was passed to [`BigNumber::pow`].
    #[error("invalid number")]
    Invalid,
    /// A zero divisor was passed to division or modulo.
    #[error("division by zero")]
    DivisionByZero,
}

/// The sign of a [`BigNumber`].
///
/// Zero is always stored with a positive sign, so `Negative` implies a
/// nonzero magnitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sign {
    /// Negative (-1)
    Negative,
    /// Positive (+1)
    #[default]
    Positive,
}

impl Sign {
    /// Flip positive to negative and back.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    /// The sign of a product: positive iff the factors agree.
    #[inline]
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    /// Convert to +1 or -1.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }
}

/// An arbitrary-precision signed decimal integer.
///
/// Construction goes through one of four entry points: an integer
/// (`From`/[`from_i128`]), a decimal string ([`FromStr`]), a raw digit
/// sequence ([`from_digits`]), or a copy (`Clone`). All of them
/// normalize: magnitudes carry no leading zeros and zero is positive.
///
/// [`from_i128`]: BigNumber::from_i128
/// [`from_digits`]: BigNumber::from_digits
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawBigNumber", into = "RawBigNumber")]
pub struct BigNumber {
    sign: Sign,
    magnitude: Magnitude,
}

/// Serde mirror of [`BigNumber`]. Deserialization funnels through
/// [`BigNumber::from_parts`] so a stored negative zero comes back
/// normalized like every other constructor's output.
#[derive(Serialize, Deserialize)]
struct RawBigNumber {
    sign: Sign,
    magnitude: Magnitude,
}

impl From<RawBigNumber> for BigNumber {
    fn from(raw: RawBigNumber) -> Self {
        BigNumber::from_parts(raw.sign, raw.magnitude)
    }
}

impl From<BigNumber> for RawBigNumber {
    fn from(number: BigNumber) -> Self {
        RawBigNumber { sign: number.sign, magnitude: number.magnitude }
    }
}

impl BigNumber {
    /// The value zero.
    #[inline]
    pub fn zero() -> Self {
        Self { sign: Sign::Positive, magnitude: Magnitude::zero() }
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        Self { sign: Sign::Positive, magnitude: Magnitude::one() }
    }

    /// Assemble from a sign and magnitude, normalizing zero's sign
    /// to positive.
    pub fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        if magnitude.is_zero() {
            Self::zero()
        } else {
            Self { sign, magnitude }
        }
    }

    /// Create from any native integer value.
    pub fn from_i128(value: i128) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut rest = value.unsigned_abs();
        let mut digits = Vec::new();
        loop {
            digits.push(Digit::new_unchecked((rest % 10) as u8));
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        Self::from_parts(sign, Magnitude::from_lsb_digits(digits))
    }

    /// Create from a most-significant-first sequence of raw digit
    /// values. The sequence form's optional sign marker becomes the
    /// explicit `sign` argument.
    ///
    /// An empty sequence or any value above 9 is [`NumError::Invalid`].
    pub fn from_digits(sign: Sign, digits: &[u8]) -> Result<Self, NumError> {
        if digits.is_empty() {
            return Err(NumError::Invalid);
        }
        let mut parsed = Vec::with_capacity(digits.len());
        for &value in digits {
            parsed.push(Digit::new(value).ok_or(NumError::Invalid)?);
        }
        Ok(Self::from_parts(sign, Magnitude::from_msb_digits(&parsed)))
    }

    /// The sign of this value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The unsigned magnitude of this value.
    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Check if this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if this value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// Check if this value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Parity, read off the least-significant digit.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.magnitude.is_even()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Self { sign: Sign::Positive, magnitude: self.magnitude.clone() }
    }

    /// Total order over values.
    ///
    /// Differing signs decide immediately; equal signs compare
    /// magnitudes, with the order reversed on the negative side.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Add, returning a new value.
    ///
    /// Same signs take the magnitude-add fast path. Mixed signs become
    /// a subtraction of magnitudes under the sign of whichever operand
    /// dominates.
    pub fn add(&self, other: &Self) -> Self {
        if self.sign == other.sign {
            return Self::from_parts(self.sign, arith::add(&self.magnitude, &other.magnitude));
        }
        match self.magnitude.cmp(&other.magnitude) {
            Ordering::Greater => {
                Self::from_parts(self.sign, arith::subtract(&self.magnitude, &other.magnitude))
            }
            Ordering::Less => {
                Self::from_parts(other.sign, arith::subtract(&other.magnitude, &self.magnitude))
            }
            Ordering::Equal => Self::zero(),
        }
    }

    /// Subtract, returning a new value.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&-other)
    }

    /// Multiply, returning a new value.
    ///
    /// Either operand being zero short-circuits to canonical zero
    /// without running the schoolbook loop.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::from_parts(
            self.sign.product(other.sign),
            arith::multiply(&self.magnitude, &other.magnitude),
        )
    }

    /// Divide, returning `(quotient, remainder)`.
    ///
    /// Truncated division: the quotient's sign is the product of the
    /// operand signs, the remainder takes the dividend's sign, and
    /// `self == quotient * divisor + remainder` holds for every sign
    /// combination. The divisor-zero check runs before any shortcut,
    /// so `0 / 0` is still [`NumError::DivisionByZero`].
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let (quotient, remainder) = arith::div_rem(&self.magnitude, &divisor.magnitude);
        Ok((
            Self::from_parts(self.sign.product(divisor.sign), quotient),
            Self::from_parts(self.sign, remainder),
        ))
    }

    /// The remainder of truncated division.
    pub fn modulo(&self, divisor: &Self) -> Result<Self, NumError> {
        let (_, remainder) = self.div_rem(divisor)?;
        Ok(remainder)
    }

    /// Raise to a non-negative integer exponent by squaring.
    ///
    /// A negative exponent is [`NumError::Invalid`]. Exponent zero
    /// yields one (including `0^0`), exponent one yields the base.
    /// Otherwise the exponent's least-significant digit drives the
    /// square-and-multiply loop: odd multiplies the accumulator and
    /// decrements, even squares the running base and halves.
    pub fn pow(&self, exponent: &Self) -> Result<Self, NumError> {
        if exponent.is_negative() {
            return Err(NumError::Invalid);
        }
        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if exponent.magnitude.is_one() {
            return Ok(self.clone());
        }

        let mut exponent = exponent.magnitude.clone();
        let mut base = self.clone();
        let mut result = Self::one();
        while !exponent.is_zero() {
            if exponent.is_even() {
                base = base.mul(&base);
                exponent = arith::halve(&exponent);
            } else {
                result = result.mul(&base);
                exponent = arith::decrement(&exponent);
            }
        }
        Ok(result)
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigNumber {
    type Err = NumError;

    /// Parse a string matching `[+-]?\d+`. Anything else, including
    /// the empty string or a bare sign, is [`NumError::Invalid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s.strip_prefix('+').unwrap_or(s)),
        };
        let magnitude = Magnitude::parse_digits(rest).ok_or(NumError::Invalid)?;
        Ok(Self::from_parts(sign, magnitude))
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({})", self)
    }
}

impl fmt::Display for BigNumber {
    /// Digits most-significant first, with a `-` prefix iff the value
    /// is negative. Zero never carries a sign; `+` is never printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for BigNumber {
            fn from(value: $t) -> Self {
                BigNumber::from_i128(value as i128)
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        Self::from_parts(self.sign.flip(), self.magnitude)
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        BigNumber::from_parts(self.sign.flip(), self.magnitude.clone())
    }
}

// Operators are implemented on references only: a by-value impl would
// shadow the borrowing inherent methods of the same name during method
// resolution.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $delegate:ident) => {
        impl $trait for &BigNumber {
            type Output = BigNumber;

            fn $method(self, rhs: &BigNumber) -> BigNumber {
                BigNumber::$delegate(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
