//! Magnitude-level arithmetic kernels.
//!
//! Schoolbook addition, subtraction, multiplication, and long division
//! over decimal magnitudes, plus the halve/decrement helpers that drive
//! exponentiation. Sign dispatch lives in [`BigNumber`]; every kernel
//! here works on unsigned magnitudes and returns a fresh value without
//! touching its operands.
//!
//! [`BigNumber`]: crate::decimal::BigNumber

use crate::decimal::{Digit, Magnitude};

/// Add two magnitudes.
///
/// Walks both operands from the least-significant digit, storing
/// `sum % 10` and carrying `sum / 10`, and keeps going past the longer
/// operand while a carry remains.
pub fn add(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let length = a.len().max(b.len());
    let mut digits = Vec::with_capacity(length + 1);
    let mut carry = 0u8;

    let mut index = 0;
    while index < length || carry > 0 {
        let sum = a.digit_value(index) + b.digit_value(index) + carry;
        digits.push(Digit::new_unchecked(sum % 10));
        carry = sum / 10;
        index += 1;
    }

    Magnitude::from_lsb_digits(digits)
}

/// Subtract `b` from `a`.
///
/// The caller guarantees `a >= b`; the signed layer picks the operand
/// order (and the result sign) before calling in. Borrows propagate by
/// adding 10 to a negative digit, and high-index zeros left behind by
/// the subtraction are stripped.
pub fn subtract(a: &Magnitude, b: &Magnitude) -> Magnitude {
    debug_assert!(b <= a, "subtract requires a >= b");

    let mut digits = Vec::with_capacity(a.len());
    let mut borrow = 0i8;

    for index in 0..a.len() {
        let mut value = a.digit_value(index) as i8 - b.digit_value(index) as i8 - borrow;
        if value < 0 {
            value += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits.push(Digit::new_unchecked(value as u8));
    }

    Magnitude::from_lsb_digits(digits)
}

/// Multiply two magnitudes using schoolbook multiplication.
///
/// The product of an `n`-digit and an `m`-digit magnitude needs at most
/// `n + m` digits; the accumulator is sized accordingly and partial
/// products land at `accumulator[i + j]` with carry propagation.
pub fn multiply(a: &Magnitude, b: &Magnitude) -> Magnitude {
    if a.is_zero() || b.is_zero() {
        return Magnitude::zero();
    }

    let mut accumulator = vec![0u16; a.len() + b.len()];

    for i in 0..a.len() {
        let digit = a.digit_value(i) as u16;
        if digit == 0 {
            continue; // Multiplying by zero contributes nothing
        }

        let mut carry = 0u16;
        let mut j = 0;
        while j < b.len() || carry > 0 {
            let value = accumulator[i + j] + digit * b.digit_value(j) as u16 + carry;
            accumulator[i + j] = value % 10;
            carry = value / 10;
            j += 1;
        }
    }

    let digits = accumulator
        .into_iter()
        .map(|value| Digit::new_unchecked(value as u8))
        .collect();
    Magnitude::from_lsb_digits(digits)
}

/// Divide `dividend` by `divisor`, returning `(quotient, remainder)`.
///
/// Long division from the most-significant digit: each step brings the
/// next dividend digit down into a running remainder, then finds the
/// quotient digit by repeated subtraction of the divisor (at most nine
/// rounds per position). A divisor of one short-circuits.
///
/// The caller guarantees a nonzero divisor; the signed layer turns a
/// zero divisor into an error before reaching this kernel.
pub fn div_rem(dividend: &Magnitude, divisor: &Magnitude) -> (Magnitude, Magnitude) {
    debug_assert!(!divisor.is_zero(), "div_rem requires a nonzero divisor");

    if dividend.is_zero() {
        return (Magnitude::zero(), Magnitude::zero());
    }
    if divisor.is_one() {
        return (dividend.clone(), Magnitude::zero());
    }

    let mut quotient = vec![Digit::ZERO; dividend.len()];
    let mut rest = Magnitude::zero();

    for index in (0..dividend.len()).rev() {
        rest = rest.shifted_up(dividend.digit(index));

        let mut count = 0u8;
        while divisor <= &rest {
            count += 1;
            rest = subtract(&rest, divisor);
        }
        quotient[index] = Digit::new_unchecked(count);
    }

    (Magnitude::from_lsb_digits(quotient), rest)
}

/// Halve a magnitude, truncating toward zero.
///
/// Runs most-significant-first, carrying the odd remainder of each
/// digit down into the next position. Exponentiation by squaring uses
/// this to halve an even exponent.
pub fn halve(m: &Magnitude) -> Magnitude {
    let mut digits = vec![Digit::ZERO; m.len()];
    let mut remainder = 0u8;

    for index in (0..m.len()).rev() {
        let value = remainder * 10 + m.digit_value(index);
        digits[index] = Digit::new_unchecked(value / 2);
        remainder = value % 2;
    }

    Magnitude::from_lsb_digits(digits)
}

/// Subtract one from a nonzero magnitude.
pub fn decrement(m: &Magnitude) -> Magnitude {
    debug_assert!(!m.is_zero(), "decrement requires a nonzero magnitude");
    subtract(m, &Magnitude::one())
}
