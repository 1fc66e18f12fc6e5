//! Arbitrary-precision decimal primitives.
//!
//! This module provides the core types for signed decimal arithmetic:
//! - [`Digit`] - A single decimal digit (0–9)
//! - [`Magnitude`] - An unsigned digit sequence, least significant first
//! - [`BigNumber`] - A sign-magnitude integer with the full operation set

mod digit;
mod magnitude;
mod bignum;
pub mod arith;

pub use digit::Digit;
pub use magnitude::Magnitude;
pub use bignum::{BigNumber, NumError, Sign};
