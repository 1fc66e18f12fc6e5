//! # BigNumber
//!
//! Arbitrary-precision signed decimal integer arithmetic.
//!
//! Values are stored sign-magnitude over a least-significant-first
//! digit sequence, with schoolbook kernels for addition, subtraction,
//! multiplication, long division, and exponentiation by squaring.
//!
//! ```
//! use bignumber::BigNumber;
//!
//! let a: BigNumber = "999".parse()?;
//! let b: BigNumber = "1".parse()?;
//! assert_eq!(a.add(&b).to_string(), "1000");
//!
//! let (quotient, remainder) = a.div_rem(&"7".parse()?)?;
//! assert_eq!(quotient.to_string(), "142");
//! assert_eq!(remainder.to_string(), "5");
//! # Ok::<(), bignumber::NumError>(())
//! ```

pub mod decimal;

// Re-export commonly used types
pub use decimal::{BigNumber, Digit, Magnitude, NumError, Sign};
