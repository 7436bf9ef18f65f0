//! Error types.

use core::fmt;

/// Result type with the `bigmath` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Every failure the crate can report.
///
/// All errors are detected before any buffer access and are tied to a single
/// call; a failed operation never leaves a partially-computed value behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Division or remainder by zero.
    DivideByZero,

    /// Modular operation with a zero modulus.
    ZeroModulus,

    /// Negative exponent where only non-negative exponents are defined.
    NegativeExponent,

    /// No modular inverse exists: operand and modulus are not coprime.
    NotInvertible,

    /// Narrowing conversion lost information, or the input value cannot be
    /// represented (e.g. a non-finite float, a negative value in an
    /// unsigned encoding).
    Overflow,

    /// Malformed text: empty input, an invalid digit for the radix, or a
    /// radix outside `[2, 36]`.
    Format,

    /// Byte input whose length does not match the fixed-width type.
    Length,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivideByZero => f.write_str("division by zero"),
            Error::ZeroModulus => f.write_str("modulus is zero"),
            Error::NegativeExponent => f.write_str("exponent is negative"),
            Error::NotInvertible => f.write_str("no modular inverse exists"),
            Error::Overflow => f.write_str("value out of range"),
            Error::Format => f.write_str("malformed number text"),
            Error::Length => f.write_str("byte input has the wrong length"),
        }
    }
}

impl core::error::Error for Error {}
