//! Arbitrary-precision signed integers.

mod add;
mod bits;
mod bitwise;
mod cmp;
mod div;
mod encoding;
mod fmt;
mod from;
mod gcd;
mod modular;
mod mul;
mod prime;
mod shl;
mod shr;

pub use fmt::{DecimalStyle, PlainStyle};

use crate::{Sign, magnitude, word::Word};
use alloc::vec::Vec;
use core::ops::Neg;

/// Arbitrary-precision signed integer.
///
/// Stored as a [`Sign`] paired with a canonical magnitude: a word sequence,
/// least significant first, with no superfluous high-order zero words. The
/// sign is [`Sign::Zero`] exactly when the magnitude is empty.
///
/// Values are immutable: every operation is a pure function of its inputs,
/// so sharing values across threads needs no synchronization.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt {
    /// Sign of the value.
    sign: Sign,
    /// Absolute value, least significant word first, canonical.
    magnitude: Vec<Word>,
}

impl BigInt {
    /// The value `0`.
    pub const ZERO: Self = Self {
        sign: Sign::Zero,
        magnitude: Vec::new(),
    };

    /// Assembles a value from a sign and a magnitude, restoring the
    /// canonical sign/magnitude pairing.
    ///
    /// The requested sign only applies when the trimmed magnitude is
    /// nonzero; a zero magnitude always pairs with [`Sign::Zero`].
    pub(crate) fn from_sign_magnitude(sign: Sign, mut magnitude: Vec<Word>) -> Self {
        magnitude::trim(&mut magnitude);
        if magnitude.is_empty() {
            Self::ZERO
        } else {
            debug_assert!(!sign.is_zero(), "nonzero magnitude with zero sign");
            Self { sign, magnitude }
        }
    }

    /// The sign of this value.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// The absolute value as a word slice, least significant first.
    pub(crate) fn magnitude(&self) -> &[Word] {
        &self.magnitude
    }

    /// Whether this value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }

    /// Whether this value is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Whether this value is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self.sign, Sign::Positive)
    }

    /// Whether this value is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.magnitude.first().is_some_and(|w| w & 1 == 1)
    }

    /// Computes the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => Self {
                sign: Sign::Positive,
                magnitude: self.magnitude.clone(),
            },
            _ => self.clone(),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            sign: -self.sign,
            magnitude: self.magnitude.clone(),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl num_traits::Zero for BigInt {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for BigInt {
    fn one() -> Self {
        Self::from(1u8)
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude == [1]
    }
}
