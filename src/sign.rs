//! Sign of an arbitrary-precision integer.

use core::ops::Neg;

/// Sign of a [`BigInt`][crate::BigInt].
///
/// Paired with a magnitude under a crate-wide invariant: the sign is
/// [`Sign::Zero`] exactly when the magnitude is canonically zero.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Sign {
    /// Less than zero.
    Negative,
    /// Zero.
    Zero,
    /// Greater than zero.
    Positive,
}

impl Sign {
    /// Whether this is [`Sign::Negative`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// Whether this is [`Sign::Zero`].
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }

    /// Sign of a product of values with signs `self` and `rhs`.
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}
