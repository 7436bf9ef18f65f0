//! [`Int`] negation.

use super::Int;
use crate::word::carrying_add;
use core::ops::Neg;

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `-self`, wrapping around on overflow.
    ///
    /// Negating [`Self::MIN`] yields `MIN` again: its magnitude has no
    /// positive counterpart in this width.
    pub const fn wrapping_neg(&self) -> Self {
        // Two's complement: invert every word, then add one.
        let mut words = [0; WORDS];
        let mut carry = 1;
        let mut i = 0;
        while i < WORDS {
            (words[i], carry) = carrying_add(!self.words[i], 0, carry);
            i += 1;
        }
        Self { words }
    }

    /// Computes `-self`, returning `None` for [`Self::MIN`].
    pub fn checked_neg(&self) -> Option<Self> {
        if *self == Self::MIN {
            None
        } else {
            Some(self.wrapping_neg())
        }
    }

    /// The magnitude of `self` as a two's-complement bit pattern.
    ///
    /// For [`Self::MIN`] the result is `MIN` itself, read unsigned.
    pub(crate) fn wrapping_abs(&self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            *self
        }
    }
}

impl<const WORDS: usize> Neg for Int<WORDS> {
    type Output = Int<WORDS>;

    fn neg(self) -> Int<WORDS> {
        self.wrapping_neg()
    }
}

impl<const WORDS: usize> Neg for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn neg(self) -> Int<WORDS> {
        self.wrapping_neg()
    }
}
