//! [`Int`] subtraction.

use super::Int;
use crate::word::borrowing_sub;
use core::ops::Sub;

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `self - rhs`, wrapping around on overflow.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut words = [0; WORDS];
        let mut borrow = 0;
        let mut i = 0;
        while i < WORDS {
            (words[i], borrow) = borrowing_sub(self.words[i], rhs.words[i], borrow);
            i += 1;
        }
        Self { words }
    }

    /// Computes `self - rhs`, returning `None` on overflow.
    ///
    /// Subtraction overflows exactly when the operands have opposite signs
    /// and the difference takes the subtrahend's.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let diff = self.wrapping_sub(rhs);
        if self.is_negative() != rhs.is_negative() && diff.is_negative() == rhs.is_negative() {
            None
        } else {
            Some(diff)
        }
    }
}

impl<const WORDS: usize> Sub<&Int<WORDS>> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn sub(self, rhs: &Int<WORDS>) -> Int<WORDS> {
        self.wrapping_sub(rhs)
    }
}

impl_binop_variants!(Sub, sub for Int<const WORDS: usize>);
impl_binop_assign!(SubAssign, sub_assign via - for Int<const WORDS: usize>);
