//! [`Int`] addition.

use super::Int;
use crate::word::carrying_add;
use core::ops::Add;

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `self + rhs`, wrapping around on overflow.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut words = [0; WORDS];
        let mut carry = 0;
        let mut i = 0;
        while i < WORDS {
            (words[i], carry) = carrying_add(self.words[i], rhs.words[i], carry);
            i += 1;
        }
        Self { words }
    }

    /// Computes `self + rhs`, returning `None` on overflow.
    ///
    /// Two's-complement addition overflows exactly when both operands share
    /// a sign the sum does not.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let sum = self.wrapping_add(rhs);
        if self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative() {
            None
        } else {
            Some(sum)
        }
    }
}

impl<const WORDS: usize> Add<&Int<WORDS>> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn add(self, rhs: &Int<WORDS>) -> Int<WORDS> {
        self.wrapping_add(rhs)
    }
}

impl_binop_variants!(Add, add for Int<const WORDS: usize>);
impl_binop_assign!(AddAssign, add_assign via + for Int<const WORDS: usize>);
