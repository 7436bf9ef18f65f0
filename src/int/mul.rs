//! [`Int`] multiplication.

use super::Int;
use crate::word::carrying_mul_add;
use core::ops::Mul;

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `self * rhs`, wrapping around on overflow.
    ///
    /// Schoolbook multiplication truncated to the low `WORDS` words; the
    /// truncation of the full product is the same for signed and unsigned
    /// readings of the operands, so no sign handling is needed.
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut words = [0; WORDS];
        let mut i = 0;
        while i < WORDS {
            let mut carry = 0;
            let mut j = 0;
            while i + j < WORDS {
                (words[i + j], carry) = carrying_mul_add(self.words[i], rhs.words[j], words[i + j], carry);
                j += 1;
            }
            i += 1;
        }
        Self { words }
    }

    /// Computes `self * rhs`, returning `None` on overflow.
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Self::try_from_big_int(&(self.to_big_int() * rhs.to_big_int())).ok()
    }
}

impl<const WORDS: usize> Mul<&Int<WORDS>> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn mul(self, rhs: &Int<WORDS>) -> Int<WORDS> {
        self.wrapping_mul(rhs)
    }
}

impl_binop_variants!(Mul, mul for Int<const WORDS: usize>);
impl_binop_assign!(MulAssign, mul_assign via * for Int<const WORDS: usize>);
