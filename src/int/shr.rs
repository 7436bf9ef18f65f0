//! [`Int`] right shifts.

use super::Int;
use crate::word::Word;
use core::ops::{Shr, ShrAssign};

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `self >> amount`, masking the amount to `BITS - 1` the way
    /// the primitive `wrapping_shr` does.
    ///
    /// The shift is arithmetic: vacated high bits take the sign bit's
    /// value.
    pub fn wrapping_shr(&self, amount: u32) -> Self {
        let amount = amount % Self::BITS;
        let word_off = (amount / Word::BITS) as usize;
        let bit_off = amount % Word::BITS;
        let fill = self.sign_word();
        let mut words = [0; WORDS];
        for i in 0..WORDS {
            let src = i + word_off;
            let lo = if src < WORDS { self.words[src] } else { fill };
            let hi = if src + 1 < WORDS { self.words[src + 1] } else { fill };
            words[i] = if bit_off == 0 {
                lo
            } else {
                (lo >> bit_off) | (hi << (Word::BITS - bit_off))
            };
        }
        Self { words }
    }
}

impl<const WORDS: usize> Shr<u32> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn shr(self, amount: u32) -> Int<WORDS> {
        self.wrapping_shr(amount)
    }
}

impl<const WORDS: usize> Shr<u32> for Int<WORDS> {
    type Output = Int<WORDS>;

    fn shr(self, amount: u32) -> Int<WORDS> {
        self.wrapping_shr(amount)
    }
}

impl<const WORDS: usize> ShrAssign<u32> for Int<WORDS> {
    fn shr_assign(&mut self, amount: u32) {
        *self = self.wrapping_shr(amount);
    }
}
