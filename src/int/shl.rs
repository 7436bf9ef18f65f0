//! [`Int`] left shifts.

use super::Int;
use crate::word::Word;
use core::ops::{Shl, ShlAssign};

impl<const WORDS: usize> Int<WORDS> {
    /// Computes `self << amount`, masking the amount to `BITS - 1` the way
    /// the primitive `wrapping_shl` does. Vacated low bits fill with zero.
    pub fn wrapping_shl(&self, amount: u32) -> Self {
        let amount = amount % Self::BITS;
        let word_off = (amount / Word::BITS) as usize;
        let bit_off = amount % Word::BITS;
        let mut words = [0; WORDS];
        for i in word_off..WORDS {
            let mut word = self.words[i - word_off] << bit_off;
            if bit_off != 0 && i > word_off {
                word |= self.words[i - word_off - 1] >> (Word::BITS - bit_off);
            }
            words[i] = word;
        }
        Self { words }
    }
}

impl<const WORDS: usize> Shl<u32> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn shl(self, amount: u32) -> Int<WORDS> {
        self.wrapping_shl(amount)
    }
}

impl<const WORDS: usize> Shl<u32> for Int<WORDS> {
    type Output = Int<WORDS>;

    fn shl(self, amount: u32) -> Int<WORDS> {
        self.wrapping_shl(amount)
    }
}

impl<const WORDS: usize> ShlAssign<u32> for Int<WORDS> {
    fn shl_assign(&mut self, amount: u32) {
        *self = self.wrapping_shl(amount);
    }
}
