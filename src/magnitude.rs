//! Unsigned multi-word arithmetic on "magnitudes": word sequences stored
//! least significant first.
//!
//! A magnitude is canonical when it carries no superfluous high-order zero
//! words; zero is the unique empty magnitude. Every function here returns a
//! canonical magnitude and has no concept of sign.

mod add;
mod cmp;
mod div;
mod mul;
mod shift;
mod sub;

pub(crate) use add::{add, add_word};
pub(crate) use cmp::cmp;
pub(crate) use div::{div_rem, div_rem_word};
pub(crate) use mul::{mul, mul_word_add};
pub(crate) use shift::{any_bits_below, shl, shr};
pub(crate) use sub::{sub, sub_word};

use crate::word::Word;
use alloc::{vec, vec::Vec};

/// Drops high-order zero words, restoring canonical form.
#[inline]
pub(crate) fn trim(words: &mut Vec<Word>) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

/// The magnitude of a single word; canonical, so zero yields the empty
/// magnitude.
pub(crate) fn from_word(word: Word) -> Vec<Word> {
    if word == 0 { Vec::new() } else { vec![word] }
}

/// Index of the highest set bit plus one; `0` for the zero magnitude.
pub(crate) fn bits(words: &[Word]) -> u64 {
    match words.last() {
        Some(hi) => words.len() as u64 * Word::BITS as u64 - hi.leading_zeros() as u64,
        None => 0,
    }
}

/// Value of the bit at `index`, where out-of-range bits read as zero.
pub(crate) fn bit(words: &[Word], index: u64) -> bool {
    let word = (index / Word::BITS as u64) as usize;
    match words.get(word) {
        Some(w) => (w >> (index % Word::BITS as u64)) & 1 == 1,
        None => false,
    }
}

/// Hamming weight of the magnitude.
pub(crate) fn count_ones(words: &[Word]) -> u64 {
    words.iter().map(|w| w.count_ones() as u64).sum()
}

/// Whether the magnitude is a power of two (exactly one set bit).
pub(crate) fn is_power_of_two(words: &[Word]) -> bool {
    count_ones(words) == 1
}
