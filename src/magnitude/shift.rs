//! Magnitude shifts.
//!
//! A shift amount splits into a whole-word offset and a bit offset; each
//! output word ORs the in-range bits of two adjacent source words.

use super::trim;
use crate::word::Word;
use alloc::{vec, vec::Vec};

/// Computes `words << bits`.
pub(crate) fn shl(words: &[Word], bits: u64) -> Vec<Word> {
    if words.is_empty() {
        return Vec::new();
    }
    let word_off = (bits / Word::BITS as u64) as usize;
    let bit_off = (bits % Word::BITS as u64) as u32;

    let mut out = vec![0; words.len() + word_off + 1];
    if bit_off == 0 {
        out[word_off..word_off + words.len()].copy_from_slice(words);
    } else {
        for (i, &w) in words.iter().enumerate() {
            out[word_off + i] |= w << bit_off;
            out[word_off + i + 1] |= w >> (Word::BITS - bit_off);
        }
    }
    trim(&mut out);
    out
}

/// Computes `words >> bits`, discarding the shifted-out low bits.
pub(crate) fn shr(words: &[Word], bits: u64) -> Vec<Word> {
    let word_off = (bits / Word::BITS as u64) as usize;
    let bit_off = (bits % Word::BITS as u64) as u32;
    if word_off >= words.len() {
        return Vec::new();
    }

    let len = words.len() - word_off;
    let mut out = Vec::with_capacity(len);
    if bit_off == 0 {
        out.extend_from_slice(&words[word_off..]);
    } else {
        for i in 0..len {
            let lo = words[word_off + i] >> bit_off;
            let hi = match words.get(word_off + i + 1) {
                Some(&next) => next << (Word::BITS - bit_off),
                None => 0,
            };
            out.push(lo | hi);
        }
    }
    trim(&mut out);
    out
}

/// Whether any of the `bits` lowest bits is set: the bits a right shift by
/// `bits` would drop.
pub(crate) fn any_bits_below(words: &[Word], bits: u64) -> bool {
    let word_off = (bits / Word::BITS as u64) as usize;
    let bit_off = (bits % Word::BITS as u64) as u32;

    if words.iter().take(word_off).any(|&w| w != 0) {
        return true;
    }
    if bit_off == 0 {
        return false;
    }
    match words.get(word_off) {
        Some(&w) => w << (Word::BITS - bit_off) != 0,
        None => false,
    }
}
