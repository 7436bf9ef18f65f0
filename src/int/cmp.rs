//! [`Int`] comparisons.

use super::Int;
use core::cmp::Ordering;

impl<const WORDS: usize> Ord for Int<WORDS> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // Within one sign the two's-complement words compare like unsigned
        // ones, most significant first.
        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.words.iter().rev().cmp(rhs.words.iter().rev()),
        }
    }
}

impl<const WORDS: usize> PartialOrd for Int<WORDS> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
