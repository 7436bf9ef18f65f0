//! Magnitude subtraction.

use super::trim;
use crate::word::{Word, borrowing_sub};
use alloc::vec::Vec;

/// Computes `a - b`. Requires `a >= b`; the caller is responsible for
/// ordering the operands.
pub(crate) fn sub(a: &[Word], b: &[Word]) -> Vec<Word> {
    debug_assert!(super::cmp(a, b).is_ge(), "subtrahend exceeds minuend");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;

    for i in 0..a.len() {
        let rhs = b.get(i).copied().unwrap_or(0);
        let (word, b) = borrowing_sub(a[i], rhs, borrow);
        out.push(word);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}

/// Computes `a - word`. Requires `a >= word`.
pub(crate) fn sub_word(a: &[Word], word: Word) -> Vec<Word> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = word;

    for &w in a {
        let (word, b) = borrowing_sub(w, borrow, 0);
        out.push(word);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}
