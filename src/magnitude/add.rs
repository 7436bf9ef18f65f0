//! Magnitude addition.

use super::trim;
use crate::word::{Word, carrying_add};
use alloc::vec::Vec;

/// Computes `a + b`. The sum may be one word longer than the longer input.
pub(crate) fn add(a: &[Word], b: &[Word]) -> Vec<Word> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;

    for i in 0..long.len() {
        let rhs = short.get(i).copied().unwrap_or(0);
        let (word, c) = carrying_add(long[i], rhs, carry);
        out.push(word);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Computes `a + word`.
pub(crate) fn add_word(a: &[Word], word: Word) -> Vec<Word> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = word;

    for &w in a {
        let (word, c) = carrying_add(w, carry, 0);
        out.push(word);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::{add, add_word};
    use crate::word::Word;

    #[test]
    fn add_propagates_carry_past_the_end() {
        assert_eq!(add(&[Word::MAX], &[1]), &[0, 1]);
        assert_eq!(add(&[Word::MAX, Word::MAX], &[1]), &[0, 0, 1]);
    }

    #[test]
    fn add_mixed_lengths() {
        assert_eq!(add(&[1], &[2, 3]), &[3, 3]);
        assert_eq!(add(&[2, 3], &[1]), &[3, 3]);
    }

    #[test]
    fn add_zero_is_identity() {
        assert_eq!(add(&[], &[7]), &[7]);
        assert_eq!(add(&[7], &[]), &[7]);
        assert!(add(&[], &[]).is_empty());
    }

    #[test]
    fn add_word_carries() {
        assert_eq!(add_word(&[Word::MAX, Word::MAX], 1), &[0, 0, 1]);
        assert_eq!(add_word(&[], 5), &[5]);
        assert!(add_word(&[], 0).is_empty());
    }
}
