//! Magnitude multiplication.

use super::trim;
use crate::word::{Word, carrying_mul_add};
use alloc::{vec, vec::Vec};

/// Computes `a * b` by schoolbook convolution: each word-pair product is
/// accumulated through a double-word carry. The output is at most
/// `a.len() + b.len()` words, trimmed.
pub(crate) fn mul(a: &[Word], b: &[Word]) -> Vec<Word> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (word, c) = carrying_mul_add(x, y, out[i + j], carry);
            out[i + j] = word;
            carry = c;
        }
        out[i + b.len()] = carry;
    }
    trim(&mut out);
    out
}

/// Computes `a * word + addend` in a single pass.
pub(crate) fn mul_word_add(a: &[Word], word: Word, addend: Word) -> Vec<Word> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = addend;

    for &x in a {
        let (lo, hi) = carrying_mul_add(x, word, carry, 0);
        out.push(lo);
        carry = hi;
    }
    if carry != 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::{mul, mul_word_add};
    use crate::word::Word;

    #[test]
    fn mul_by_zero_is_zero() {
        assert!(mul(&[], &[1, 2]).is_empty());
        assert!(mul(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn mul_single_words() {
        // (2^n - 1)^2 == 2^(2n) - 2^(n+1) + 1
        assert_eq!(mul(&[Word::MAX], &[Word::MAX]), &[1, Word::MAX - 1]);
        assert_eq!(mul(&[3], &[4]), &[12]);
    }

    #[test]
    fn mul_is_commutative_across_lengths() {
        let a: &[Word] = &[Word::MAX, 1, 7];
        let b: &[Word] = &[5, Word::MAX];
        assert_eq!(mul(a, b), mul(b, a));
    }

    #[test]
    fn mul_shifts_by_word_multiples() {
        // (1 << BITS) * (1 << BITS) == 1 << (2 * BITS)
        assert_eq!(mul(&[0, 1], &[0, 1]), &[0, 0, 1]);
    }

    #[test]
    fn mul_word_add_accumulates() {
        assert_eq!(mul_word_add(&[], 10, 7), &[7]);
        assert_eq!(mul_word_add(&[Word::MAX], 2, 1), &[Word::MAX, 1]);
    }
}
