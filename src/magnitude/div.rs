//! Magnitude division.
//!
//! Multi-word divisors go through Knuth's Algorithm D (The Art of Computer
//! Programming, Volume 2, Section 4.3.1): normalize so the divisor's top
//! word has its high bit set, estimate each quotient digit from the top two
//! remainder words, correct the estimate downward, multiply-and-subtract,
//! and add the divisor back on the rare borrow.

use super::{from_word, shift::shl, shift::shr, trim};
use crate::word::{WideWord, Word, borrowing_sub, carrying_add, carrying_mul_add};
use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

/// Computes `a / b` and `a % b` in one pass.
///
/// `b` must be a nonzero magnitude; callers surface the divide-by-zero
/// error before reaching the kernel.
pub(crate) fn div_rem(a: &[Word], b: &[Word]) -> (Vec<Word>, Vec<Word>) {
    debug_assert!(!b.is_empty(), "kernel division by zero");

    if super::cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (quotient, rem) = div_rem_word(a, b[0]);
        return (quotient, from_word(rem));
    }
    knuth(a, b)
}

/// Computes `a / divisor` and `a % divisor` for a single-word divisor by
/// carrying a double-word running remainder from the top down.
pub(crate) fn div_rem_word(a: &[Word], divisor: Word) -> (Vec<Word>, Word) {
    debug_assert_ne!(divisor, 0);

    let mut quotient = vec![0; a.len()];
    let mut rem: Word = 0;
    for i in (0..a.len()).rev() {
        let cur = ((rem as WideWord) << Word::BITS) | a[i] as WideWord;
        quotient[i] = (cur / divisor as WideWord) as Word;
        rem = (cur % divisor as WideWord) as Word;
    }
    trim(&mut quotient);
    (quotient, rem)
}

/// Algorithm D proper. Requires `b.len() >= 2` and `a >= b`.
fn knuth(a: &[Word], b: &[Word]) -> (Vec<Word>, Vec<Word>) {
    let n = b.len();
    let m = a.len() - n;
    let lshift = b[n - 1].leading_zeros() as u64;

    // D1: normalize so the divisor's top word has its high bit set. The
    // dividend gains one extra word to hold the spill.
    let v = shl(b, lshift);
    debug_assert_eq!(v.len(), n);
    let mut u = shl(a, lshift);
    u.resize(a.len() + 1, 0);

    let base: WideWord = 1 << Word::BITS;
    let vn1 = v[n - 1] as WideWord;
    let vn2 = v[n - 2] as WideWord;

    let mut quotient = vec![0; m + 1];
    for j in (0..=m).rev() {
        // D3: trial quotient from the top two remainder words divided by
        // the divisor's top word, corrected downward while it overshoots
        // against the divisor's second word and the next remainder word.
        let top = ((u[j + n] as WideWord) << Word::BITS) | u[j + n - 1] as WideWord;
        let mut qhat = top / vn1;
        let mut rhat = top % vn1;
        loop {
            if qhat >= base || qhat * vn2 > (rhat << Word::BITS) + u[j + n - 2] as WideWord {
                qhat -= 1;
                rhat += vn1;
                if rhat < base {
                    continue;
                }
            }
            break;
        }

        // D4: subtract qhat * v from the current dividend window.
        let qword = qhat as Word;
        let mut prod = Vec::with_capacity(n + 1);
        let mut carry = 0;
        for &x in &v {
            let (lo, hi) = carrying_mul_add(x, qword, carry, 0);
            prod.push(lo);
            carry = hi;
        }
        prod.push(carry);

        let mut borrow = 0;
        for i in 0..=n {
            let (w, next) = borrowing_sub(u[j + i], prod[i], borrow);
            u[j + i] = w;
            borrow = next;
        }

        // D6: the trial digit was still one too large; add the divisor
        // back and let the final carry cancel the borrow.
        if borrow != 0 {
            quotient[j] = qword - 1;
            let mut carry = 0;
            for i in 0..n {
                let (w, c) = carrying_add(u[j + i], v[i], carry);
                u[j + i] = w;
                carry = c;
            }
            u[j + n] = u[j + n].wrapping_add(carry);
        } else {
            quotient[j] = qword;
        }
    }

    // D8: un-normalize to recover the true remainder.
    let mut rem = u;
    rem.truncate(n);
    trim(&mut rem);
    let rem = shr(&rem, lshift);

    trim(&mut quotient);
    (quotient, rem)
}

#[cfg(test)]
mod tests {
    use super::{div_rem, div_rem_word};
    use crate::magnitude::{add, mul};
    use crate::word::Word;
    use alloc::vec::Vec;

    fn check(a: &[Word], b: &[Word]) {
        let (q, r) = div_rem(a, b);
        assert!(crate::magnitude::cmp(&r, b).is_lt(), "remainder not reduced");
        assert_eq!(add(&mul(&q, b), &r), a, "q * b + r != a");
    }

    #[test]
    fn single_word_divisor() {
        let (q, r) = div_rem_word(&[7], 3);
        assert_eq!((q.as_slice(), r), (&[2][..], 1));

        let (q, r) = div_rem_word(&[0, 1], 2);
        assert_eq!((q.as_slice(), r), (&[1 << (Word::BITS - 1)][..], 0));
    }

    #[test]
    fn dividend_smaller_than_divisor() {
        let (q, r) = div_rem(&[5], &[0, 1]);
        assert!(q.is_empty());
        assert_eq!(r, &[5]);
    }

    #[test]
    fn exact_division() {
        let b: Vec<Word> = alloc::vec![3, 7];
        let q: Vec<Word> = alloc::vec![Word::MAX, 0, 5];
        let a = mul(&b, &q);
        assert_eq!(div_rem(&a, &b), (q, Vec::new()));
    }

    #[test]
    fn division_identity_on_mixed_shapes() {
        let max = Word::MAX;
        check(&[max, max, max, max], &[max, 1]);
        check(&[0, 0, 0, 1], &[1, 1]);
        check(&[max, max, max], &[max, max]);
        check(&[1, 0, 0, 1], &[2, 1 << (Word::BITS - 1)]);
        check(&[123, 456, 789], &[1, 0, 1]);
    }

    #[test]
    fn correction_step_is_exercised() {
        // Divisor with a maximal top word forces trial-quotient overshoot.
        check(&[0, 0, 1 << (Word::BITS - 1), Word::MAX], &[Word::MAX, Word::MAX]);
        check(&[Word::MAX, Word::MAX, Word::MAX - 1, Word::MAX], &[Word::MAX, Word::MAX]);
    }
}
