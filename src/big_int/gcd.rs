//! [`BigInt`] greatest common divisor.

use crate::word::Word;
use crate::{BigInt, Sign, magnitude};

/// Binary GCD on single words.
fn gcd_words(mut a: Word, mut b: Word) -> Word {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }
    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

impl BigInt {
    /// Greatest common divisor of the absolute values; never negative, and
    /// zero only when both operands are zero.
    ///
    /// Reduces Euclid-style until one operand fits in a single word, then
    /// finishes with binary GCD.
    #[must_use]
    pub fn gcd(&self, rhs: &Self) -> Self {
        let mut a = self.magnitude().to_vec();
        let mut b = rhs.magnitude().to_vec();
        loop {
            if b.is_empty() {
                return Self::from_sign_magnitude(Sign::Positive, a);
            }
            if b.len() == 1 {
                let (_, rem) = magnitude::div_rem_word(&a, b[0]);
                return Self::from(gcd_words(b[0], rem));
            }
            let (_, rem) = magnitude::div_rem(&a, &b);
            a = b;
            b = rem;
        }
    }
}
