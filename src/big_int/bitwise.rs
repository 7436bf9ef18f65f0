//! [`BigInt`] bitwise operations.
//!
//! Operands are treated as two's complement over an unbounded word stream.
//! A negative operand's expansion is produced incrementally, one word at a
//! time with a running complement-then-add-one carry, never materializing
//! a prefix of set bits. When the result's sign comes out negative, the
//! produced words are folded back to sign-magnitude by the mirrored
//! complement pass.

use crate::word::{WideWord, Word};
use crate::{BigInt, Sign};
use alloc::vec::Vec;
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// Infinite two's-complement word stream of one operand, least significant
/// word first.
struct Stream<'a> {
    words: &'a [Word],
    negative: bool,
    pos: usize,
    carry: Word,
}

impl<'a> Stream<'a> {
    fn new(value: &'a BigInt) -> Self {
        Self {
            words: value.magnitude(),
            negative: value.is_negative(),
            pos: 0,
            carry: 1,
        }
    }

    /// The constant every word equals beyond the magnitude: the stream's
    /// sign extension.
    fn extension(value: &BigInt) -> Word {
        if value.is_negative() { Word::MAX } else { 0 }
    }

    fn next(&mut self) -> Word {
        let word = self.words.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        if self.negative {
            let t = (!word) as WideWord + self.carry as WideWord;
            self.carry = (t >> Word::BITS) as Word;
            t as Word
        } else {
            word
        }
    }
}

/// Applies `op` word-wise over both streams and restores sign-magnitude
/// form, deciding the result's sign from the streams' sign extensions.
fn bitwise(a: &BigInt, b: &BigInt, op: impl Fn(Word, Word) -> Word) -> BigInt {
    let len = a.magnitude().len().max(b.magnitude().len());
    let mut sa = Stream::new(a);
    let mut sb = Stream::new(b);
    let negative = op(Stream::extension(a), Stream::extension(b)) == Word::MAX;

    let mut out = Vec::with_capacity(len + 1);
    if negative {
        // Mirrored pass: complement each produced word and re-add one to
        // recover the magnitude of the (negative) result.
        let mut carry: Word = 1;
        for _ in 0..len {
            let t = (!op(sa.next(), sb.next())) as WideWord + carry as WideWord;
            out.push(t as Word);
            carry = (t >> Word::BITS) as Word;
        }
        if carry != 0 {
            out.push(carry);
        }
        BigInt::from_sign_magnitude(Sign::Negative, out)
    } else {
        for _ in 0..len {
            out.push(op(sa.next(), sb.next()));
        }
        BigInt::from_sign_magnitude(Sign::Positive, out)
    }
}

impl BigInt {
    /// Computes `self & !rhs`: the bits of `self` not set in `rhs`.
    #[must_use]
    pub fn and_not(&self, rhs: &Self) -> Self {
        bitwise(self, rhs, |x, y| x & !y)
    }
}

impl BitAnd<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x & y)
    }
}

impl BitOr<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x | y)
    }
}

impl BitXor<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> BigInt {
        bitwise(self, rhs, |x, y| x ^ y)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        // `!x == -x - 1` in two's complement.
        -self.inc()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !&self
    }
}

impl_binop_variants!(BitAnd, bitand for BigInt);
impl_binop_variants!(BitOr, bitor for BigInt);
impl_binop_variants!(BitXor, bitxor for BigInt);
impl_binop_assign!(BitAndAssign, bitand_assign via & for BigInt);
impl_binop_assign!(BitOrAssign, bitor_assign via | for BigInt);
impl_binop_assign!(BitXorAssign, bitxor_assign via ^ for BigInt);
