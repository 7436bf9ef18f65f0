//! `Word` is the unsigned fixed-width integer used as one digit of multi-word
//! arithmetic, typically the same size as a pointer on a particular CPU.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Digit unit of multi-word arithmetic.
    pub type Word = u32;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u64;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Digit unit of multi-word arithmetic.
    pub type Word = u64;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u128;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;

/// Size of a [`Word`] in bytes.
pub const WORD_BYTES: usize = (Word::BITS / 8) as usize;

/// Computes `lhs + rhs + carry`, returning the result along with the new
/// carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let ret = lhs as WideWord + rhs as WideWord + carry as WideWord;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new
/// borrow (0 or 1).
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow);
    (ret, (b1 | b2) as Word)
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with
/// the new carry.
///
/// Cannot overflow: `(2^n - 1)^2 + 2 * (2^n - 1) == 2^(2n) - 1`.
#[inline(always)]
pub(crate) const fn carrying_mul_add(lhs: Word, rhs: Word, addend: Word, carry: Word) -> (Word, Word) {
    let ret = (lhs as WideWord * rhs as WideWord) + addend as WideWord + carry as WideWord;
    (ret as Word, (ret >> Word::BITS) as Word)
}
