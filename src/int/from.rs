//! [`Int`] conversions.

use super::Int;
use crate::word::Word;
use crate::{magnitude, BigInt, Error, Result, Sign};
use alloc::vec::Vec;

impl<const WORDS: usize> Int<WORDS> {
    /// Constructs a value from an `i128`, sign-extending it into the full
    /// width. Values wider than [`Self::BITS`] truncate.
    pub const fn from_i128(value: i128) -> Self {
        let fill = if value < 0 { Word::MAX } else { 0 };
        let mut words = [fill; WORDS];
        let mut bits = value as u128;
        let mut i = 0;
        while i < WORDS && i < (128 / Word::BITS) as usize {
            words[i] = bits as Word;
            bits >>= Word::BITS;
            i += 1;
        }
        Self { words }
    }

    /// Constructs a value from a `u128`, zero-extending it into the full
    /// width. Values wider than [`Self::BITS`] truncate.
    pub const fn from_u128(value: u128) -> Self {
        let mut words = [0; WORDS];
        let mut bits = value;
        let mut i = 0;
        while i < WORDS && i < (128 / Word::BITS) as usize {
            words[i] = bits as Word;
            bits >>= Word::BITS;
            i += 1;
        }
        Self { words }
    }

    /// Reduces an arbitrary-precision value into this width, keeping its
    /// low `BITS` two's-complement bits.
    pub fn from_big_int(value: &BigInt) -> Self {
        let mag = value.magnitude();
        let len = mag.len().min(WORDS);
        let mut words = [0; WORDS];
        words[..len].copy_from_slice(&mag[..len]);
        let out = Self { words };
        if value.is_negative() {
            out.wrapping_neg()
        } else {
            out
        }
    }

    /// Converts an arbitrary-precision value into this width, returning
    /// [`Error::Overflow`] when it does not fit.
    pub fn try_from_big_int(value: &BigInt) -> Result<Self> {
        let out = Self::from_big_int(value);
        if out.to_big_int() == *value {
            Ok(out)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Widens this value into an arbitrary-precision one.
    pub fn to_big_int(&self) -> BigInt {
        let (sign, abs) = if self.is_negative() {
            (Sign::Negative, self.wrapping_neg())
        } else {
            (Sign::Positive, *self)
        };
        let mut mag: Vec<Word> = abs.words.to_vec();
        magnitude::trim(&mut mag);
        BigInt::from_sign_magnitude(sign, mag)
    }
}

macro_rules! impl_int_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const WORDS: usize> From<$t> for Int<WORDS> {
                fn from(value: $t) -> Self {
                    Self::from_i128(value as i128)
                }
            }
        )*
    };
}

macro_rules! impl_int_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const WORDS: usize> From<$t> for Int<WORDS> {
                fn from(value: $t) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_int_from_signed!(i8, i16, i32, i64, i128, isize);
impl_int_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl<const WORDS: usize> From<&Int<WORDS>> for BigInt {
    fn from(value: &Int<WORDS>) -> Self {
        value.to_big_int()
    }
}

impl<const WORDS: usize> From<Int<WORDS>> for BigInt {
    fn from(value: Int<WORDS>) -> Self {
        value.to_big_int()
    }
}

impl<const WORDS: usize> TryFrom<&BigInt> for Int<WORDS> {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self> {
        Self::try_from_big_int(value)
    }
}
