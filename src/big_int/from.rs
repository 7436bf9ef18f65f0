//! [`BigInt`] conversions to and from primitive numbers.
//!
//! Widening conversions are `From` impls; narrowing conversions are
//! `TryFrom` and report [`Error::Overflow`] when information would be lost.
//! Float conversion truncates toward zero.

use crate::word::Word;
use crate::{BigInt, Error, Result, Sign, magnitude};
use alloc::vec::Vec;

fn words_from_u128(mut value: u128) -> Vec<Word> {
    let mut words = Vec::new();
    while value != 0 {
        words.push(value as Word);
        value >>= Word::BITS;
    }
    words
}

fn u128_from_words(words: &[Word]) -> u128 {
    let mut out = 0;
    for (i, &w) in words.iter().enumerate() {
        out |= (w as u128) << (i as u32 * Word::BITS);
    }
    out
}

impl BigInt {
    fn from_u128(value: u128) -> Self {
        Self::from_sign_magnitude(Sign::Positive, words_from_u128(value))
    }

    fn from_i128(value: i128) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        Self::from_sign_magnitude(sign, words_from_u128(value.unsigned_abs()))
    }

    /// Converts a finite `f64`, truncating toward zero.
    ///
    /// The mantissa/exponent decomposition short-circuits exact powers of
    /// two; otherwise the significand is shifted by the unbiased exponent.
    /// Returns [`Error::Overflow`] for NaN and infinities.
    pub fn try_from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Overflow);
        }
        let bits = value.to_bits();
        Self::from_float_parts(bits >> 63 == 1, ((bits >> 52) & 0x7ff) as i64 - 1023, bits & ((1 << 52) - 1), 52)
    }

    /// Converts a finite `f32`, truncating toward zero.
    ///
    /// Returns [`Error::Overflow`] for NaN and infinities.
    pub fn try_from_f32(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Overflow);
        }
        let bits = value.to_bits();
        Self::from_float_parts(
            bits >> 31 == 1,
            ((bits >> 23) & 0xff) as i64 - 127,
            (bits & ((1 << 23) - 1)) as u64,
            23,
        )
    }

    fn from_float_parts(negative: bool, exponent: i64, mantissa: u64, mantissa_bits: u32) -> Result<Self> {
        // A biased exponent of zero lands at `-bias` here: subnormals all
        // have |value| < 1 and truncate to zero, as does any exponent < 0.
        if exponent < 0 {
            return Ok(Self::ZERO);
        }
        let sign = if negative { Sign::Negative } else { Sign::Positive };

        let words = if mantissa == 0 {
            // Exact power of two.
            magnitude::shl(&magnitude::from_word(1), exponent as u64)
        } else {
            let significand = words_from_u128((mantissa | (1 << mantissa_bits)) as u128);
            let shift = exponent - mantissa_bits as i64;
            if shift >= 0 {
                magnitude::shl(&significand, shift as u64)
            } else {
                magnitude::shr(&significand, (-shift) as u64)
            }
        };
        Ok(Self::from_sign_magnitude(sign, words))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_u128(value as u128)
            }
        })+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_i128(value as i128)
            }
        })+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInt> for u128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<u128> {
        if value.is_negative() || magnitude::bits(value.magnitude()) > 128 {
            return Err(Error::Overflow);
        }
        Ok(u128_from_words(value.magnitude()))
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<i128> {
        let bits = magnitude::bits(value.magnitude());
        if bits < 128 {
            let abs = u128_from_words(value.magnitude()) as i128;
            return Ok(if value.is_negative() { -abs } else { abs });
        }
        // The one 128-bit value with a 128-bit magnitude: i128::MIN.
        if bits == 128 && value.is_negative() && magnitude::is_power_of_two(value.magnitude()) {
            return Ok(i128::MIN);
        }
        Err(Error::Overflow)
    }
}

macro_rules! impl_try_from_narrow {
    ($($t:ty => $via:ty),+) => {
        $(impl TryFrom<&BigInt> for $t {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$t> {
                <$via>::try_from(value)?.try_into().map_err(|_| Error::Overflow)
            }
        })+
    };
}

impl_try_from_narrow!(
    u8 => u128, u16 => u128, u32 => u128, u64 => u128, usize => u128,
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, isize => i128
);
