//! [`BigInt`] right shift.
//!
//! A right shift of a negative value rounds toward negative infinity,
//! reproducing native arithmetic-shift semantics: the magnitude is shifted
//! normally, then one is added back whenever a set bit was dropped.

use crate::{BigInt, magnitude};
use core::ops::Shr;

impl BigInt {
    /// Computes `self >> count` with sign-aware rounding; a negative count
    /// shifts left instead.
    #[must_use]
    pub fn shift_right(&self, count: i64) -> Self {
        if count < 0 {
            return self.shift_left_unsigned(count.unsigned_abs());
        }
        self.shift_right_unsigned(count as u64)
    }

    pub(crate) fn shift_right_unsigned(&self, count: u64) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let mut shifted = magnitude::shr(self.magnitude(), count);
        if self.is_negative() && magnitude::any_bits_below(self.magnitude(), count) {
            // Rounding toward negative infinity: a dropped set bit moves a
            // negative result one further from zero.
            shifted = magnitude::add_word(&shifted, 1);
        }
        Self::from_sign_magnitude(self.sign(), shifted)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, count: u32) -> BigInt {
        self.shift_right_unsigned(count as u64)
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, count: u32) -> BigInt {
        &self >> count
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn matches_primitive_arithmetic_shift() {
        for v in [1i128, -1, 3, -3, 255, -255, i64::MAX as i128, i64::MIN as i128] {
            for s in [0u32, 1, 7, 63, 64, 65, 127] {
                assert_eq!(BigInt::from(v) >> s, BigInt::from(v >> s), "{v} >> {s}");
            }
        }
    }

    #[test]
    fn minus_one_is_a_fixed_point() {
        assert_eq!(BigInt::from(-1i8) >> 1u32, BigInt::from(-1i8));
        assert_eq!(BigInt::from(-1i8) >> 10_000u32, BigInt::from(-1i8));
    }

    #[test]
    fn exact_shifts_do_not_round() {
        assert_eq!(BigInt::from(-4i8) >> 2u32, BigInt::from(-1i8));
        assert_eq!(BigInt::from(-5i8) >> 2u32, BigInt::from(-2i8));
    }

    #[test]
    fn shift_right_identity_for_non_negative() {
        let x = BigInt::from_str_radix("deadbeefcafebabe1234", 16).unwrap();
        for s in [0u32, 5, 64, 70] {
            assert_eq!((&x << s) >> s, x);
        }
    }
}
