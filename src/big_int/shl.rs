//! [`BigInt`] left shift.

use crate::{BigInt, magnitude};
use core::ops::Shl;

impl BigInt {
    /// Computes `self << count`; a negative count shifts right instead.
    #[must_use]
    pub fn shift_left(&self, count: i64) -> Self {
        if count < 0 {
            return self.shift_right_unsigned(count.unsigned_abs());
        }
        self.shift_left_unsigned(count as u64)
    }

    pub(crate) fn shift_left_unsigned(&self, count: u64) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        Self::from_sign_magnitude(self.sign(), magnitude::shl(self.magnitude(), count))
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, count: u32) -> BigInt {
        self.shift_left_unsigned(count as u64)
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, count: u32) -> BigInt {
        &self << count
    }
}
