//! [`BigInt`] addition and subtraction.

use crate::{BigInt, Sign, magnitude};
use core::cmp::Ordering;
use core::ops::{Add, Sub};

impl BigInt {
    /// The value one greater than `self`.
    #[must_use]
    pub fn inc(&self) -> Self {
        match self.sign {
            Sign::Negative => {
                Self::from_sign_magnitude(Sign::Negative, magnitude::sub_word(&self.magnitude, 1))
            }
            _ => Self::from_sign_magnitude(Sign::Positive, magnitude::add_word(&self.magnitude, 1)),
        }
    }

    /// The value one less than `self`.
    #[must_use]
    pub fn dec(&self) -> Self {
        match self.sign {
            Sign::Positive => {
                Self::from_sign_magnitude(Sign::Positive, magnitude::sub_word(&self.magnitude, 1))
            }
            _ => Self::from_sign_magnitude(Sign::Negative, magnitude::add_word(&self.magnitude, 1)),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        // A zero operand never reaches the kernel.
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        if self.sign == rhs.sign {
            let sum = magnitude::add(self.magnitude(), rhs.magnitude());
            return BigInt::from_sign_magnitude(self.sign, sum);
        }

        // Opposite signs: subtract the smaller magnitude from the larger;
        // the result takes the sign of the larger operand.
        match magnitude::cmp(self.magnitude(), rhs.magnitude()) {
            Ordering::Equal => BigInt::ZERO,
            Ordering::Greater => {
                let diff = magnitude::sub(self.magnitude(), rhs.magnitude());
                BigInt::from_sign_magnitude(self.sign, diff)
            }
            Ordering::Less => {
                let diff = magnitude::sub(rhs.magnitude(), self.magnitude());
                BigInt::from_sign_magnitude(rhs.sign, diff)
            }
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &-rhs
    }
}

impl_binop_variants!(Add, add for BigInt);
impl_binop_variants!(Sub, sub for BigInt);
impl_binop_assign!(AddAssign, add_assign via + for BigInt);
impl_binop_assign!(SubAssign, sub_assign via - for BigInt);

#[cfg(test)]
mod tests {
    use crate::BigInt;
    use crate::word::Word;

    #[test]
    fn mixed_sign_addition() {
        let a = BigInt::from(-1i32);
        let b = BigInt::from(2u32);
        assert_eq!(&a + &b, BigInt::from(1u32));
        assert_eq!(&b + &a, BigInt::from(1u32));
        assert_eq!(&a + &a, BigInt::from(-2i32));
    }

    #[test]
    fn minus_one_minus_two_is_minus_three() {
        assert_eq!(BigInt::from(-1i32) - BigInt::from(2u32), BigInt::from(-3i32));
    }

    #[test]
    fn sum_with_opposite_is_zero() {
        let a = BigInt::from(0x1234_5678u32);
        assert_eq!(&a + &-a.clone(), BigInt::ZERO);
    }

    #[test]
    fn carries_grow_the_magnitude() {
        let max = BigInt::from(Word::MAX);
        let sum = &max + &BigInt::from(1u8);
        assert_eq!(sum.magnitude(), &[0, 1]);
    }

    #[test]
    fn inc_dec_walk_through_zero() {
        let mut v = BigInt::from(-2i32);
        for expected in [-1i64, 0, 1, 2] {
            v = v.inc();
            assert_eq!(v, BigInt::from(expected));
        }
        for expected in [1i64, 0, -1, -2] {
            v = v.dec();
            assert_eq!(v, BigInt::from(expected));
        }
    }

    #[test]
    fn add_assign() {
        let mut v = BigInt::from(10u8);
        v += BigInt::from(-25i8);
        assert_eq!(v, BigInt::from(-15i8));
        v -= BigInt::from(-15i8);
        assert_eq!(v, BigInt::ZERO);
    }
}
