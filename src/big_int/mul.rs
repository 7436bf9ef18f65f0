//! [`BigInt`] multiplication.

use crate::{BigInt, magnitude};
use core::ops::Mul;

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::ZERO;
        }
        let product = magnitude::mul(self.magnitude(), rhs.magnitude());
        BigInt::from_sign_magnitude(self.sign().mul(rhs.sign()), product)
    }
}

impl_binop_variants!(Mul, mul for BigInt);
impl_binop_assign!(MulAssign, mul_assign via * for BigInt);

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn sign_of_products() {
        let three = BigInt::from(3i8);
        let minus_two = BigInt::from(-2i8);
        assert_eq!(&three * &minus_two, BigInt::from(-6i8));
        assert_eq!(&minus_two * &minus_two, BigInt::from(4i8));
        assert_eq!(&three * &BigInt::ZERO, BigInt::ZERO);
    }

    #[test]
    fn commutative_across_word_lengths() {
        let a = BigInt::from(u128::MAX);
        let b = BigInt::from(-3i8);
        assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn repunit_square() {
        // The 34-digit hex repunit squared.
        let repunit = BigInt::from_str_radix("1111111111111111111111111111111111", 16).unwrap();
        let square = &repunit * &repunit;
        assert_eq!(
            square.to_str_radix(16),
            "123456789abcdf0123456789abcdf01234320fedcba987654320fedcba987654321"
        );
    }
}
