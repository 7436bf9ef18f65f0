//! [`BigInt`] division.
//!
//! Division truncates toward zero and the remainder's sign follows the
//! dividend, so `(a / b) * b + a % b == a` holds for every nonzero `b`.

use crate::{BigInt, Error, Result, magnitude};
use core::ops::{Div, Rem};

impl BigInt {
    /// Computes the quotient and remainder of `self / rhs` in one pass.
    ///
    /// Returns [`Error::DivideByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self.is_zero() {
            return Ok((Self::ZERO, Self::ZERO));
        }

        let (quotient, rem) = magnitude::div_rem(self.magnitude(), rhs.magnitude());
        Ok((
            Self::from_sign_magnitude(self.sign().mul(rhs.sign()), quotient),
            Self::from_sign_magnitude(self.sign(), rem),
        ))
    }

    /// Computes `self / rhs`, truncated toward zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.0)
    }

    /// Computes `self % rhs`; the result's sign follows `self`.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.1)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("attempted to divide by zero")
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("attempted to divide by zero")
    }
}

impl_binop_variants!(Div, div for BigInt);
impl_binop_variants!(Rem, rem for BigInt);
impl_binop_assign!(DivAssign, div_assign via / for BigInt);
impl_binop_assign!(RemAssign, rem_assign via % for BigInt);
