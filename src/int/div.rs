//! [`Int`] division.

use super::Int;
use crate::word::Word;
use crate::{magnitude, Error, Result};
use alloc::vec::Vec;
use core::ops::{Div, Rem};

impl<const WORDS: usize> Int<WORDS> {
    /// The magnitude of `self` as a trimmed word sequence for the kernel.
    fn abs_magnitude(&self) -> Vec<Word> {
        let mut words = self.wrapping_abs().words.to_vec();
        magnitude::trim(&mut words);
        words
    }

    /// Reassembles a kernel result, negating when `negative` is set.
    ///
    /// The magnitude of a quotient or remainder never exceeds the
    /// dividend's, so it fits in `WORDS` words.
    fn from_magnitude(words: &[Word], negative: bool) -> Self {
        debug_assert!(words.len() <= WORDS);
        let mut out = [0; WORDS];
        out[..words.len()].copy_from_slice(words);
        let out = Self { words: out };
        if negative { out.wrapping_neg() } else { out }
    }

    /// Computes the quotient and remainder of `self / rhs`.
    ///
    /// The quotient truncates toward zero and the remainder takes the
    /// dividend's sign. `MIN / -1` wraps back to `MIN` with remainder zero.
    ///
    /// Returns [`Error::DivideByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        let (q, r) = magnitude::div_rem(&self.abs_magnitude(), &rhs.abs_magnitude());
        Ok((
            Self::from_magnitude(&q, self.is_negative() != rhs.is_negative()),
            Self::from_magnitude(&r, self.is_negative()),
        ))
    }

    /// Computes `self / rhs`, returning `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(q, _)| q)
    }

    /// Computes `self % rhs`, returning `None` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(_, r)| r)
    }
}

impl<const WORDS: usize> Div<&Int<WORDS>> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn div(self, rhs: &Int<WORDS>) -> Int<WORDS> {
        self.checked_div(rhs)
            .expect("attempted to divide by zero")
    }
}

impl<const WORDS: usize> Rem<&Int<WORDS>> for &Int<WORDS> {
    type Output = Int<WORDS>;

    fn rem(self, rhs: &Int<WORDS>) -> Int<WORDS> {
        self.checked_rem(rhs)
            .expect("attempted to divide by zero")
    }
}

impl_binop_variants!(Div, div for Int<const WORDS: usize>);
impl_binop_variants!(Rem, rem for Int<const WORDS: usize>);
impl_binop_assign!(DivAssign, div_assign via / for Int<const WORDS: usize>);
impl_binop_assign!(RemAssign, rem_assign via % for Int<const WORDS: usize>);

#[cfg(test)]
mod tests {
    use crate::{Error, I128};

    #[test]
    fn division_truncates_toward_zero() {
        let cases: &[(i128, i128)] = &[
            (7, 3),
            (-7, 3),
            (7, -3),
            (-7, -3),
            (0, 5),
            (i128::MAX, 10),
            (i128::MIN, 10),
            (i128::MIN, i128::MAX),
        ];
        for &(a, b) in cases {
            let (q, r) = I128::from(a).div_rem(&I128::from(b)).unwrap();
            assert_eq!(q, I128::from(a / b), "{a} / {b}");
            assert_eq!(r, I128::from(a % b), "{a} % {b}");
        }
    }

    #[test]
    fn min_divided_by_minus_one_wraps() {
        let (q, r) = I128::MIN.div_rem(&I128::from(-1i64)).unwrap();
        assert_eq!(q, I128::MIN);
        assert_eq!(r, I128::ZERO);
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(
            I128::from(1i64).div_rem(&I128::ZERO),
            Err(Error::DivideByZero)
        );
        assert_eq!(I128::from(1i64).checked_div(&I128::ZERO), None);
        assert_eq!(I128::from(1i64).checked_rem(&I128::ZERO), None);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn division_operator_panics_on_zero() {
        let _ = I128::ONE / I128::ZERO;
    }
}
