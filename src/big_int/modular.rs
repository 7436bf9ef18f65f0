//! [`BigInt`] modular exponentiation and inversion.

use crate::{BigInt, Error, Result, Sign, magnitude};

impl BigInt {
    /// Computes `self^exponent mod modulus` by left-to-right binary
    /// exponentiation, reducing after every multiplication to bound
    /// intermediate growth.
    ///
    /// The remainder convention matches [`div_rem`][Self::div_rem]: the
    /// result is negative only when `self` is negative, the exponent odd,
    /// and the residue nonzero. Errors on a negative exponent or a zero
    /// modulus.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if exponent.is_negative() {
            return Err(Error::NegativeExponent);
        }
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let m = modulus.magnitude();
        if m == [1] {
            return Ok(Self::ZERO);
        }

        let base = magnitude::div_rem(self.magnitude(), m).1;
        let mut acc = magnitude::from_word(1);
        for i in (0..magnitude::bits(exponent.magnitude())).rev() {
            acc = magnitude::div_rem(&magnitude::mul(&acc, &acc), m).1;
            if magnitude::bit(exponent.magnitude(), i) {
                acc = magnitude::div_rem(&magnitude::mul(&acc, &base), m).1;
            }
        }

        let sign = if self.is_negative() && exponent.is_odd() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(Self::from_sign_magnitude(sign, acc))
    }

    /// Computes the multiplicative inverse of `self` modulo `modulus` by
    /// the extended Euclidean algorithm, normalized into `[0, |modulus|)`.
    ///
    /// Errors with [`Error::NotInvertible`] when `self` and `modulus` are
    /// not coprime, and [`Error::ZeroModulus`] when the modulus is zero.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }
        let m = modulus.abs();
        if m.magnitude() == [1] {
            // Everything is congruent modulo 1; the inverse is 0.
            return Ok(Self::ZERO);
        }

        let mut rem = self.checked_rem(&m)?;
        if rem.is_negative() {
            rem += &m;
        }

        let (mut t, mut new_t) = (Self::ZERO, Self::from(1u8));
        let (mut r, mut new_r) = (m.clone(), rem);
        while !new_r.is_zero() {
            let (q, next_r) = r.div_rem(&new_r)?;
            let next_t = &t - &(&q * &new_t);
            t = core::mem::replace(&mut new_t, next_t);
            r = core::mem::replace(&mut new_r, next_r);
        }

        if r.magnitude() != [1] {
            return Err(Error::NotInvertible);
        }
        if t.is_negative() {
            t += &m;
        }
        Ok(t)
    }
}
