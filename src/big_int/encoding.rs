//! [`BigInt`] byte encoding and decoding.
//!
//! Two forms: minimal-length two's complement (sign-carrying) and raw
//! magnitude (unsigned), each in an explicitly chosen byte order. Both
//! round-trip exactly through their paired decoder; zero encodes as the
//! empty sequence.

use crate::{BigInt, Endian, Error, Result, Sign, endian};
use alloc::vec::Vec;

/// Two's-complements a little-endian byte buffer in place: invert, then
/// add one. At least one input byte must be nonzero.
fn negate_le_bytes(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = !*b;
    }
    for b in bytes.iter_mut() {
        let (v, carry) = b.overflowing_add(1);
        *b = v;
        if !carry {
            break;
        }
    }
}

impl BigInt {
    /// Encodes as minimal-length two's complement in the given byte order.
    ///
    /// A disambiguating `0x00`/`0xFF` byte is added only when the natural
    /// encoding's top bit would otherwise flip the sign. Zero encodes as
    /// the empty sequence.
    #[must_use]
    pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let full = endian::words_to_bytes(self.magnitude(), Endian::Little);
        let mut bytes = endian::trim_zeros(&full, Endian::Little).to_vec();

        if self.is_negative() {
            negate_le_bytes(&mut bytes);
            // Top bit clear would read back as positive.
            if bytes.last().is_some_and(|b| b & 0x80 == 0) {
                bytes.push(0xFF);
            }
        } else if bytes.last().is_some_and(|b| b & 0x80 != 0) {
            // Top bit set would read back as negative.
            bytes.push(0x00);
        }

        if endian == Endian::Big {
            bytes.reverse();
        }
        bytes
    }

    /// Decodes a two's-complement byte sequence of any length in the given
    /// byte order. Empty input decodes to zero.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
        let mut le = bytes.to_vec();
        if endian == Endian::Big {
            le.reverse();
        }
        match le.last() {
            None => Self::ZERO,
            Some(&top) if top & 0x80 == 0 => {
                Self::from_sign_magnitude(Sign::Positive, endian::words_from_bytes(&le, Endian::Little))
            }
            Some(_) => {
                negate_le_bytes(&mut le);
                Self::from_sign_magnitude(Sign::Negative, endian::words_from_bytes(&le, Endian::Little))
            }
        }
    }

    /// Encodes the magnitude as a minimal-length unsigned byte sequence.
    ///
    /// Returns [`Error::Overflow`] for negative values, which have no
    /// unsigned encoding.
    pub fn to_bytes_unsigned(&self, endian: Endian) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(Error::Overflow);
        }
        let full = endian::words_to_bytes(self.magnitude(), endian);
        Ok(endian::trim_zeros(&full, endian).to_vec())
    }

    /// Decodes an unsigned byte sequence of any length in the given byte
    /// order; the result is never negative.
    #[must_use]
    pub fn from_bytes_unsigned(bytes: &[u8], endian: Endian) -> Self {
        Self::from_sign_magnitude(Sign::Positive, endian::words_from_bytes(bytes, endian))
    }
}
