//! [`Int`] byte encodings.

use super::Int;
use crate::{endian, Endian, Error, Result};
use alloc::vec::Vec;

impl<const WORDS: usize> Int<WORDS> {
    /// Serializes the full two's-complement representation as exactly
    /// [`Self::BYTES`] bytes in the requested byte order.
    pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
        endian::words_to_bytes(&self.words, endian)
    }

    /// Deserializes a value written by [`Self::to_bytes`].
    ///
    /// Returns [`Error::Length`] unless `bytes` is exactly
    /// [`Self::BYTES`] long.
    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(Error::Length);
        }
        let decoded = endian::words_from_bytes(bytes, endian);
        let mut words = [0; WORDS];
        words.copy_from_slice(&decoded);
        Ok(Self { words })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Endian, Error, I128};
    use hex_literal::hex;

    #[test]
    fn encodings_are_fixed_width() {
        let value = I128::from(-2i64);
        let be = value.to_bytes(Endian::Big);
        assert_eq!(be, hex!("fffffffffffffffffffffffffffffffe"));
        let le = value.to_bytes(Endian::Little);
        assert_eq!(le, hex!("feffffffffffffffffffffffffffffff"));
        assert_eq!(I128::from_bytes(&be, Endian::Big), Ok(value));
        assert_eq!(I128::from_bytes(&le, Endian::Little), Ok(value));
    }

    #[test]
    fn zero_still_takes_the_full_width() {
        assert_eq!(I128::ZERO.to_bytes(Endian::Big), [0u8; 16]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            I128::from_bytes(&[0u8; 15], Endian::Big),
            Err(Error::Length)
        );
        assert_eq!(
            I128::from_bytes(&[0u8; 17], Endian::Little),
            Err(Error::Length)
        );
    }
}
