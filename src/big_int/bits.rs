//! [`BigInt`] bit accessors over the infinite two's-complement stream.

use crate::{BigInt, Sign, magnitude};

impl BigInt {
    /// Number of bits in the minimal two's-complement representation of
    /// this value, excluding the sign bit.
    ///
    /// Zero and `-1` both report `0`: their streams carry no bit differing
    /// from the sign extension.
    #[must_use]
    pub fn bit_length(&self) -> u64 {
        let bits = magnitude::bits(self.magnitude());
        if self.is_negative() && magnitude::is_power_of_two(self.magnitude()) {
            // -2^k encodes as sign-extended `1` followed by k zeros.
            bits - 1
        } else {
            bits
        }
    }

    /// Hamming weight of the two's-complement stream: for non-negative
    /// values the popcount of the magnitude, for negative values the count
    /// of zero bits below [`bit_length`][Self::bit_length].
    #[must_use]
    pub fn bit_count(&self) -> u64 {
        if self.is_negative() {
            // The zero bits of `-x` below its bit length are the set bits
            // of `x - 1`.
            magnitude::count_ones(&magnitude::sub_word(self.magnitude(), 1))
        } else {
            magnitude::count_ones(self.magnitude())
        }
    }

    /// Reads the bit at `index` of the two's-complement stream; every bit
    /// of a negative value beyond its magnitude reads as set.
    #[must_use]
    pub fn test_bit(&self, index: u64) -> bool {
        if self.is_negative() {
            // bit_i(-x) == !bit_i(x - 1)
            !magnitude::bit(&magnitude::sub_word(self.magnitude(), 1), index)
        } else {
            magnitude::bit(self.magnitude(), index)
        }
    }

    /// A copy of this value with the bit at `index` set. Storage extends
    /// transparently past the current magnitude.
    #[must_use]
    pub fn set_bit(&self, index: u64) -> Self {
        self | &Self::power_of_two(index)
    }

    /// A copy of this value with the bit at `index` cleared.
    #[must_use]
    pub fn clear_bit(&self, index: u64) -> Self {
        self.and_not(&Self::power_of_two(index))
    }

    /// A copy of this value with the bit at `index` inverted.
    #[must_use]
    pub fn flip_bit(&self, index: u64) -> Self {
        self ^ &Self::power_of_two(index)
    }

    /// `2^index`.
    fn power_of_two(index: u64) -> Self {
        Self::from_sign_magnitude(Sign::Positive, magnitude::shl(&[1], index))
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn bit_length_of_small_values() {
        assert_eq!(BigInt::ZERO.bit_length(), 0);
        assert_eq!(BigInt::from(-1i8).bit_length(), 0);
        assert_eq!(BigInt::from(1u8).bit_length(), 1);
        assert_eq!(BigInt::from(-2i8).bit_length(), 1);
        assert_eq!(BigInt::from(255u8).bit_length(), 8);
        assert_eq!(BigInt::from(256u16).bit_length(), 9);
        assert_eq!(BigInt::from(-256i16).bit_length(), 8);
        assert_eq!(BigInt::from(-255i16).bit_length(), 8);
    }

    #[test]
    fn bit_count_fixtures() {
        for (v, expected) in [
            (0i64, 0u64),
            (1, 1),
            (0b1011, 3),
            (i64::MAX, 63),
            (-1, 0),
            (-2, 1),
            (-3, 1),
            (-4, 2),
            (-0b1011, 2),
            (i64::MIN, 63),
        ] {
            assert_eq!(BigInt::from(v).bit_count(), expected, "{v}");
        }
    }

    #[test]
    fn test_bit_on_negatives_sign_extends() {
        let v = BigInt::from(-2i8);
        assert!(!v.test_bit(0));
        assert!(v.test_bit(1));
        assert!(v.test_bit(100_000));

        let p = BigInt::from(2u8);
        assert!(p.test_bit(1));
        assert!(!p.test_bit(100_000));
    }

    #[test]
    fn set_clear_flip_roundtrip() {
        let v = BigInt::from(0b1010u8);
        assert_eq!(v.set_bit(0), BigInt::from(0b1011u8));
        assert_eq!(v.set_bit(1), v);
        assert_eq!(v.clear_bit(1), BigInt::from(0b1000u8));
        assert_eq!(v.flip_bit(2), BigInt::from(0b1110u8));
        assert_eq!(v.flip_bit(2).flip_bit(2), v);
    }

    #[test]
    fn set_bit_extends_storage() {
        let v = BigInt::from(1u8).set_bit(200);
        assert_eq!(v.bit_length(), 201);
        assert!(v.test_bit(200));
        assert_eq!(v.clear_bit(200), BigInt::from(1u8));
    }

    #[test]
    fn negative_bit_mutation() {
        // Clearing bit 1 of -1 (…1111) gives …1101 == -3.
        assert_eq!(BigInt::from(-1i8).clear_bit(1), BigInt::from(-3i8));
        assert_eq!(BigInt::from(-3i8).set_bit(1), BigInt::from(-1i8));
        assert_eq!(BigInt::from(-1i8).flip_bit(0), BigInt::from(-2i8));
    }
}
