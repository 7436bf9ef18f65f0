//! Fixed-width signed integers.
//!
//! [`Int`] interprets a compile-time number of words as two's complement:
//! the sign lives in the top bit of the most significant word rather than a
//! separate field, and arithmetic wraps silently modulo `2^BITS`, matching
//! native fixed-width integer behavior. The algorithms are the word
//! kernel's, specialized to a constant word count.

mod add;
mod cmp;
mod div;
mod encoding;
mod from;
mod mul;
mod neg;
mod shl;
mod shr;
mod sub;

use crate::word::Word;
use core::fmt;

/// Fixed-width two's-complement integer over `WORDS` words, least
/// significant first.
///
/// The arithmetic operators wrap silently on overflow; the `checked_*`
/// methods report it instead.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Int<const WORDS: usize> {
    /// Words of the two's-complement representation, least significant
    /// first.
    words: [Word; WORDS],
}

/// 128-bit signed integer.
#[cfg(target_pointer_width = "64")]
pub type I128 = Int<2>;

/// 256-bit signed integer.
#[cfg(target_pointer_width = "64")]
pub type I256 = Int<4>;

/// 128-bit signed integer.
#[cfg(target_pointer_width = "32")]
pub type I128 = Int<4>;

/// 256-bit signed integer.
#[cfg(target_pointer_width = "32")]
pub type I256 = Int<8>;

impl<const WORDS: usize> Int<WORDS> {
    /// The value `0`.
    pub const ZERO: Self = Self { words: [0; WORDS] };

    /// The value `1`.
    pub const ONE: Self = {
        let mut words = [0; WORDS];
        words[0] = 1;
        Self { words }
    };

    /// The smallest representable value, `-2^(BITS - 1)`.
    pub const MIN: Self = {
        let mut words = [0; WORDS];
        words[WORDS - 1] = 1 << (Word::BITS - 1);
        Self { words }
    };

    /// The largest representable value, `2^(BITS - 1) - 1`.
    pub const MAX: Self = {
        let mut words = [Word::MAX; WORDS];
        words[WORDS - 1] = Word::MAX >> 1;
        Self { words }
    };

    /// Width of the represented integer in bits.
    pub const BITS: u32 = WORDS as u32 * Word::BITS;

    /// Width of the represented integer in bytes.
    pub const BYTES: usize = WORDS * (Word::BITS as usize / 8);

    /// Constructs a value from its words, least significant first.
    pub const fn from_words(words: [Word; WORDS]) -> Self {
        Self { words }
    }

    /// The words of the two's-complement representation, least significant
    /// first.
    pub const fn to_words(self) -> [Word; WORDS] {
        self.words
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Whether the sign bit, the top bit of the most significant word, is
    /// set.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.words[WORDS - 1] >> (Word::BITS - 1) == 1
    }

    /// The word every position beyond [`Self::BITS`] would hold: the sign
    /// extension.
    pub(crate) const fn sign_word(&self) -> Word {
        if self.is_negative() { Word::MAX } else { 0 }
    }
}

impl<const WORDS: usize> Default for Int<WORDS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const WORDS: usize> fmt::Display for Int<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_big_int(), f)
    }
}

impl<const WORDS: usize> fmt::Debug for Int<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int(")?;
        fmt::Display::fmt(&self.to_big_int(), f)?;
        write!(f, ")")
    }
}

impl<const WORDS: usize> fmt::LowerHex for Int<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:0width$x}", word, width = Word::BITS as usize / 4)?;
        }
        Ok(())
    }
}

impl<const WORDS: usize> fmt::UpperHex for Int<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:0width$X}", word, width = Word::BITS as usize / 4)?;
        }
        Ok(())
    }
}

impl<const WORDS: usize> num_traits::Zero for Int<WORDS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl<const WORDS: usize> num_traits::One for Int<WORDS> {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}
