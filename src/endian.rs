//! Endian-aware conversion between words and byte sequences.
//!
//! Byte order is always chosen explicitly per call; nothing in the crate
//! depends on the host order unless the caller opts in via
//! [`Endian::host`].

use crate::word::{WORD_BYTES, Word};
use alloc::vec::Vec;

/// Byte order of an encoded word or composite value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// The byte order of the machine this code runs on.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

/// Encodes a single word in the given byte order.
#[inline]
#[must_use]
pub const fn word_to_bytes(word: Word, endian: Endian) -> [u8; WORD_BYTES] {
    match endian {
        Endian::Big => word.to_be_bytes(),
        Endian::Little => word.to_le_bytes(),
    }
}

/// Decodes a single word from the given byte order.
#[inline]
#[must_use]
pub const fn word_from_bytes(bytes: [u8; WORD_BYTES], endian: Endian) -> Word {
    match endian {
        Endian::Big => Word::from_be_bytes(bytes),
        Endian::Little => Word::from_le_bytes(bytes),
    }
}

/// Encodes a least-significant-first word sequence as bytes.
///
/// Little-endian output places the least significant word's bytes first;
/// big-endian output places them last.
pub(crate) fn words_to_bytes(words: &[Word], endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * WORD_BYTES);
    match endian {
        Endian::Big => {
            for word in words.iter().rev() {
                out.extend_from_slice(&word.to_be_bytes());
            }
        }
        Endian::Little => {
            for word in words {
                out.extend_from_slice(&word.to_le_bytes());
            }
        }
    }
    out
}

/// Decodes bytes in the given order into a least-significant-first word
/// sequence, zero-extending a final partial word.
///
/// The result is not canonicalized; callers trim it as needed.
pub(crate) fn words_from_bytes(bytes: &[u8], endian: Endian) -> Vec<Word> {
    let mut out = Vec::with_capacity(bytes.len().div_ceil(WORD_BYTES));
    let mut buf = [0u8; WORD_BYTES];
    match endian {
        Endian::Big => {
            for chunk in bytes.rchunks(WORD_BYTES) {
                buf = [0u8; WORD_BYTES];
                buf[WORD_BYTES - chunk.len()..].copy_from_slice(chunk);
                out.push(Word::from_be_bytes(buf));
            }
        }
        Endian::Little => {
            for chunk in bytes.chunks(WORD_BYTES) {
                buf = [0u8; WORD_BYTES];
                buf[..chunk.len()].copy_from_slice(chunk);
                out.push(Word::from_le_bytes(buf));
            }
        }
    }
    out
}

/// Number of bytes left once the superfluous zero bytes are dropped: leading
/// zeros for big-endian input, trailing zeros for little-endian input.
#[must_use]
pub fn non_zero_len(bytes: &[u8], endian: Endian) -> usize {
    match endian {
        Endian::Big => bytes.len() - bytes.iter().take_while(|&&b| b == 0).count(),
        Endian::Little => bytes.len() - bytes.iter().rev().take_while(|&&b| b == 0).count(),
    }
}

/// Strips the superfluous zero bytes of an encoding without allocating:
/// leading zeros for big-endian input, trailing zeros for little-endian.
#[must_use]
pub fn trim_zeros(bytes: &[u8], endian: Endian) -> &[u8] {
    let len = non_zero_len(bytes, endian);
    match endian {
        Endian::Big => &bytes[bytes.len() - len..],
        Endian::Little => &bytes[..len],
    }
}
