//! [`BigInt`] text conversion: radix formatting and parsing, the standard
//! formatting traits, and the injectable decimal rendering strategy.

use crate::word::Word;
use crate::{BigInt, Error, Result, Sign, magnitude};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest power of `radix` fitting in one word, with its digit count.
/// Extracting that many digits per kernel division keeps conversion cost
/// proportional to the word count rather than the digit count.
fn radix_chunk(radix: u32) -> (Word, usize) {
    let radix = radix as Word;
    let mut power = radix;
    let mut digits = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        digits += 1;
    }
    (power, digits)
}

fn digit_value(byte: u8, radix: u32) -> Result<Word> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return Err(Error::Format),
    };
    if value as u32 >= radix {
        return Err(Error::Format);
    }
    Ok(value as Word)
}

/// Strategy for locale-specific decimal rendering. The crate owns no
/// locale data; callers inject an implementation and the default methods
/// reproduce plain ASCII output.
pub trait DecimalStyle {
    /// Text placed before the digits of a negative value.
    fn negative_sign(&self) -> &str {
        "-"
    }

    /// Text placed before the digits of a non-negative value.
    fn positive_sign(&self) -> &str {
        ""
    }

    /// Character rendered for an ASCII decimal digit.
    fn digit(&self, ascii: char) -> char {
        ascii
    }
}

/// The plain ASCII [`DecimalStyle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainStyle;

impl DecimalStyle for PlainStyle {}

impl BigInt {
    /// Formats the value in the given radix with lowercase digits and a
    /// leading `-` for negative values.
    ///
    /// # Panics
    /// If `radix` is outside `[2, 36]`.
    #[must_use]
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = self.abs_digits(radix);
        let mut out = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&digits);
        out
    }

    /// Digits of the absolute value in the given radix, produced least
    /// significant first by repeated division and reversed at the end.
    fn abs_digits(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix out of range");
        if self.is_zero() {
            return String::from("0");
        }

        let (chunk_power, chunk_digits) = radix_chunk(radix);
        let mut mag = self.magnitude().to_vec();
        let mut out: Vec<u8> = Vec::new();
        while !mag.is_empty() {
            let (quotient, mut rem) = magnitude::div_rem_word(&mag, chunk_power);
            mag = quotient;
            for _ in 0..chunk_digits {
                out.push(DIGITS[(rem % radix as Word) as usize]);
                rem /= radix as Word;
                // Higher chunks still pending need full zero padding; the
                // topmost chunk stops at its last nonzero digit.
                if mag.is_empty() && rem == 0 {
                    break;
                }
            }
        }
        out.reverse();
        String::from_utf8(out).expect("digits are ASCII")
    }

    /// Parses an optionally signed digit string in the given radix.
    ///
    /// Returns [`Error::Format`] for an empty string, a digit not valid
    /// for the radix, or a radix outside `[2, 36]`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::Format);
        }
        let (sign, digits) = match text.as_bytes() {
            [b'-', rest @ ..] => (Sign::Negative, rest),
            [b'+', rest @ ..] => (Sign::Positive, rest),
            rest => (Sign::Positive, rest),
        };
        if digits.is_empty() {
            return Err(Error::Format);
        }

        let (_, chunk_digits) = radix_chunk(radix);
        let mut mag: Vec<Word> = Vec::new();
        for chunk in digits.chunks(chunk_digits) {
            let mut value: Word = 0;
            let mut power: Word = 1;
            for &byte in chunk {
                value = value * radix as Word + digit_value(byte, radix)?;
                power *= radix as Word;
            }
            mag = magnitude::mul_word_add(&mag, power, value);
        }
        Ok(Self::from_sign_magnitude(sign, mag))
    }

    /// Parses a fixed-point decimal string, truncating any fractional part
    /// toward zero: `"-12.99"` parses as `-12`.
    pub fn parse_decimal(text: &str) -> Result<Self> {
        match text.split_once('.') {
            None => Self::from_str_radix(text, 10),
            Some((integral, fraction)) => {
                if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::Format);
                }
                Self::from_str_radix(integral, 10)
            }
        }
    }

    /// Renders the decimal digits through an injected [`DecimalStyle`].
    #[must_use]
    pub fn format_decimal(&self, style: &impl DecimalStyle) -> String {
        let digits = self.abs_digits(10);
        let sign = if self.is_negative() {
            style.negative_sign()
        } else {
            style.positive_sign()
        };
        let mut out = String::with_capacity(sign.len() + digits.len());
        out.push_str(sign);
        out.extend(digits.chars().map(|c| style.digit(c)));
        out
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_radix(text, 10)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.abs_digits(10))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.abs_digits(2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.abs_digits(8))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.abs_digits(16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.abs_digits(16);
        digits.make_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}
