#![no_std]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]
//!
//! ## Layout
//!
//! The crate is built in three layers:
//!
//! - a word-sequence kernel (private) implementing schoolbook arithmetic
//!   and Knuth's Algorithm D over `Vec<Word>` magnitudes;
//! - [`BigInt`], an arbitrary-precision signed integer storing a [`Sign`]
//!   next to a kernel magnitude;
//! - [`Int`], a stack-allocated fixed-width two's-complement integer with
//!   wrapping semantics, instantiated as [`I128`] and [`I256`].
//!
//! The word size follows the target: 64-bit words on 64-bit targets,
//! 32-bit words on 32-bit ones. Nothing in the public API depends on the
//! choice except [`Int`]'s `WORDS` parameter, which is what the [`I128`]
//! and [`I256`] aliases exist to hide.
//!
//! ## Usage
//!
//! ```
//! use bigmath::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse()?;
//! let b = BigInt::from_str_radix("-deadbeef", 16)?;
//! let (q, r) = (&a * &b).div_rem(&BigInt::from(997u32))?;
//! assert_eq!(&q * &BigInt::from(997u32) + r, &a * &b);
//! # Ok::<(), bigmath::Error>(())
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod big_int;
mod endian;
mod error;
mod int;
mod magnitude;
mod sign;
mod word;

pub use crate::{
    big_int::{BigInt, DecimalStyle, PlainStyle},
    endian::{Endian, non_zero_len, trim_zeros, word_from_bytes, word_to_bytes},
    error::{Error, Result},
    int::{I128, I256, Int},
    sign::Sign,
    word::{WORD_BYTES, Word},
};

pub use rand_core;
