//! [`BigInt`] probabilistic primality testing.
//!
//! Trial division by small primes first, then Miller-Rabin rounds with
//! bases drawn from caller-supplied randomness. The crate owns no
//! randomness and keeps no state across calls.

use crate::word::Word;
use crate::{BigInt, Sign, magnitude};
use alloc::vec::Vec;
use rand_core::RngCore;

/// Primes below 100. Candidates below `97^2` surviving trial division by
/// this list are prime outright.
const SMALL_PRIMES: [Word; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

const SMALL_PRIME_BOUND: Word = 97 * 97;

/// Certainty used by [`BigInt::next_probable_prime`].
const DEFAULT_CERTAINTY: i32 = 100;

fn random_word(rng: &mut (impl RngCore + ?Sized)) -> Word {
    // Truncation keeps the distribution uniform on 32-bit words.
    rng.next_u64() as Word
}

/// Uniform random magnitude in `[0, bound)` by rejection sampling over
/// `bits(bound)`-bit candidates.
fn random_below(rng: &mut (impl RngCore + ?Sized), bound: &[Word]) -> Vec<Word> {
    debug_assert!(!bound.is_empty());
    let top_bits = magnitude::bits(bound) - (bound.len() as u64 - 1) * Word::BITS as u64;
    // top_bits is in [1, Word::BITS], so the shift below stays in range.
    let top_mask = Word::MAX >> (Word::BITS as u64 - top_bits);

    loop {
        let mut words: Vec<Word> = (0..bound.len()).map(|_| random_word(rng)).collect();
        *words.last_mut().expect("bound is nonzero") &= top_mask;
        magnitude::trim(&mut words);
        if magnitude::cmp(&words, bound).is_lt() {
            return words;
        }
    }
}

impl BigInt {
    /// Whether this value is prime with probability at least
    /// `1 - 4^-ceil(certainty / 2)`; the sign is ignored.
    ///
    /// A `certainty` of zero or less reports `true` unconditionally.
    /// Randomness for the Miller-Rabin bases comes from `rng`; the cost
    /// grows with both `certainty` and the candidate size, and the caller
    /// bounds both.
    pub fn is_probable_prime(&self, certainty: i32, rng: &mut (impl RngCore + ?Sized)) -> bool {
        if certainty <= 0 {
            return true;
        }

        let n = self.magnitude();
        if magnitude::cmp(n, &[2]).is_lt() {
            return false;
        }

        for p in SMALL_PRIMES {
            if n == [p] {
                return true;
            }
            if magnitude::div_rem_word(n, p).1 == 0 {
                return false;
            }
        }
        if magnitude::cmp(n, &[SMALL_PRIME_BOUND]).is_lt() {
            return true;
        }

        let rounds = (certainty as u32).div_ceil(2);
        self.miller_rabin(rounds, rng)
    }

    /// Miller-Rabin witnesses on `|self|`, assumed odd and above the small
    /// prime bound.
    fn miller_rabin(&self, rounds: u32, rng: &mut (impl RngCore + ?Sized)) -> bool {
        let n = Self::from_sign_magnitude(Sign::Positive, self.magnitude().to_vec());
        let minus_one = n.dec();

        // Decompose n - 1 == d * 2^t with d odd.
        let t = {
            let mut t = 0u64;
            while !magnitude::bit(minus_one.magnitude(), t) {
                t += 1;
            }
            t
        };
        let d = minus_one.shift_right_unsigned(t);

        // Bases are drawn uniformly from [2, n - 2].
        let base_span = minus_one.dec();

        'witness: for _ in 0..rounds {
            let base = Self::from_sign_magnitude(
                Sign::Positive,
                magnitude::add_word(&random_below(rng, base_span.magnitude()), 2),
            );

            let mut x = base.mod_pow(&d, &n).expect("modulus is nonzero");
            if x.magnitude() == [1] || x == minus_one {
                continue;
            }
            for _ in 1..t {
                x = x.mod_pow(&Self::from(2u8), &n).expect("modulus is nonzero");
                if x == minus_one {
                    continue 'witness;
                }
                if x.magnitude() == [1] {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// The smallest probable prime strictly greater than `self`, scanning
    /// upward over odd candidates.
    #[must_use]
    pub fn next_probable_prime(&self, rng: &mut (impl RngCore + ?Sized)) -> Self {
        let two = Self::from(2u8);
        if *self < two {
            return two;
        }

        let mut candidate = self.inc();
        if !candidate.is_odd() {
            candidate = candidate.inc();
        }
        while !candidate.is_probable_prime(DEFAULT_CERTAINTY, rng) {
            candidate = &candidate + &two;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn small_primes_and_composites() {
        let mut rng = rng();
        for p in [2u32, 3, 5, 7, 97, 101, 7919] {
            assert!(BigInt::from(p).is_probable_prime(64, &mut rng), "{p}");
        }
        for c in [0u32, 1, 4, 9, 91, 9409, 7917] {
            assert!(!BigInt::from(c).is_probable_prime(64, &mut rng), "{c}");
        }
    }

    #[test]
    fn zero_certainty_accepts_anything() {
        let mut rng = rng();
        assert!(BigInt::from(4u8).is_probable_prime(0, &mut rng));
        assert!(BigInt::from(4u8).is_probable_prime(-5, &mut rng));
    }

    #[test]
    fn known_large_prime() {
        // 2^127 - 1 is a Mersenne prime.
        let mut rng = rng();
        let p = (BigInt::from(1u8) << 127u32).dec();
        assert!(p.is_probable_prime(64, &mut rng));
        assert!(!p.inc().inc().is_probable_prime(64, &mut rng));
    }

    #[test]
    fn pseudoprimes_are_rejected() {
        let mut rng = rng();
        // Carmichael numbers fall to trial division here.
        for c in [561u32, 1105, 1729, 41041] {
            assert!(!BigInt::from(c).is_probable_prime(64, &mut rng), "{c}");
        }
        // 3215031751 = 151 * 751 * 28351 is a strong pseudoprime to bases
        // 2, 3, 5 and 7; only the Miller-Rabin rounds can reject it.
        assert!(!BigInt::from(3215031751u64).is_probable_prime(64, &mut rng));
    }

    #[test]
    fn next_probable_prime_scans_upward() {
        let mut rng = rng();
        assert_eq!(BigInt::ZERO.next_probable_prime(&mut rng), BigInt::from(2u8));
        assert_eq!(BigInt::from(2u8).next_probable_prime(&mut rng), BigInt::from(3u8));
        assert_eq!(BigInt::from(3u8).next_probable_prime(&mut rng), BigInt::from(5u8));
        assert_eq!(BigInt::from(7900u32).next_probable_prime(&mut rng), BigInt::from(7901u32));
        assert_eq!(BigInt::from(7901u32).next_probable_prime(&mut rng), BigInt::from(7907u32));
        let p = (BigInt::from(1u8) << 127u32).dec();
        assert_eq!(p.dec().next_probable_prime(&mut rng), p);
    }
}
