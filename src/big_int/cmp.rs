//! [`BigInt`] comparison: total order over sign, magnitude length, then
//! words from most significant to least.

use crate::{BigInt, Sign, magnitude};
use core::cmp::Ordering;

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {
                let by_magnitude = magnitude::cmp(self.magnitude(), other.magnitude());
                if self.sign() == Sign::Negative {
                    by_magnitude.reverse()
                } else {
                    by_magnitude
                }
            }
            other => other,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
