//! Magnitude comparison.

use crate::word::Word;
use core::cmp::Ordering;

/// Compares two canonical magnitudes: length first, then words from most
/// significant down.
pub(crate) fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for (x, y) in a.iter().rev().zip(b.iter().rev()) {
                match x.cmp(y) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        other => other,
    }
}
