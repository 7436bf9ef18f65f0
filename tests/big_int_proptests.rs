//! Equivalence tests between `bigmath::BigInt` and `num_bigint::BigInt`.

use bigmath::{BigInt, Endian};
use num_bigint::BigInt as OracleInt;
use proptest::prelude::*;

fn to_oracle(value: &BigInt) -> OracleInt {
    OracleInt::from_signed_bytes_be(&value.to_bytes(Endian::Big))
}

fn from_oracle(value: &OracleInt) -> BigInt {
    BigInt::from_bytes(&value.to_signed_bytes_be(), Endian::Big)
}

prop_compose! {
    fn big_int()(magnitude in any::<Vec<u8>>(), negative in any::<bool>()) -> BigInt {
        let value = BigInt::from_bytes_unsigned(&magnitude, Endian::Big);
        if negative { -value } else { value }
    }
}

proptest! {
    #[test]
    fn signed_bytes_roundtrip(a in big_int()) {
        prop_assert_eq!(&from_oracle(&to_oracle(&a)), &a);
        for endian in [Endian::Big, Endian::Little] {
            prop_assert_eq!(&BigInt::from_bytes(&a.to_bytes(endian), endian), &a);
        }
    }

    #[test]
    fn add_sub_matches(a in big_int(), b in big_int()) {
        prop_assert_eq!(to_oracle(&(&a + &b)), to_oracle(&a) + to_oracle(&b));
        prop_assert_eq!(to_oracle(&(&a - &b)), to_oracle(&a) - to_oracle(&b));
    }

    #[test]
    fn mul_matches(a in big_int(), b in big_int()) {
        prop_assert_eq!(to_oracle(&(&a * &b)), to_oracle(&a) * to_oracle(&b));
    }

    #[test]
    fn div_rem_matches(a in big_int(), b in big_int()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(to_oracle(&q), to_oracle(&a) / to_oracle(&b));
        prop_assert_eq!(to_oracle(&r), to_oracle(&a) % to_oracle(&b));
    }

    #[test]
    fn bitwise_matches(a in big_int(), b in big_int()) {
        prop_assert_eq!(to_oracle(&(&a & &b)), to_oracle(&a) & to_oracle(&b));
        prop_assert_eq!(to_oracle(&(&a | &b)), to_oracle(&a) | to_oracle(&b));
        prop_assert_eq!(to_oracle(&(&a ^ &b)), to_oracle(&a) ^ to_oracle(&b));
        prop_assert_eq!(to_oracle(&!&a), !to_oracle(&a));
    }

    #[test]
    fn shifts_match(a in big_int(), count in 0u32..300) {
        prop_assert_eq!(
            to_oracle(&a.shift_left(i64::from(count))),
            to_oracle(&a) << count
        );
        prop_assert_eq!(
            to_oracle(&a.shift_right(i64::from(count))),
            to_oracle(&a) >> count
        );
    }

    #[test]
    fn ordering_matches(a in big_int(), b in big_int()) {
        prop_assert_eq!(a.cmp(&b), to_oracle(&a).cmp(&to_oracle(&b)));
    }

    #[test]
    fn decimal_text_matches(a in big_int()) {
        let text = a.to_str_radix(10);
        prop_assert_eq!(&text, &to_oracle(&a).to_str_radix(10));
        prop_assert_eq!(text.parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn hex_text_roundtrips(a in big_int()) {
        let text = a.to_str_radix(16);
        prop_assert_eq!(BigInt::from_str_radix(&text, 16).unwrap(), a);
    }

    #[test]
    fn bit_length_matches(a in big_int()) {
        // Bits of the minimal two's-complement form without the sign bit,
        // which for a negative value is the magnitude of `a + 1`.
        let expected = if a.is_negative() {
            (to_oracle(&a.abs()) - OracleInt::from(1u8)).bits()
        } else {
            to_oracle(&a).bits()
        };
        prop_assert_eq!(a.bit_length(), expected);
    }

    #[test]
    fn mod_pow_matches(a in big_int(), e in 0u32..50, m in big_int()) {
        prop_assume!(!m.is_zero());
        let result = a.mod_pow(&BigInt::from(e), &m).unwrap();
        let oracle = to_oracle(&a.abs()).modpow(&OracleInt::from(e), &to_oracle(&m.abs()));
        if a.is_negative() && e % 2 == 1 {
            prop_assert_eq!(to_oracle(&-result), oracle);
        } else {
            prop_assert_eq!(to_oracle(&result), oracle);
        }
    }

    #[test]
    fn gcd_divides_both(a in big_int(), b in big_int()) {
        let g = a.gcd(&b);
        if g.is_zero() {
            prop_assert!(a.is_zero() && b.is_zero());
        } else {
            prop_assert!(a.div_rem(&g).unwrap().1.is_zero());
            prop_assert!(b.div_rem(&g).unwrap().1.is_zero());
        }
    }
}
