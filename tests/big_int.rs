//! End-to-end tests for [`BigInt`].

use bigmath::{BigInt, DecimalStyle, Endian, Error, PlainStyle};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn big(text: &str) -> BigInt {
    text.parse().unwrap()
}

#[test]
fn factorial_of_thirty() {
    let mut acc = BigInt::from(1u8);
    for i in 2u32..=30 {
        acc = acc * BigInt::from(i);
    }
    assert_eq!(acc, big("265252859812191058636308480000000"));
    assert_eq!(acc.to_str_radix(10), "265252859812191058636308480000000");
}

#[test]
fn division_law_holds_for_large_operands() {
    let a = big("-123456789012345678901234567890123456789012345678901234567890");
    let b = big("9876543210987654321098765432109");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(&q * &b + &r, a);
    assert!(r.is_negative() || r.is_zero());
    assert!(r.abs() < b);
}

#[test]
fn radix_text_roundtrips_across_the_range() {
    let value = big("-98765432109876543210987654321098765432109876543210");
    for radix in 2..=36 {
        let text = value.to_str_radix(radix);
        assert_eq!(BigInt::from_str_radix(&text, radix).unwrap(), value, "radix {radix}");
    }
}

#[test]
fn signed_byte_encoding_roundtrips() {
    let values = [
        BigInt::ZERO,
        big("127"),
        big("128"),
        big("-128"),
        big("-129"),
        big("170141183460469231731687303715884105728"),
        big("-170141183460469231731687303715884105729"),
    ];
    for value in &values {
        for endian in [Endian::Big, Endian::Little] {
            let bytes = value.to_bytes(endian);
            assert_eq!(&BigInt::from_bytes(&bytes, endian), value, "{value}");
        }
    }
    assert_eq!(BigInt::ZERO.to_bytes(Endian::Big), Vec::<u8>::new());
}

#[test]
fn unsigned_byte_encoding_rejects_negatives() {
    assert_eq!(big("-1").to_bytes_unsigned(Endian::Big), Err(Error::Overflow));
    let n = big("65536");
    let bytes = n.to_bytes_unsigned(Endian::Big).unwrap();
    assert_eq!(bytes, [1, 0, 0]);
    assert_eq!(BigInt::from_bytes_unsigned(&bytes, Endian::Big), n);
}

#[test]
fn modular_arithmetic_fits_together() {
    let p = big("170141183460469231731687303715884105727"); // 2^127 - 1
    let a = big("123456789123456789123456789");
    // Fermat: a^(p-1) == 1 (mod p) for prime p.
    let exp = &p - BigInt::from(1u8);
    assert_eq!(a.mod_pow(&exp, &p).unwrap(), BigInt::from(1u8));

    let inv = a.mod_inverse(&p).unwrap();
    assert_eq!((&a * &inv).div_rem(&p).unwrap().1, BigInt::from(1u8));
    assert!(!inv.is_negative() && inv < p);
}

#[test]
fn mod_pow_rejects_bad_arguments() {
    let two = BigInt::from(2u8);
    assert_eq!(two.mod_pow(&big("-1"), &big("7")), Err(Error::NegativeExponent));
    assert_eq!(two.mod_pow(&two, &BigInt::ZERO), Err(Error::ZeroModulus));
    assert_eq!(big("6").mod_inverse(&big("9")), Err(Error::NotInvertible));
}

#[test]
fn primality_testing_with_a_seeded_rng() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mersenne = big("170141183460469231731687303715884105727");
    assert!(mersenne.is_probable_prime(100, &mut rng));
    assert!(!(&mersenne + BigInt::from(2u8)).is_probable_prime(100, &mut rng));

    let next = big("1000000000000000000000").next_probable_prime(&mut rng);
    assert!(next.is_probable_prime(100, &mut rng));
    assert!(next > big("1000000000000000000000"));
}

#[test]
fn bitwise_operators_behave_like_twos_complement() {
    let a = big("-123456789123456789123456789");
    let b = big("987654321987654321");
    let a128: i128 = -123456789123456789123456789;
    let b128: i128 = 987654321987654321;
    assert_eq!(&a & &b, BigInt::from(a128 & b128));
    assert_eq!(&a | &b, BigInt::from(a128 | b128));
    assert_eq!(&a ^ &b, BigInt::from(a128 ^ b128));
    assert_eq!(!&a, BigInt::from(!a128));
}

#[test]
fn signed_shifts_round_toward_negative_infinity() {
    assert_eq!(big("-7").shift_right(1), big("-4"));
    assert_eq!(big("-1").shift_right(100), big("-1"));
    assert_eq!(big("5").shift_left(-1), big("2"));
    assert_eq!(big("1").shift_left(200).bit_length(), 201);
}

#[test]
fn decimal_helpers() {
    assert_eq!(BigInt::parse_decimal("12.99").unwrap(), big("12"));
    assert_eq!(BigInt::parse_decimal("-12.99").unwrap(), big("-12"));
    assert_eq!(BigInt::parse_decimal("1e3"), Err(Error::Format));
    assert_eq!(big("-42").format_decimal(&PlainStyle), "-42");

    struct Accounting;
    impl DecimalStyle for Accounting {
        fn negative_sign(&self) -> &str {
            "("
        }
    }
    assert_eq!(big("-42").format_decimal(&Accounting), "(42");
}
