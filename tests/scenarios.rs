// ============================================================================
// Scenario Tests
// Fixed inputs with known results
// ============================================================================

use decimal_bigint::prelude::*;
use std::cmp::Ordering;

const E: &str = "-1231023850234534630463482374082730840700823482156342346575544530001230980121241952509120396794579347945898457";
const F: &str = "23452345234523452672457022402343457349829348887857684586";

fn big(s: &str) -> BigInt {
    BigInt::from_string(s).unwrap()
}

#[test]
fn test_mixed_sign_addition() {
    assert_eq!((big("-100") + big("150")).to_string(), "50");
}

#[test]
fn test_subtraction_below_zero() {
    assert_eq!((big("100") - big("150")).to_string(), "-50");
}

#[test]
fn test_negative_less_than_positive() {
    assert_eq!(big("-150").compare(&big("100")), Ordering::Less);
}

#[test]
fn test_borrow_across_fifty_digits_then_increment() {
    let mut result = big("100000000000000000000000000000000000000000000000000")
        - big("99999999999999999999999999999999999999999999999999");
    assert_eq!(result.to_string(), "1");
    assert_eq!(result.digit_count(), 1);

    assert_eq!(result.post_increment().to_string(), "1");
    assert_eq!(result.to_string(), "2");

    assert_eq!(result.increment().to_string(), "3");
}

#[test]
fn test_non_numeric_rejected() {
    assert_eq!(
        BigInt::from_string("abc"),
        Err(BigIntError::InvalidFormat("abc".to_string()))
    );
}

#[test]
fn test_empty_is_zero() {
    assert_eq!(big(""), big("0"));
}

#[test]
fn test_pairwise_table() {
    let values = [-100i64, 150, 100, -150];

    for &a in &values {
        for &b in &values {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            assert_eq!(x.compare(&y), a.cmp(&b), "{} cmp {}", a, b);
            assert_eq!((&x + &y).to_string(), (a + b).to_string(), "{} + {}", a, b);
            assert_eq!((&x - &y).to_string(), (a - b).to_string(), "{} - {}", a, b);
        }
    }
}

#[test]
fn test_compound_assignment_from_small_values() {
    let mut x = BigInt::from(10);
    x += BigInt::from(5);
    assert_eq!(x.to_string(), "15");

    let mut y = BigInt::from(10);
    y -= BigInt::from(5);
    assert_eq!(y.to_string(), "5");
}

#[test]
fn test_very_large_operands() {
    let e = big(E);
    let f = big(F);

    assert_eq!(
        (&e + &f).to_string(),
        "-1231023850234534630463482374082730840700823482156342323123199295477778307664219550165663046965230460088213871"
    );
    assert_eq!(
        (&e - &f).to_string(),
        "-1231023850234534630463482374082730840700823482156342370027889764524683652578264354852577746623928235803583043"
    );
    assert_eq!(
        (-&e + &f).to_string(),
        "1231023850234534630463482374082730840700823482156342370027889764524683652578264354852577746623928235803583043"
    );
    assert_eq!(
        (-&e - &f).to_string(),
        "1231023850234534630463482374082730840700823482156342323123199295477778307664219550165663046965230460088213871"
    );
}

#[test]
fn test_carry_extends_length() {
    let nines = big(&"9".repeat(60));
    let sum = &nines + &BigInt::one();
    assert_eq!(sum.to_string(), format!("1{}", "0".repeat(60)));
    assert_eq!(sum.digit_count(), 61);
}

#[test]
fn test_i64_boundaries() {
    let max = BigInt::from(i64::MAX);
    let min = BigInt::from(i64::MIN);

    assert_eq!((&max + &BigInt::one()).to_string(), "9223372036854775808");
    assert_eq!((&min - &BigInt::one()).to_string(), "-9223372036854775809");
    assert_eq!((&max + &min).to_string(), "-1");
}
