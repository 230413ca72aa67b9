#![cfg(feature = "arithmetic")]
//! Unit tests for arithmetic combinators.
//!
//! Integer division follows Rust's native semantics: truncation toward zero,
//! and a panic on a zero divisor.

use pointfree::arithmetic::{
    adding, checked_divided_by_int, divided_by_float, divided_by_int, multiplying, negated,
    remainder_by_int, subtracting,
};
use rstest::rstest;

#[rstest]
fn test_adding_is_commutative_alias() {
    assert_eq!(adding(5)(10), 15);
    assert_eq!(adding(-5)(10), 5);
    assert!((adding(0.5)(1.25) - 1.75_f64).abs() < f64::EPSILON);
}

#[rstest]
#[case(4, 10, 6)]
#[case(10, 4, -6)]
#[case(0, 7, 7)]
fn test_subtracting_takes_subtrahend_first(
    #[case] subtrahend: i32,
    #[case] minuend: i32,
    #[case] expected: i32,
) {
    assert_eq!(subtracting(subtrahend)(minuend), expected);
}

#[rstest]
fn test_multiplying_scales() {
    assert_eq!(multiplying(3)(7), 21);
    assert_eq!(multiplying(0_u64)(7), 0);
}

#[rstest]
#[case(4, 12, 3)]
#[case(2, 7, 3)]
#[case(2, -7, -3)]
#[case(-2, 7, -3)]
#[case(-2, -7, 3)]
fn test_divided_by_int_truncates_toward_zero(
    #[case] divisor: i64,
    #[case] dividend: i64,
    #[case] expected: i64,
) {
    assert_eq!(divided_by_int(divisor)(dividend), expected);
}

#[rstest]
#[should_panic(expected = "attempt to divide by zero")]
fn test_divided_by_int_by_zero_panics() {
    let by_zero = divided_by_int(0_i32);
    let _ = by_zero(12);
}

#[rstest]
#[should_panic(expected = "attempt to divide with overflow")]
fn test_divided_by_int_overflow_panics() {
    let by_minus_one = divided_by_int(-1_i8);
    let _ = by_minus_one(i8::MIN);
}

#[rstest]
#[case(4, 12, Some(3))]
#[case(0, 12, None)]
fn test_checked_divided_by_int_reports_zero_divisor(
    #[case] divisor: i32,
    #[case] dividend: i32,
    #[case] expected: Option<i32>,
) {
    assert_eq!(checked_divided_by_int(divisor)(dividend), expected);
}

#[rstest]
fn test_checked_divided_by_int_reports_overflow() {
    assert_eq!(checked_divided_by_int(-1_i64)(i64::MIN), None);
}

#[rstest]
#[case(3, 10, 1)]
#[case(3, -10, -1)]
#[case(-3, 10, 1)]
fn test_remainder_by_int_has_sign_of_dividend(
    #[case] divisor: i32,
    #[case] dividend: i32,
    #[case] expected: i32,
) {
    assert_eq!(remainder_by_int(divisor)(dividend), expected);
}

#[rstest]
fn test_divided_by_float_exact() {
    assert!((divided_by_float(2.5)(6.25) - 2.5_f64).abs() < f64::EPSILON);
    assert!((divided_by_float(4.0_f32)(1.0) - 0.25).abs() < f32::EPSILON);
}

#[rstest]
fn test_divided_by_float_by_zero_follows_ieee_754() {
    assert_eq!(divided_by_float(0.0)(1.0_f64), f64::INFINITY);
    assert_eq!(divided_by_float(0.0)(-1.0_f64), f64::NEG_INFINITY);
    assert!(divided_by_float(0.0)(0.0_f64).is_nan());
}

#[rstest]
#[case(-4, 4)]
#[case(4, -4)]
#[case(0, 0)]
fn test_negated_flips_sign(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(negated(input), expected);
}

#[rstest]
fn test_combinators_chain_in_pipeline_order() {
    let celsius = vec![0.0, 100.0, -40.0];

    let fahrenheit: Vec<f64> = celsius
        .into_iter()
        .map(multiplying(9.0))
        .map(divided_by_float(5.0))
        .map(adding(32.0))
        .collect();

    assert_eq!(fahrenheit, vec![32.0, 212.0, -40.0]);
}
