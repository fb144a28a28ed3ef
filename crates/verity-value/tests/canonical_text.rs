use std::str::FromStr;

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use verity_value::{canonical_text, Value};

#[test]
fn integral_and_float_one_share_canonical_text() {
    assert_eq!(canonical_text(&Value::Int(1)).as_deref(), Some("1"));
    assert_eq!(canonical_text(&Value::Float(1.0)).as_deref(), Some("1"));
    assert_eq!(canonical_text(&Value::Float32(1.0)).as_deref(), Some("1"));
    assert_eq!(canonical_text(&Value::UInt(1)).as_deref(), Some("1"));
}

#[test]
fn fractional_float_keeps_its_digits() {
    assert_eq!(canonical_text(&Value::Float(1.5)).as_deref(), Some("1.5"));
    assert_eq!(canonical_text(&Value::Float32(0.1)).as_deref(), Some("0.1"));
}

#[test]
fn u64_beyond_f64_precision_keeps_exact_digits() {
    let exact = canonical_text(&Value::UInt(u64::MAX)).unwrap();
    let rounded = canonical_text(&Value::Float(u64::MAX as f64)).unwrap();
    assert_eq!(exact, "18446744073709551615");
    assert_ne!(exact, rounded);
}

#[test]
fn negative_zero_normalizes() {
    assert_eq!(canonical_text(&Value::Float(-0.0)).as_deref(), Some("0"));
    assert_eq!(canonical_text(&Value::Float32(-0.0)).as_deref(), Some("0"));
    assert_eq!(canonical_text(&Value::Int(0)).as_deref(), Some("0"));
}

#[test]
fn non_finite_floats_have_stable_text() {
    assert_eq!(
        canonical_text(&Value::Float(f64::INFINITY)).as_deref(),
        Some("inf")
    );
    assert_eq!(
        canonical_text(&Value::Float(f64::NEG_INFINITY)).as_deref(),
        Some("-inf")
    );
    assert_eq!(canonical_text(&Value::Float(f64::NAN)).as_deref(), Some("NaN"));
    assert_eq!(canonical_text(&Value::Float32(f32::NAN)).as_deref(), Some("NaN"));
}

#[test]
fn decimal_drops_trailing_zeros() {
    let d = BigDecimal::from_str("1.500").unwrap();
    assert_eq!(canonical_text(&Value::Decimal(d)).as_deref(), Some("1.5"));
    let whole = BigDecimal::from_str("1.000").unwrap();
    assert_eq!(canonical_text(&Value::Decimal(whole)).as_deref(), Some("1"));
}

proptest! {
    // Every i32 is exactly representable at f64 width, so the integral and
    // floating renderings must agree.
    #[test]
    fn exactly_representable_integers_agree_across_kinds(n in any::<i32>()) {
        let integral = canonical_text(&Value::Int(i64::from(n)));
        let floating = canonical_text(&Value::Float(f64::from(n)));
        prop_assert_eq!(integral, floating);
    }

    // Integral canonical text is the plain decimal rendering.
    #[test]
    fn integral_canonical_text_is_decimal(n in any::<i64>()) {
        prop_assert_eq!(canonical_text(&Value::Int(n)), Some(n.to_string()));
    }
}

#[test]
fn non_numeric_shapes_have_no_canonical_text() {
    assert_eq!(canonical_text(&Value::Null), None);
    assert_eq!(canonical_text(&Value::Bool(true)), None);
    assert_eq!(canonical_text(&Value::from("1")), None);
    assert_eq!(canonical_text(&Value::Seq(vec![Value::Int(1)])), None);
}
