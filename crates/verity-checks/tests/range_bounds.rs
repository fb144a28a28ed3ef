use verity_checks::{check_between, check_not_between, RunContext};

#[test]
fn between_inclusive_of_both_bounds() {
    let ctx = RunContext::new();
    assert!(check_between(&ctx, &5, &1, &10, None).is_ok());
    assert!(check_between(&ctx, &1, &1, &10, None).is_ok());
    assert!(check_between(&ctx, &10, &1, &10, None).is_ok());
    assert!(check_between(&ctx, &0, &1, &10, None).is_err());
    assert!(check_between(&ctx, &11, &1, &10, None).is_err());
}

#[test]
fn reversed_bounds_are_auto_ordered() {
    let ctx = RunContext::new();
    assert!(check_between(&ctx, &1, &10, &1, None).is_ok());
    assert!(check_between(&ctx, &5, &10, &1, None).is_ok());
    assert!(check_not_between(&ctx, &0, &10, &1, None).is_ok());
}

#[test]
fn failure_names_the_violated_bound() {
    let ctx = RunContext::new();
    let err = check_between(&ctx, &0, &1, &10, None).unwrap_err();
    assert!(err.info().message.contains("lower bound 1"), "was: {}", err.info().message);
    let err = check_between(&ctx, &11, &1, &10, None).unwrap_err();
    assert!(err.info().message.contains("upper bound 10"), "was: {}", err.info().message);
}

#[test]
fn not_between_fails_on_bound_equality() {
    let ctx = RunContext::new();
    assert!(check_not_between(&ctx, &0, &1, &10, None).is_ok());
    assert!(check_not_between(&ctx, &11, &1, &10, None).is_ok());
    assert!(check_not_between(&ctx, &1, &1, &10, None).is_err());
    assert!(check_not_between(&ctx, &10, &1, &10, None).is_err());
    assert!(check_not_between(&ctx, &5, &1, &10, None).is_err());
}

#[test]
fn incomparable_bounds_fail() {
    let ctx = RunContext::new();
    assert!(check_between(&ctx, &1.0, &f64::NAN, &10.0, None).is_err());
    assert!(check_not_between(&ctx, &1.0, &f64::NAN, &10.0, None).is_err());
}

#[test]
fn incomparable_test_value_fails() {
    let ctx = RunContext::new();
    assert!(check_between(&ctx, &f64::NAN, &1.0, &10.0, None).is_err());
    assert!(check_not_between(&ctx, &f64::NAN, &1.0, &10.0, None).is_err());
}

#[test]
fn range_counts_once_per_call() {
    let ctx = RunContext::new();
    let _ = check_between(&ctx, &5, &1, &10, None);
    let _ = check_not_between(&ctx, &5, &1, &10, None);
    assert_eq!(ctx.count(), 2);
}
