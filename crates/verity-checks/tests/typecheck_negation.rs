use verity_checks::{
    check_assignable_from, check_instance_of, check_not_assignable_from, check_not_instance_of,
    fail, ignore, RunContext,
};
use verity_core::{CheckError, Message};
use verity_value::{Value, ValueKind};

#[test]
fn instance_of_exact_kind() {
    let ctx = RunContext::new();
    assert!(check_instance_of(&ctx, &Value::Int(1), ValueKind::Signed, None).is_ok());
    assert!(check_instance_of(&ctx, &Value::Int(1), ValueKind::Unsigned, None).is_err());
    assert!(check_instance_of(&ctx, &Value::from("x"), ValueKind::Str, None).is_ok());
}

#[test]
fn assignability_widens_one_way() {
    let ctx = RunContext::new();
    assert!(check_assignable_from(&ctx, ValueKind::Decimal, &Value::Int(1), None).is_ok());
    assert!(check_assignable_from(&ctx, ValueKind::Float64, &Value::Float32(1.0), None).is_ok());
    assert!(check_assignable_from(&ctx, ValueKind::Float32, &Value::Float(1.0), None).is_err());
    assert!(check_assignable_from(&ctx, ValueKind::Signed, &Value::from("1"), None).is_err());
}

#[test]
fn negation_inverts_failure_into_success() {
    let ctx = RunContext::new();
    assert!(check_not_instance_of(&ctx, &Value::Int(1), ValueKind::Str, None).is_ok());
    assert!(check_not_assignable_from(&ctx, ValueKind::Float32, &Value::Float(1.0), None).is_ok());
}

#[test]
fn negation_inverts_success_into_failure() {
    let ctx = RunContext::new();
    let err = check_not_instance_of(&ctx, &Value::Int(1), ValueKind::Signed, None).unwrap_err();
    assert!(err.is_failure());
    assert!(err.info().message.contains("not an instance of signed"));

    let err =
        check_not_assignable_from(&ctx, ValueKind::Decimal, &Value::Int(1), None).unwrap_err();
    assert!(err.is_failure());
}

#[test]
fn negation_failure_uses_the_user_message() {
    let ctx = RunContext::new();
    let message = Message::text("should not have been a string");
    let err =
        check_not_instance_of(&ctx, &Value::from("x"), ValueKind::Str, Some(&message)).unwrap_err();
    assert_eq!(err.info().message, "should not have been a string");
}

#[test]
fn negations_count_once_at_the_outer_call() {
    let ctx = RunContext::new();
    let _ = check_not_instance_of(&ctx, &Value::Int(1), ValueKind::Str, None);
    let _ = check_not_assignable_from(&ctx, ValueKind::Signed, &Value::Int(1), None);
    assert_eq!(ctx.count(), 2);
}

#[test]
fn skip_signals_pass_through_negations_elsewhere_uninverted() {
    // The negation wrappers catch only failure signals; a skip raised by
    // the channel keeps its identity end to end.
    let ctx = RunContext::new();
    let skip = ignore(&ctx, &Message::text("flaky on CI"));
    assert!(skip.is_skip());
    let failure = fail(&ctx, None);
    assert!(failure.is_failure());
    assert!(!matches!(skip, CheckError::Failure(_)));
}
