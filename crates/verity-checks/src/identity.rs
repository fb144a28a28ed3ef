//! Null, reference identity, and boolean checks.

use verity_core::{CheckResult, Message};
use verity_value::Value;

use crate::context::RunContext;
use crate::failure;

/// Checks that `value` is null.
pub fn check_null(ctx: &RunContext, value: &Value, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    if value.is_null() {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected null, was {value}"),
        Some("null".to_string()),
        Some(value.to_string()),
    ))
}

/// Checks that `value` is not null.
pub fn check_not_null(ctx: &RunContext, value: &Value, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    if !value.is_null() {
        return Ok(());
    }
    Err(failure(
        message,
        "expected a non-null value, was null".to_string(),
        None,
        Some("null".to_string()),
    ))
}

/// Checks that `expected` and `actual` are the same reference.
pub fn check_same<T: ?Sized>(
    ctx: &RunContext,
    expected: &T,
    actual: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if std::ptr::eq(expected, actual) {
        return Ok(());
    }
    Err(failure(
        message,
        "expected both operands to be the same reference".to_string(),
        None,
        None,
    ))
}

/// Checks that `expected` and `actual` are distinct references.
pub fn check_not_same<T: ?Sized>(
    ctx: &RunContext,
    expected: &T,
    actual: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if !std::ptr::eq(expected, actual) {
        return Ok(());
    }
    Err(failure(
        message,
        "expected the operands to be distinct references".to_string(),
        None,
        None,
    ))
}

/// Checks that `condition` holds.
pub fn check_true(ctx: &RunContext, condition: bool, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    if condition {
        return Ok(());
    }
    Err(failure(
        message,
        "expected condition to be true".to_string(),
        Some("true".to_string()),
        Some("false".to_string()),
    ))
}

/// Checks that `condition` does not hold.
pub fn check_false(ctx: &RunContext, condition: bool, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    if !condition {
        return Ok(());
    }
    Err(failure(
        message,
        "expected condition to be false".to_string(),
        Some("false".to_string()),
        Some("true".to_string()),
    ))
}
