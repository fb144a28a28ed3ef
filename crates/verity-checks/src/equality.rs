//! Value equality, tolerance equality, and NaN checks.

use verity_core::{CheckResult, Message};
use verity_value::{values_equal, within_delta, EqualityDecision, Floating, Value};

use crate::context::RunContext;
use crate::failure;

/// One equality evaluation: expected and actual, created per call and
/// discarded after the verdict.
struct Comparison<'a> {
    expected: &'a Value,
    actual: &'a Value,
}

impl<'a> Comparison<'a> {
    fn decide(&self, ctx: &RunContext) -> EqualityDecision {
        values_equal(self.expected, self.actual, ctx.comparer())
    }

    fn fail(&self, message: Option<&Message>, mut default: String, detail: Option<&str>) -> CheckResult {
        if let Some(detail) = detail {
            default.push_str(" (");
            default.push_str(detail);
            default.push(')');
        }
        Err(failure(
            message,
            default,
            Some(self.expected.to_string()),
            Some(self.actual.to_string()),
        ))
    }
}

/// Checks that `actual` equals `expected` under value equality: numeric
/// kinds unify through their canonical decimal text, sequences delegate to
/// the context's comparer, everything else uses its own equality.
pub fn check_eq(
    ctx: &RunContext,
    expected: &Value,
    actual: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    let comparison = Comparison { expected, actual };
    let decision = comparison.decide(ctx);
    if decision.equal {
        return Ok(());
    }
    comparison.fail(
        message,
        format!("expected {expected}, was {actual}"),
        decision.detail.as_deref(),
    )
}

/// Checks that `actual` does not equal `expected` under value equality.
pub fn check_ne(
    ctx: &RunContext,
    expected: &Value,
    actual: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    let comparison = Comparison { expected, actual };
    if !comparison.decide(ctx).equal {
        return Ok(());
    }
    comparison.fail(
        message,
        format!("expected a value different from {expected}"),
        None,
    )
}

/// Checks that `actual` lies within `delta` of `expected`.
///
/// A negative or NaN `delta` raises invalid-argument before comparing; an
/// infinite `expected` matches only the same signed infinity.
pub fn check_eq_within<F: Floating>(
    ctx: &RunContext,
    expected: F,
    actual: F,
    delta: F,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if within_delta(expected, actual, delta)? {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected {actual} to be within {delta} of {expected}"),
        Some(format!("{expected} ± {delta}")),
        Some(format!("{actual}")),
    ))
}

/// Checks that `value` is NaN.
pub fn check_nan<F: Floating>(ctx: &RunContext, value: F, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    if value.is_nan() {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected NaN, was {value}"),
        Some("NaN".to_string()),
        Some(format!("{value}")),
    ))
}
