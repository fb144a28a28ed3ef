//! Kind-level type compatibility checks and their negations.
//!
//! The negations are the only place in the engine that catches a failure
//! signal: the positive evaluation runs, a failure inverts to success, a
//! success inverts to failure, and skip or invalid-argument signals pass
//! through untouched.

use verity_core::{CheckError, CheckResult, Message};
use verity_value::{Value, ValueKind};

use crate::context::RunContext;
use crate::failure;

fn instance_eval(value: &Value, kind: ValueKind, message: Option<&Message>) -> CheckResult {
    if value.kind() == kind {
        return Ok(());
    }
    Err(failure(
        message,
        format!(
            "expected an instance of {}, was {}",
            kind.name(),
            value.kind().name()
        ),
        Some(kind.name().to_string()),
        Some(value.kind().name().to_string()),
    ))
}

fn assignable_eval(target: ValueKind, value: &Value, message: Option<&Message>) -> CheckResult {
    if target.assignable_from(value.kind()) {
        return Ok(());
    }
    Err(failure(
        message,
        format!(
            "expected a value assignable to {}, was {}",
            target.name(),
            value.kind().name()
        ),
        Some(format!("assignable to {}", target.name())),
        Some(value.kind().name().to_string()),
    ))
}

fn invert(outcome: CheckResult, inverted_failure: CheckError) -> CheckResult {
    match outcome {
        Ok(()) => Err(inverted_failure),
        Err(CheckError::Failure(_)) => Ok(()),
        Err(other) => Err(other),
    }
}

/// Checks that `value` is exactly of kind `kind`.
pub fn check_instance_of(
    ctx: &RunContext,
    value: &Value,
    kind: ValueKind,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    instance_eval(value, kind, message)
}

/// Checks that `value` is not of kind `kind`.
pub fn check_not_instance_of(
    ctx: &RunContext,
    value: &Value,
    kind: ValueKind,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    invert(
        instance_eval(value, kind, None),
        failure(
            message,
            format!("expected a value that is not an instance of {}", kind.name()),
            Some(format!("not an instance of {}", kind.name())),
            Some(value.kind().name().to_string()),
        ),
    )
}

/// Checks that `value`'s kind is assignable to `target`: every kind to
/// itself, the integral kinds to decimal, and float32 to float64.
pub fn check_assignable_from(
    ctx: &RunContext,
    target: ValueKind,
    value: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    assignable_eval(target, value, message)
}

/// Checks that `value`'s kind is not assignable to `target`.
pub fn check_not_assignable_from(
    ctx: &RunContext,
    target: ValueKind,
    value: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    invert(
        assignable_eval(target, value, None),
        failure(
            message,
            format!(
                "expected a value not assignable to {}, but {} is",
                target.name(),
                value.kind().name()
            ),
            Some(format!("not assignable to {}", target.name())),
            Some(value.kind().name().to_string()),
        ),
    )
}
