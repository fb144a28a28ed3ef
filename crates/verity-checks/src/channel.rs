//! Explicit failure, skip, and warning emission.

use verity_core::{CheckError, CheckResult, Message, SignalInfo};

use crate::context::RunContext;
use crate::signal_message;

/// Raises an unconditional failure. The return type has no success arm:
/// `fail` always produces a signal, either the failure itself or the
/// invalid-argument raised by a malformed message template.
pub fn fail(ctx: &RunContext, message: Option<&Message>) -> CheckError {
    ctx.increment_count();
    match signal_message(message, "explicit failure".to_string()) {
        Ok(text) => CheckError::Failure(SignalInfo::new(text)),
        Err(err) => err,
    }
}

/// Raises a skip signal with a mandatory reason.
///
/// An empty rendered reason is API misuse and raises invalid-argument
/// instead of the skip.
pub fn ignore(ctx: &RunContext, message: &Message) -> CheckError {
    ctx.increment_count();
    match message.render() {
        Ok(text) if text.trim().is_empty() => {
            CheckError::invalid_argument("skip reason must not be empty")
        }
        Ok(text) => CheckError::Skip(SignalInfo::new(text)),
        Err(err) => err,
    }
}

/// Appends a warning record to the run without raising any signal and
/// without touching the assertion count.
pub fn warn(ctx: &RunContext, message: &Message) -> CheckResult {
    let text = message.render()?;
    if text.trim().is_empty() {
        return Err(CheckError::invalid_argument("warning must not be empty"));
    }
    ctx.push_warning(text);
    Ok(())
}
