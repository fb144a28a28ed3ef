#![deny(missing_docs)]
#![doc = "The public check catalog of the verity engine."]

use verity_core::{CheckError, Message, SignalInfo};

pub mod channel;
pub mod containment;
pub mod context;
pub mod equality;
pub mod identity;
pub mod ordering;
pub mod range;
pub mod typecheck;

pub use channel::{fail, ignore, warn};
pub use containment::{
    check_contains, check_contains_in, check_empty, check_not_contains, check_not_contains_in,
    check_not_empty, check_str_contains, check_str_not_contains,
};
pub use context::{RecordedRun, ReportRun, RunContext, RunSummary};
pub use equality::{check_eq, check_eq_within, check_nan, check_ne};
pub use identity::{
    check_false, check_not_null, check_not_same, check_null, check_same, check_true,
};
pub use ordering::{check_greater, check_greater_or_equal, check_less, check_less_or_equal};
pub use range::{check_between, check_not_between};
pub use typecheck::{
    check_assignable_from, check_instance_of, check_not_assignable_from, check_not_instance_of,
};

/// Renders the user supplied message, falling back to the check's default.
///
/// A malformed template propagates its invalid-argument signal unchanged.
pub(crate) fn signal_message(
    message: Option<&Message>,
    default: String,
) -> Result<String, CheckError> {
    match message {
        Some(message) => message.render(),
        None => Ok(default),
    }
}

/// Builds a failure signal with the rendered message and optional
/// expected/actual payload fields.
pub(crate) fn failure(
    message: Option<&Message>,
    default: String,
    expected: Option<String>,
    actual: Option<String>,
) -> CheckError {
    let text = match signal_message(message, default) {
        Ok(text) => text,
        Err(err) => return err,
    };
    let mut info = SignalInfo::new(text);
    if let Some(expected) = expected {
        info = info.with_expected(expected);
    }
    if let Some(actual) = actual {
        info = info.with_actual(actual);
    }
    CheckError::Failure(info)
}
