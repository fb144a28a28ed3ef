//! Range checks with automatic bound normalization.

use std::cmp::Ordering;
use std::fmt::Debug;

use verity_core::{CheckResult, Message};

use crate::context::RunContext;
use crate::failure;

/// Orders the two bounds, smaller first. Reversed bounds are accepted and
/// swapped; incomparable bounds are `None`.
fn normalize<'a, T: PartialOrd>(bound1: &'a T, bound2: &'a T) -> Option<(&'a T, &'a T)> {
    match bound1.partial_cmp(bound2)? {
        Ordering::Greater => Some((bound2, bound1)),
        _ => Some((bound1, bound2)),
    }
}

/// Checks that `min <= test <= max`, where the bounds may arrive in either
/// order. The two bound conditions are evaluated independently so the
/// failure message names the violated bound.
pub fn check_between<T: PartialOrd + Debug>(
    ctx: &RunContext,
    test: &T,
    bound1: &T,
    bound2: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    let Some((min, max)) = normalize(bound1, bound2) else {
        return Err(bounds_failure(message, bound1, bound2));
    };
    match test.partial_cmp(min) {
        Some(Ordering::Less) => {
            return Err(failure(
                message,
                format!("expected {test:?} to be at least the lower bound {min:?}"),
                Some(format!(">= {min:?}")),
                Some(format!("{test:?}")),
            ))
        }
        None => return Err(incomparable_failure(message, test, min, max)),
        Some(_) => {}
    }
    match test.partial_cmp(max) {
        Some(Ordering::Greater) => Err(failure(
            message,
            format!("expected {test:?} to be at most the upper bound {max:?}"),
            Some(format!("<= {max:?}")),
            Some(format!("{test:?}")),
        )),
        None => Err(incomparable_failure(message, test, min, max)),
        Some(_) => Ok(()),
    }
}

/// Checks that `test < min || test > max`; a value equal to either bound
/// fails. Bounds normalize the same way as [`check_between`].
pub fn check_not_between<T: PartialOrd + Debug>(
    ctx: &RunContext,
    test: &T,
    bound1: &T,
    bound2: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    let Some((min, max)) = normalize(bound1, bound2) else {
        return Err(bounds_failure(message, bound1, bound2));
    };
    let below = matches!(test.partial_cmp(min), Some(Ordering::Less));
    let above = matches!(test.partial_cmp(max), Some(Ordering::Greater));
    if below || above {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected {test:?} to lie outside [{min:?}, {max:?}]"),
        Some(format!("outside [{min:?}, {max:?}]")),
        Some(format!("{test:?}")),
    ))
}

fn bounds_failure<T: Debug>(message: Option<&Message>, bound1: &T, bound2: &T) -> verity_core::CheckError {
    failure(
        message,
        format!("range bounds {bound1:?} and {bound2:?} cannot be ordered"),
        None,
        None,
    )
}

fn incomparable_failure<T: Debug>(
    message: Option<&Message>,
    test: &T,
    min: &T,
    max: &T,
) -> verity_core::CheckError {
    failure(
        message,
        format!("{test:?} cannot be compared with the bounds [{min:?}, {max:?}]"),
        Some(format!("within [{min:?}, {max:?}]")),
        Some(format!("{test:?}")),
    )
}
