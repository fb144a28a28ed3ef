//! Containment, emptiness, and substring checks.
//!
//! Membership over containers deliberately uses raw value equality rather
//! than the equality resolver: an integral `1` inside a sequence does not
//! match a float `1.0` probe. Keyed maps match only string test values
//! against their keys.

use std::fmt::Debug;

use verity_core::{CheckError, CheckResult, Message, SignalInfo};
use verity_value::Value;

use crate::context::RunContext;
use crate::failure;

/// Where a matching element was found during a scan.
enum Located {
    Absent,
    /// Present; sequences carry the index of the first match.
    Present(Option<usize>),
}

/// Resolves membership for the two container shapes; any other shape is
/// API misuse, not a failed expectation.
fn locate(test: &Value, container: &Value) -> Result<Located, CheckError> {
    match container {
        Value::Map(map) => {
            let present = match test {
                Value::Str(key) => map.contains_key(key),
                _ => false,
            };
            Ok(if present {
                Located::Present(None)
            } else {
                Located::Absent
            })
        }
        Value::Seq(items) => Ok(match items.iter().position(|item| item == test) {
            Some(index) => Located::Present(Some(index)),
            None => Located::Absent,
        }),
        other => Err(CheckError::InvalidArgument(
            SignalInfo::new(format!(
                "container must be a map or a sequence, was {}",
                other.kind().name()
            ))
            .with_actual(other.to_string()),
        )),
    }
}

fn null_container_failure(message: Option<&Message>) -> CheckError {
    failure(
        message,
        "container was null".to_string(),
        None,
        Some("null".to_string()),
    )
}

/// Checks that `container` holds `test`: key presence for maps, membership
/// for sequences. A null container fails regardless of the test value.
pub fn check_contains(
    ctx: &RunContext,
    test: &Value,
    container: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if container.is_null() {
        return Err(null_container_failure(message));
    }
    match locate(test, container)? {
        Located::Present(_) => Ok(()),
        Located::Absent => Err(failure(
            message,
            format!("expected {container} to contain {test}"),
            Some(format!("contains {test}")),
            Some(container.to_string()),
        )),
    }
}

/// Checks that `container` does not hold `test`.
///
/// The scan fails eagerly on the first match and reports its position;
/// later elements are never examined. The container must still be non-null.
pub fn check_not_contains(
    ctx: &RunContext,
    test: &Value,
    container: &Value,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if container.is_null() {
        return Err(null_container_failure(message));
    }
    match locate(test, container)? {
        Located::Absent => Ok(()),
        Located::Present(position) => {
            let default = match position {
                Some(index) => {
                    format!("expected {container} to not contain {test}, found at index {index}")
                }
                None => format!("expected map to not contain key {test}"),
            };
            Err(failure(
                message,
                default,
                Some(format!("does not contain {test}")),
                Some(container.to_string()),
            ))
        }
    }
}

/// Checks that the iterable `container` yields an element equal to `test`,
/// by linear scan with the element type's own equality.
pub fn check_contains_in<'a, T, I>(
    ctx: &RunContext,
    test: &T,
    container: I,
    message: Option<&Message>,
) -> CheckResult
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ctx.increment_count();
    if container.into_iter().any(|item| item == test) {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected the sequence to contain {test:?}"),
        Some(format!("contains {test:?}")),
        None,
    ))
}

/// Checks that the iterable `container` yields no element equal to `test`;
/// fails eagerly at the first match, reporting its position.
pub fn check_not_contains_in<'a, T, I>(
    ctx: &RunContext,
    test: &T,
    container: I,
    message: Option<&Message>,
) -> CheckResult
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ctx.increment_count();
    for (index, item) in container.into_iter().enumerate() {
        if item == test {
            return Err(failure(
                message,
                format!("expected the sequence to not contain {test:?}, found at index {index}"),
                Some(format!("does not contain {test:?}")),
                None,
            ));
        }
    }
    Ok(())
}

fn countable(value: &Value) -> Result<usize, CheckError> {
    value.count().ok_or_else(|| {
        CheckError::InvalidArgument(
            SignalInfo::new(format!(
                "emptiness is defined for strings, sequences, and maps, not {}",
                value.kind().name()
            ))
            .with_actual(value.to_string()),
        )
    })
}

/// Checks that a string, sequence, or map is empty.
pub fn check_empty(ctx: &RunContext, value: &Value, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    let len = countable(value)?;
    if len == 0 {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected an empty {}, had {len} elements", value.kind().name()),
        Some("empty".to_string()),
        Some(value.to_string()),
    ))
}

/// Checks that a string, sequence, or map has at least one element.
pub fn check_not_empty(ctx: &RunContext, value: &Value, message: Option<&Message>) -> CheckResult {
    ctx.increment_count();
    let len = countable(value)?;
    if len > 0 {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected a non-empty {}", value.kind().name()),
        Some("non-empty".to_string()),
        Some(value.to_string()),
    ))
}

/// Checks that `haystack` contains the substring `needle`.
pub fn check_str_contains(
    ctx: &RunContext,
    haystack: &str,
    needle: &str,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if haystack.contains(needle) {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected \"{haystack}\" to contain \"{needle}\""),
        Some(format!("contains \"{needle}\"")),
        Some(format!("\"{haystack}\"")),
    ))
}

/// Checks that `haystack` does not contain the substring `needle`.
pub fn check_str_not_contains(
    ctx: &RunContext,
    haystack: &str,
    needle: &str,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    if !haystack.contains(needle) {
        return Ok(());
    }
    Err(failure(
        message,
        format!("expected \"{haystack}\" to not contain \"{needle}\""),
        Some(format!("does not contain \"{needle}\"")),
        Some(format!("\"{haystack}\"")),
    ))
}
