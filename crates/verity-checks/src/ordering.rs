//! Ordering checks over any type exposing a three-way comparison.

use std::cmp::Ordering;
use std::fmt::Debug;

use verity_core::{CheckResult, Message};

use crate::context::RunContext;
use crate::failure;

/// The four directed relations a check can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Relation {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Less => ordering == Ordering::Less,
            Relation::LessOrEqual => ordering != Ordering::Greater,
            Relation::Greater => ordering == Ordering::Greater,
            Relation::GreaterOrEqual => ordering != Ordering::Less,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Relation::Less => "less than",
            Relation::LessOrEqual => "less than or equal to",
            Relation::Greater => "greater than",
            Relation::GreaterOrEqual => "greater than or equal to",
        }
    }
}

/// Decided by the operands' own comparison; ties fail the strict relations
/// and pass the inclusive ones. Incomparable operands (`partial_cmp` is
/// `None`, e.g. NaN) fail regardless of the relation demanded.
fn evaluate<T: PartialOrd + Debug>(
    lhs: &T,
    rhs: &T,
    relation: Relation,
    message: Option<&Message>,
) -> CheckResult {
    match lhs.partial_cmp(rhs) {
        Some(ordering) if relation.holds(ordering) => Ok(()),
        Some(_) => Err(failure(
            message,
            format!("expected {lhs:?} to be {} {rhs:?}", relation.describe()),
            Some(format!("{} {rhs:?}", relation.describe())),
            Some(format!("{lhs:?}")),
        )),
        None => Err(failure(
            message,
            format!("{lhs:?} and {rhs:?} cannot be compared"),
            Some(format!("{} {rhs:?}", relation.describe())),
            Some(format!("{lhs:?}")),
        )),
    }
}

/// Checks that `lhs` is strictly less than `rhs`.
pub fn check_less<T: PartialOrd + Debug>(
    ctx: &RunContext,
    lhs: &T,
    rhs: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    evaluate(lhs, rhs, Relation::Less, message)
}

/// Checks that `lhs` is less than or equal to `rhs`.
pub fn check_less_or_equal<T: PartialOrd + Debug>(
    ctx: &RunContext,
    lhs: &T,
    rhs: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    evaluate(lhs, rhs, Relation::LessOrEqual, message)
}

/// Checks that `lhs` is strictly greater than `rhs`.
pub fn check_greater<T: PartialOrd + Debug>(
    ctx: &RunContext,
    lhs: &T,
    rhs: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    evaluate(lhs, rhs, Relation::Greater, message)
}

/// Checks that `lhs` is greater than or equal to `rhs`.
pub fn check_greater_or_equal<T: PartialOrd + Debug>(
    ctx: &RunContext,
    lhs: &T,
    rhs: &T,
    message: Option<&Message>,
) -> CheckResult {
    ctx.increment_count();
    evaluate(lhs, rhs, Relation::GreaterOrEqual, message)
}
