//! The equality resolver and the sequence-equality collaborator seam.

use crate::canonical::canonical_text;
use crate::kind::NumericKind;
use crate::value::Value;

/// Outcome of an equality evaluation: the verdict plus an optional
/// human readable mismatch description for failure messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityDecision {
    /// Whether the two values are considered equal.
    pub equal: bool,
    /// Mismatch description, present only on some unequal outcomes.
    pub detail: Option<String>,
}

impl EqualityDecision {
    /// An equal verdict.
    pub fn equal() -> Self {
        Self {
            equal: true,
            detail: None,
        }
    }

    /// An unequal verdict without further description.
    pub fn unequal() -> Self {
        Self {
            equal: false,
            detail: None,
        }
    }

    /// An unequal verdict carrying a mismatch description.
    pub fn unequal_because(detail: impl Into<String>) -> Self {
        Self {
            equal: false,
            detail: Some(detail.into()),
        }
    }
}

/// Collaborator performing deep sequence equality.
///
/// The engine ships [`ElementwiseComparer`] as a modest default; the hosting
/// library injects its real deep-comparison algorithm through this seam.
pub trait SequenceComparer {
    /// Recognition predicate: whether this comparer treats `value` as a
    /// sequence it can compare.
    fn is_sequence(&self, value: &Value) -> bool;

    /// Deep comparison of two recognized sequences.
    fn compare(&self, expected: &Value, actual: &Value) -> EqualityDecision;
}

/// Default sequence comparer: length check plus element-wise raw equality,
/// recursing into nested sequences, reporting the first mismatch path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementwiseComparer;

impl ElementwiseComparer {
    fn compare_at(&self, expected: &Value, actual: &Value, path: &str) -> EqualityDecision {
        let (lhs, rhs) = match (expected, actual) {
            (Value::Seq(lhs), Value::Seq(rhs)) => (lhs, rhs),
            _ => {
                return if expected == actual {
                    EqualityDecision::equal()
                } else {
                    EqualityDecision::unequal_because(format!(
                        "mismatch at {path}: expected {expected}, actual {actual}"
                    ))
                }
            }
        };
        if lhs.len() != rhs.len() {
            return EqualityDecision::unequal_because(format!(
                "length mismatch at {path}: expected {}, actual {}",
                lhs.len(),
                rhs.len()
            ));
        }
        for (idx, (e, a)) in lhs.iter().zip(rhs.iter()).enumerate() {
            let element_path = format!("{path}[{idx}]");
            let decision = self.compare_at(e, a, &element_path);
            if !decision.equal {
                return decision;
            }
        }
        EqualityDecision::equal()
    }
}

impl SequenceComparer for ElementwiseComparer {
    fn is_sequence(&self, value: &Value) -> bool {
        matches!(value, Value::Seq(_))
    }

    fn compare(&self, expected: &Value, actual: &Value) -> EqualityDecision {
        self.compare_at(expected, actual, "root")
    }
}

/// Decides equality of two values.
///
/// Resolution order: both null are equal and exactly one null is not; two
/// numeric values of any kinds compare by canonical decimal text; two
/// sequences recognized by `comparer` delegate to its deep comparison; an
/// opaque value on either side is never equal (see [`Value::opaque`]);
/// everything else falls back to raw structural equality, which leaves
/// cross-shape pairs unequal.
pub fn values_equal(
    expected: &Value,
    actual: &Value,
    comparer: &dyn SequenceComparer,
) -> EqualityDecision {
    match (expected.is_null(), actual.is_null()) {
        (true, true) => return EqualityDecision::equal(),
        (true, false) | (false, true) => return EqualityDecision::unequal(),
        (false, false) => {}
    }
    if NumericKind::of(expected).is_some() && NumericKind::of(actual).is_some() {
        let lhs = canonical_text(expected);
        let rhs = canonical_text(actual);
        return if lhs == rhs {
            EqualityDecision::equal()
        } else {
            EqualityDecision::unequal()
        };
    }
    if comparer.is_sequence(expected) && comparer.is_sequence(actual) {
        return comparer.compare(expected, actual);
    }
    if let Value::Opaque(opaque) = expected {
        return EqualityDecision::unequal_because(format!(
            "type {} defines no equality; its values never compare equal",
            opaque.type_name
        ));
    }
    if let Value::Opaque(opaque) = actual {
        return EqualityDecision::unequal_because(format!(
            "type {} defines no equality; its values never compare equal",
            opaque.type_name
        ));
    }
    if expected == actual {
        EqualityDecision::equal()
    } else {
        EqualityDecision::unequal()
    }
}
