//! Closed classification of values and numeric kinds.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Closed classification of every [`Value`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    /// The absent value.
    Null,
    /// Booleans.
    Bool,
    /// Signed integers.
    Signed,
    /// Unsigned integers.
    Unsigned,
    /// Single-precision floats.
    Float32,
    /// Double-precision floats.
    Float64,
    /// Arbitrary-precision decimals.
    Decimal,
    /// Strings.
    Str,
    /// Sequences.
    Seq,
    /// Keyed mappings.
    Map,
    /// Host values with no equality definition.
    Opaque,
}

impl ValueKind {
    /// Stable lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Signed => "signed",
            ValueKind::Unsigned => "unsigned",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Decimal => "decimal",
            ValueKind::Str => "string",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "map",
            ValueKind::Opaque => "opaque",
        }
    }

    /// Kind-level assignability: whether a value of kind `source` can be
    /// held losslessly by this kind. Every kind accepts itself; `Decimal`
    /// accepts the integral kinds; `Float64` accepts `Float32`.
    pub fn assignable_from(self, source: ValueKind) -> bool {
        if self == source {
            return true;
        }
        matches!(
            (self, source),
            (ValueKind::Decimal, ValueKind::Signed)
                | (ValueKind::Decimal, ValueKind::Unsigned)
                | (ValueKind::Float64, ValueKind::Float32)
        )
    }
}

/// Closed numeric classification tag; a value maps to at most one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericKind {
    /// Signed integers.
    Signed,
    /// Unsigned integers.
    Unsigned,
    /// Single-precision floats.
    Float32,
    /// Double-precision floats.
    Float64,
    /// Arbitrary-precision decimals.
    Decimal,
}

impl NumericKind {
    /// Classifies a value, returning `None` for non-numeric shapes.
    pub fn of(value: &Value) -> Option<NumericKind> {
        match value {
            Value::Int(_) => Some(NumericKind::Signed),
            Value::UInt(_) => Some(NumericKind::Unsigned),
            Value::Float32(_) => Some(NumericKind::Float32),
            Value::Float(_) => Some(NumericKind::Float64),
            Value::Decimal(_) => Some(NumericKind::Decimal),
            _ => None,
        }
    }

    /// True for the integral family.
    pub fn is_integral(self) -> bool {
        matches!(self, NumericKind::Signed | NumericKind::Unsigned)
    }

    /// True for the floating family.
    pub fn is_floating(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }
}
