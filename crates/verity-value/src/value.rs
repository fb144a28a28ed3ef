//! The dynamic value model checks operate on.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU64, Ordering};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::kind::ValueKind;

/// Identity token source for [`OpaqueValue`]; process-wide and monotonic.
static NEXT_OPAQUE_TOKEN: AtomicU64 = AtomicU64::new(1);

/// A host value whose type defines no equality of its own.
///
/// Carries the host type name, a rendered debug form for messages, and an
/// identity token minted at construction. Clones share the token, standing
/// in for reference identity of the original host object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpaqueValue {
    /// Host type name, used in diagnostics.
    pub type_name: String,
    /// Rendered debug form of the host value.
    pub rendered: String,
    token: u64,
}

impl OpaqueValue {
    /// Returns the identity token shared by clones of this value.
    pub fn token(&self) -> u64 {
        self.token
    }
}

// Raw equality is identity: two opaque values are the same only when they
// were minted by the same `Value::opaque` call.
impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

/// A value submitted to a check: the closed set of shapes the engine
/// understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A single-precision float.
    Float32(f32),
    /// A double-precision float.
    Float(f64),
    /// An arbitrary-precision decimal.
    Decimal(BigDecimal),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A keyed mapping with string keys.
    Map(BTreeMap<String, Value>),
    /// A host value with no equality definition of its own.
    Opaque(OpaqueValue),
}

impl Value {
    /// Wraps a host value that defines no equality.
    ///
    /// Two opaque values are never considered equal by the equality
    /// resolver, even when structurally identical and even when one is a
    /// clone of the other. This mirrors the source policy: a type without a
    /// defined equality has no instances that compare equal. Raw scans
    /// (containment) still match clones through the shared identity token.
    pub fn opaque(type_name: impl Into<String>, rendered: impl Into<String>) -> Self {
        Value::Opaque(OpaqueValue {
            type_name: type_name.into(),
            rendered: rendered.into(),
            token: NEXT_OPAQUE_TOKEN.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// True when the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the closed classification of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Signed,
            Value::UInt(_) => ValueKind::Unsigned,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float(_) => ValueKind::Float64,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Str(_) => ValueKind::Str,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Number of elements for countable shapes (strings, sequences, maps);
    /// `None` for everything else.
    pub fn count(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.len()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float32(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                write!(f, "}}")
            }
            Value::Opaque(opaque) => write!(f, "{}", opaque.rendered),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::UInt(u64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
