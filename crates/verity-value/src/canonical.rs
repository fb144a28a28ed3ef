//! Canonical decimal text used for cross-kind numeric equality.
//!
//! Comparing text forms sidesteps precision artifacts when the two sides
//! carry different numeric kinds: the integral `1`, the float `1.0`, and the
//! decimal `1.00` all render `"1"`, while a `u64` beyond `f64` precision
//! keeps its exact digits and never spuriously equals the rounded float.

use crate::value::Value;

/// Renders the canonical decimal text of a numeric value; `None` for
/// non-numeric shapes.
pub fn canonical_text(value: &Value) -> Option<String> {
    match value {
        Value::Int(n) => Some(n.to_string()),
        Value::UInt(n) => Some(n.to_string()),
        Value::Float32(x) => Some(float32_text(*x)),
        Value::Float(x) => Some(float64_text(*x)),
        Value::Decimal(d) => Some(d.normalized().to_string()),
        _ => None,
    }
}

fn float64_text(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // Normalizes negative zero.
        return "0".to_string();
    }
    // Shortest round-trip decimal rendering at f64 width; never scientific.
    format!("{x}")
}

fn float32_text(x: f32) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    // Shortest round-trip decimal rendering at f32 width.
    format!("{x}")
}
