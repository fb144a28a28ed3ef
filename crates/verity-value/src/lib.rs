#![deny(missing_docs)]
#![doc = "Dynamic value model and comparison primitives for the verity engine."]

pub mod canonical;
pub mod compare;
pub mod kind;
pub mod tolerance;
mod value;

pub use canonical::canonical_text;
pub use compare::{values_equal, ElementwiseComparer, EqualityDecision, SequenceComparer};
pub use kind::{NumericKind, ValueKind};
pub use tolerance::{within_delta, Floating};
pub use value::{OpaqueValue, Value};
