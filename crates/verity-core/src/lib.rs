#![deny(missing_docs)]
#![doc = "Signal types and message templates shared across verity crates."]

pub mod errors;
pub mod message;

pub use errors::{CheckError, CheckResult, SignalInfo};
pub use message::Message;
