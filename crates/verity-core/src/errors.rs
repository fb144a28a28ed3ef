//! Structured signal types raised by verity checks.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CheckError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Human readable diagnostic message.
    pub message: String,
    /// Rendered form of the expected value, when the check has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Rendered form of the observed value, when the check has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl SignalInfo {
    /// Creates a new signal payload with the provided message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attaches the rendered expected value.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Attaches the rendered observed value.
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

impl Display for SignalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(expected) = &self.expected {
            write!(f, " | expected: {expected}")?;
        }
        if let Some(actual) = &self.actual {
            write!(f, " | actual: {actual}")?;
        }
        Ok(())
    }
}

/// Canonical signal type for the verity engine.
///
/// Every check returns `Result<(), CheckError>`; the harness maps `Failure`
/// to a failed test, `Skip` to a skipped test, and treats an uncaught
/// `InvalidArgument` as a defect in the test code itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "signal", content = "detail")]
pub enum CheckError {
    /// An expectation was violated.
    #[error("assertion failure: {0}")]
    Failure(SignalInfo),
    /// The test asked to be skipped; never reported as a failure.
    #[error("skipped: {0}")]
    Skip(SignalInfo),
    /// A precondition of the check itself was violated before any
    /// comparison ran (negative tolerance, empty skip reason, malformed
    /// template, wrong container shape).
    #[error("invalid argument: {0}")]
    InvalidArgument(SignalInfo),
}

impl CheckError {
    /// Creates a failure signal from a bare message.
    pub fn failure(message: impl Into<String>) -> Self {
        CheckError::Failure(SignalInfo::new(message))
    }

    /// Creates a skip signal from a bare message.
    pub fn skip(message: impl Into<String>) -> Self {
        CheckError::Skip(SignalInfo::new(message))
    }

    /// Creates an invalid-argument signal from a bare message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CheckError::InvalidArgument(SignalInfo::new(message))
    }

    /// Returns a reference to the payload describing the signal.
    pub fn info(&self) -> &SignalInfo {
        match self {
            CheckError::Failure(info)
            | CheckError::Skip(info)
            | CheckError::InvalidArgument(info) => info,
        }
    }

    /// True when the signal reports a violated expectation.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failure(_))
    }

    /// True when the signal requests a skip.
    pub fn is_skip(&self) -> bool {
        matches!(self, CheckError::Skip(_))
    }
}

/// Outcome type surfaced by every check to the harness boundary.
pub type CheckResult = Result<(), CheckError>;
