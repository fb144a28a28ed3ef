//! Run-scoped counters, warning accumulation, and collaborator seams.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use verity_value::{ElementwiseComparer, SequenceComparer};

/// Report-run collaborator accepting flushed warning records.
pub trait ReportRun {
    /// Records one warning emitted during the run.
    fn record_warning(&mut self, message: &str);
}

/// Plain in-memory [`ReportRun`] for hosts and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRun {
    /// Warnings received from the store, in emission order.
    pub warnings: Vec<String>,
}

impl ReportRun for RecordedRun {
    fn record_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

/// Serializable snapshot of the run-scoped state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of top-level checks executed so far.
    pub assertions: u64,
    /// Warnings accumulated and not yet flushed.
    pub warnings: Vec<String>,
}

/// Run-scoped state passed explicitly to every check.
///
/// The count and the warning store are the engine's only shared mutable
/// state; both are safe under parallel test threads. Increments are never
/// lost and warning appends never race.
pub struct RunContext {
    count: AtomicU64,
    warnings: Mutex<Vec<String>>,
    comparer: Box<dyn SequenceComparer + Send + Sync>,
}

impl RunContext {
    /// Creates a context with the default element-wise sequence comparer.
    pub fn new() -> Self {
        Self::with_comparer(Box::new(ElementwiseComparer))
    }

    /// Creates a context with an injected deep sequence-equality
    /// collaborator.
    pub fn with_comparer(comparer: Box<dyn SequenceComparer + Send + Sync>) -> Self {
        Self {
            count: AtomicU64::new(0),
            warnings: Mutex::new(Vec::new()),
            comparer,
        }
    }

    /// Returns the injected sequence comparer.
    pub fn comparer(&self) -> &dyn SequenceComparer {
        self.comparer.as_ref()
    }

    /// Adds one to the assertion count. Called exactly once per top-level
    /// check, including composite checks built on other checks.
    pub fn increment_count(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets the assertion count to zero.
    pub fn reset_count(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Returns the current assertion count.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Appends a rendered warning record.
    pub fn push_warning(&self, message: String) {
        self.lock_warnings().push(message);
    }

    /// Returns a snapshot of the accumulated warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.lock_warnings().clone()
    }

    /// Copies the accumulated warnings into the report run and clears the
    /// store. A second flush without intervening warnings is a no-op.
    pub fn flush_warnings(&self, run: &mut dyn ReportRun) {
        let drained: Vec<String> = std::mem::take(&mut *self.lock_warnings());
        for warning in &drained {
            run.record_warning(warning);
        }
    }

    /// Returns a snapshot of the run-scoped state.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            assertions: self.count(),
            warnings: self.warnings(),
        }
    }

    fn lock_warnings(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock only means a panicking thread held it; the data
        // is still a well-formed Vec.
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("count", &self.count())
            .field("warnings", &self.warnings())
            .finish_non_exhaustive()
    }
}
