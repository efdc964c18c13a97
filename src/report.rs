//! Diagnostic reporting for lenient sort operations.
//!
//! The lenient entry points ([`crate::sort_records_lenient`],
//! [`crate::sort_unique_scalars_lenient`]) swallow errors and return a
//! documented fallback value instead of propagating. Whenever that happens
//! they hand a [`Diagnostic`] to a caller-supplied [`DiagnosticSink`], so the
//! condition is visible even though execution continues.
//!
//! The sink is injected per call. The library holds no global reporter state.
//!
//! # Examples
//!
//! ```
//! use newtsort::report::{CollectSink, DiagnosticSink, LogSink};
//! use newtsort::sort_unique_scalars_lenient;
//! use serde_json::json;
//!
//! // Route diagnostics through the `log` facade:
//! let values = vec![json!("a"), json!(2.5)];
//! let result = sort_unique_scalars_lenient(&values, &LogSink);
//! assert!(result.is_empty());
//!
//! // Or collect them for inspection:
//! let sink = CollectSink::new();
//! let result = sort_unique_scalars_lenient(&values, &sink);
//! assert!(result.is_empty());
//! assert_eq!(sink.taken().len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::error::SortError;

/// A single reported condition: what went wrong, where, and whether the
/// operation gave up on producing a sorted result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Name of the operation that reported the condition,
    /// e.g. `"newtsort::sort_records"`.
    pub location: &'static str,
    /// Human-readable description of the condition.
    pub message: String,
    /// True when the operation returned a fallback instead of a sorted
    /// result (validation failures); false when it degraded but still
    /// returned usable data (internal failures fall back to input order).
    pub fatal: bool,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.location, self.message)
    }
}

impl Diagnostic {
    pub(crate) fn from_error(location: &'static str, error: &SortError) -> Self {
        Self {
            location,
            message: error.to_string(),
            fatal: error.is_type_mismatch(),
        }
    }
}

/// Receiver for diagnostics emitted by lenient operations.
///
/// Implementations must not panic; the sort core calls `report` exactly once
/// per swallowed error and then continues with the documented fallback.
pub trait DiagnosticSink {
    /// Called once for each condition a lenient operation swallows.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics through the `log` facade.
///
/// Fatal diagnostics (empty-result fallbacks) are logged at `error` level,
/// degraded-but-usable ones at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        if diagnostic.fatal {
            log::error!("{}", diagnostic);
        } else {
            log::warn!("{}", diagnostic);
        }
    }
}

/// Sink that retains every diagnostic for later inspection.
///
/// Useful in tests and in callers that surface conditions through their own
/// channels. Not `Sync`; share one per thread.
#[derive(Debug, Default)]
pub struct CollectSink {
    collected: RefCell<Vec<Diagnostic>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all diagnostics collected so far.
    pub fn taken(&self) -> Vec<Diagnostic> {
        self.collected.take()
    }

    /// Number of diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.collected.borrow_mut().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_from_error() {
        let mismatch = SortError::type_mismatch("Expected a list of records");
        let diagnostic = Diagnostic::from_error("newtsort::sort_records", &mismatch);
        assert!(diagnostic.fatal);
        assert_eq!(diagnostic.location, "newtsort::sort_records");
        assert!(diagnostic.message.contains("Expected a list of records"));

        let internal = SortError::internal_failure("values are not comparable");
        let diagnostic = Diagnostic::from_error("newtsort::sort_records", &internal);
        assert!(!diagnostic.fatal);
    }

    #[test]
    fn test_collect_sink_retains_reports() {
        let sink = CollectSink::new();
        assert!(sink.is_empty());

        let error = SortError::type_mismatch("bad input");
        sink.report(&Diagnostic::from_error("newtsort::sort_unique_scalars", &error));
        sink.report(&Diagnostic::from_error("newtsort::sort_unique_scalars", &error));
        assert_eq!(sink.len(), 2);

        let taken = sink.taken();
        assert_eq!(taken.len(), 2);
        assert!(sink.is_empty());
        assert_eq!(
            taken[0].to_string(),
            "[newtsort::sort_unique_scalars] Type mismatch: bad input"
        );
    }
}
