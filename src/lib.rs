//! # newtsort - Stable Multi-Key Record Sorting and Typed Deduplication
//!
//! This crate provides a small, pure sorting core for heterogeneous,
//! partially-missing keyed data: the kind of record lists that come out of
//! query results, parsed files, or configuration, on their way to a CSV/JSON
//! writer or a deterministic option list.
//!
//! ## Features
//!
//! - **Deduplicating typed sort**: dedupe a list of text/integer scalars and
//!   return strings (code-point order) followed by integers (numeric order)
//! - **Stable multi-key record sort**: order records by a prioritized key
//!   list, with absent/null values placed after present ones and input order
//!   preserved for ties
//! - **Strict validation**: both operations validate input shape before
//!   touching it and fail atomically, never with a partially sorted result
//! - **Halt or continue**: every operation exists as a `Result`-returning
//!   form and as a `*_lenient` form that reports through a diagnostics sink
//!   and returns a documented fallback
//! - **Representation-agnostic records**: sort `serde_json` objects,
//!   `IndexMap`s, `BTreeMap`s or `HashMap`s through the [`RecordView`] trait
//!
//! ## Quick Start
//!
//! ### Sorting records by key
//!
//! ```
//! use newtsort::sort_records;
//! use serde_json::json;
//!
//! # fn main() -> newtsort::Result<()> {
//! let records = vec![
//!     json!({"name": "Bob"}),
//!     json!({"name": "Alice", "age": 30}),
//!     json!({"name": "Charlie", "age": 25}),
//! ];
//!
//! // Sort by age; Bob has none and goes last
//! let sorted = sort_records(&records, &[json!("age")], false)?;
//! assert_eq!(sorted[0]["name"], json!("Charlie"));
//! assert_eq!(sorted[2]["name"], json!("Bob"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Deduplicating a scalar list
//!
//! ```
//! use newtsort::sort_unique_scalars;
//! use serde_json::json;
//!
//! # fn main() -> newtsort::Result<()> {
//! let values = vec![json!("c"), json!(3), json!("a"), json!(1), json!("a"), json!(3)];
//! let sorted = sort_unique_scalars(&values)?;
//! assert_eq!(sorted, vec![json!("a"), json!("c"), json!(1), json!(3)]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Continuing after bad input
//!
//! ```
//! use newtsort::report::LogSink;
//! use newtsort::sort_records_lenient;
//! use serde_json::json;
//!
//! let records = vec![json!({"id": 1}), json!(42)];
//! // 42 is not a record; the condition is logged and the result is empty
//! let sorted = sort_records_lenient(&records, &[json!("id")], false, &LogSink);
//! assert!(sorted.is_empty());
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - **Sorting**: [`sort`] holds both operations and their lenient variants
//! - **Records**: [`record`] defines the [`RecordView`] capability trait
//! - **Diagnostics**: [`report`] defines the sink the lenient variants
//!   report through
//! - **Errors**: [`error`] defines [`SortError`] and the crate [`Result`]
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`SortError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. Validation failures
//! are [`SortError::TypeMismatch`]; faults during comparison itself are
//! [`SortError::InternalFailure`]. The lenient variants translate the former
//! into an empty result and the latter into the original input order, always
//! reporting through the caller's [`report::DiagnosticSink`] — library code
//! never terminates the process.

pub mod error;
pub mod record;
pub mod report;
pub mod sort;

// Re-export commonly used types for convenience
pub use record::RecordView;
pub use report::{Diagnostic, DiagnosticSink, LogSink};
pub use sort::{
    sort_by_keys, sort_records, sort_records_lenient, sort_unique_scalars,
    sort_unique_scalars_lenient, Scalar,
};

// Re-export error types for convenience
pub use error::{snafu, Result, SortError};
