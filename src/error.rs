//! Error types and result type for the newtsort crate.
//!
//! This module defines the two error kinds the sorting operations can produce.
//! It uses the `snafu` library for ergonomic error handling with automatic
//! backtrace capture.
//!
//! # Examples
//!
//! ```
//! use newtsort::{Result, SortError};
//!
//! fn validate_key(key: &serde_json::Value) -> Result<&str> {
//!     key.as_str()
//!         .ok_or_else(|| SortError::type_mismatch("Keys must be strings"))
//! }
//!
//! fn handle_error() {
//!     match validate_key(&serde_json::json!(123)) {
//!         Ok(key) => println!("Key: {}", key),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`SortError::TypeMismatch`]: an input value or structural shape does not
//!   conform to the operation's contract (wrong scalar type, non-record
//!   element, non-text key name)
//! - [`SortError::InternalFailure`]: a fault during the comparison/sorting
//!   step itself that is not attributable to input shape (e.g. values under
//!   one sort key that have no defined ordering)

use snafu::{Backtrace, Snafu};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the newtsort crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `SortError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SortError {
    /// An input value or structural shape violated the operation's contract.
    ///
    /// Validation runs before any transformation begins, so this error never
    /// comes with a partially sorted result.
    #[snafu(display("Type mismatch: {message}"))]
    TypeMismatch {
        message: String,
        backtrace: Backtrace,
    },

    /// An unexpected fault during the sort/comparison step itself.
    #[snafu(display("Internal sort failure: {message}"))]
    InternalFailure {
        message: String,
        backtrace: Backtrace,
    },
}

/// Helper methods for creating errors without context providers.
impl SortError {
    /// Creates a `TypeMismatch` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use newtsort::SortError;
    ///
    /// let error = SortError::type_mismatch("Expected a list of records");
    /// assert!(error.is_type_mismatch());
    /// ```
    pub fn type_mismatch<S: Into<String>>(message: S) -> Self {
        Self::TypeMismatch {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `TypeMismatch` error describing an unexpected value kind.
    pub fn unexpected_kind(expected: &str, got: &serde_json::Value) -> Self {
        Self::TypeMismatch {
            message: format!("Expected {}, got {}", expected, value_kind(got)),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InternalFailure` error with the given message.
    pub fn internal_failure<S: Into<String>>(message: S) -> Self {
        Self::InternalFailure {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `TypeMismatch` variant.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SortError::TypeMismatch { .. })
    }

    /// Checks if this error is an `InternalFailure` variant.
    pub fn is_internal_failure(&self) -> bool {
        matches!(self, SortError::InternalFailure { .. })
    }
}

/// Returns a short human-readable name for a JSON value's kind, used in
/// error messages.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A specialized `Result` type for newtsort operations.
///
/// This is a convenience type alias that uses [`SortError`] as the error type.
pub type Result<T> = std::result::Result<T, SortError>;
