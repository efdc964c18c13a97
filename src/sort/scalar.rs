//! Deduplicating typed sort over text/integer scalars.
//!
//! [`sort_unique_scalars`] takes a sequence of JSON values restricted to
//! strings and integers, removes duplicates, and returns all strings
//! (code-point order, ascending) followed by all integers (numeric,
//! ascending). Any other value kind is a validation failure for the whole
//! input.
//!
//! The result is a fixed point: feeding it back in returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use newtsort::sort_unique_scalars;
//! use serde_json::json;
//!
//! let values = vec![json!("c"), json!(3), json!("a"), json!(1), json!("a"), json!(3)];
//! let sorted = sort_unique_scalars(&values).unwrap();
//! assert_eq!(sorted, vec![json!("a"), json!("c"), json!(1), json!(3)]);
//! ```

use serde_json::Value;

use crate::error::{value_kind, SortError};
use crate::report::{Diagnostic, DiagnosticSink};
use crate::Result;

const LOCATION: &str = "newtsort::sort_unique_scalars";

/// A validated sortable scalar: text or integer, nothing else.
///
/// The derived ordering puts every `Text` before every `Int` (variant order),
/// then sorts text by code points and integers numerically. That is exactly
/// the output order of [`sort_unique_scalars`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Value {
        match scalar {
            Scalar::Text(s) => Value::String(s),
            Scalar::Int(i) => Value::Number(i.into()),
        }
    }
}

impl TryFrom<&Value> for Scalar {
    type Error = SortError;

    /// Validates one input element.
    ///
    /// Booleans are rejected explicitly: they are a distinct logical type
    /// even in representations that encode them as integers. Floats are
    /// rejected even when numerically whole (`2.0` is not an integer value).
    fn try_from(value: &Value) -> Result<Scalar> {
        match value {
            Value::String(s) => Ok(Scalar::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Scalar::Int(i)),
                None => Err(SortError::type_mismatch(format!(
                    "Expected string or integer, got unsupported number {}",
                    n
                ))),
            },
            other => Err(SortError::type_mismatch(format!(
                "Expected string or integer, got {}",
                value_kind(other)
            ))),
        }
    }
}

/// Removes duplicates from a scalar sequence and returns a sorted result.
///
/// Strings are listed first in code-point order, followed by integers in
/// numeric order. Duplicates (by equality) collapse to one occurrence. The
/// input is not mutated.
///
/// # Errors
///
/// Returns [`SortError::TypeMismatch`] if any element is not a string or an
/// `i64`-ranged integer. Validation covers the whole input before any
/// transformation, so a failure never yields a partial result.
///
/// # Examples
///
/// ```
/// use newtsort::sort_unique_scalars;
/// use serde_json::json;
///
/// let cases = [
///     (vec![json!(3), json!(1), json!(2), json!(3), json!(5), json!(1)],
///      vec![json!(1), json!(2), json!(3), json!(5)]),
///     (vec![json!("b"), json!("a"), json!("b")],
///      vec![json!("a"), json!("b")]),
///     (vec![json!("c"), json!(3), json!("a"), json!(1), json!("a"), json!(3)],
///      vec![json!("a"), json!("c"), json!(1), json!(3)]),
///     (vec![], vec![]),
/// ];
/// for (input, expected) in cases {
///     assert_eq!(sort_unique_scalars(&input).unwrap(), expected);
/// }
///
/// assert!(sort_unique_scalars(&[json!(1), json!(2.5)]).is_err());
/// ```
pub fn sort_unique_scalars(values: &[Value]) -> Result<Vec<Value>> {
    let mut scalars = values
        .iter()
        .map(Scalar::try_from)
        .collect::<Result<Vec<_>>>()?;

    // Text sorts before Int by variant order, so one pass covers the
    // partition and both group orderings.
    scalars.sort();
    scalars.dedup();

    Ok(scalars.into_iter().map(Value::from).collect())
}

/// Continue-mode variant of [`sort_unique_scalars`].
///
/// On any error the condition is handed to `sink` and an empty sequence is
/// returned, so the caller's flow can proceed with a well-defined value.
///
/// # Examples
///
/// ```
/// use newtsort::report::CollectSink;
/// use newtsort::sort_unique_scalars_lenient;
/// use serde_json::json;
///
/// let sink = CollectSink::new();
/// let result = sort_unique_scalars_lenient(&[json!(true)], &sink);
/// assert!(result.is_empty());
/// assert_eq!(sink.len(), 1);
/// ```
pub fn sort_unique_scalars_lenient(values: &[Value], sink: &dyn DiagnosticSink) -> Vec<Value> {
    match sort_unique_scalars(values) {
        Ok(sorted) => sorted,
        Err(error) => {
            sink.report(&Diagnostic::from_error(LOCATION, &error));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CollectSink;
    use serde_json::json;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_sort_unique_scalars_mixed() {
        init_logger();

        // (input, expected)
        let cases = [
            (
                vec![json!("c"), json!(3), json!("a"), json!(1), json!("a"), json!(3)],
                vec![json!("a"), json!("c"), json!(1), json!(3)],
            ),
            (
                vec![json!(3), json!(1), json!(2), json!(3), json!(5), json!(1)],
                vec![json!(1), json!(2), json!(3), json!(5)],
            ),
            (
                vec![json!("banana"), json!("apple"), json!("banana")],
                vec![json!("apple"), json!("banana")],
            ),
            (
                vec![json!(-5), json!("z"), json!(0), json!("A")],
                vec![json!("A"), json!("z"), json!(-5), json!(0)],
            ),
            (vec![], vec![]),
        ];

        for (input, expected) in cases {
            let result = sort_unique_scalars(&input).unwrap();
            assert_eq!(result, expected, "sort_unique_scalars({:?})", input);
        }
    }

    #[test]
    fn test_sort_unique_scalars_partition_invariant() {
        let input = vec![json!(9), json!("m"), json!(-1), json!("a"), json!(4), json!("z")];
        let result = sort_unique_scalars(&input).unwrap();

        let first_int = result.iter().position(|v| v.is_number()).unwrap();
        assert!(
            result[..first_int].iter().all(|v| v.is_string()),
            "every string must precede every integer: {:?}",
            result
        );
        assert!(result[first_int..].iter().all(|v| v.is_number()));
    }

    #[test]
    fn test_sort_unique_scalars_idempotent() {
        let input = vec![json!("c"), json!(3), json!("a"), json!(1), json!("a"), json!(3)];
        let once = sort_unique_scalars(&input).unwrap();
        let twice = sort_unique_scalars(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_unique_scalars_rejects_other_kinds() {
        let bad_inputs = [
            vec![json!(1), json!(2.5)],
            vec![json!(true)],
            vec![json!("a"), json!(null)],
            vec![json!([1, 2])],
            vec![json!({"k": 1})],
        ];

        for input in bad_inputs {
            let error = sort_unique_scalars(&input).unwrap_err();
            assert!(error.is_type_mismatch(), "input {:?} must fail validation", input);
        }
    }

    #[test]
    fn test_boolean_is_not_an_integer() {
        // A bare true must not sneak through as 1
        let error = sort_unique_scalars(&[json!(true), json!(1)]).unwrap_err();
        assert!(error.to_string().contains("boolean"), "got: {}", error);
    }

    #[test]
    fn test_lenient_returns_empty_and_reports() {
        init_logger();

        let sink = CollectSink::new();
        let result = sort_unique_scalars_lenient(&[json!(1), json!(2.5)], &sink);
        assert!(result.is_empty());

        let diagnostics = sink.taken();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location, LOCATION);
        assert!(diagnostics[0].fatal);
    }

    #[test]
    fn test_lenient_passes_through_valid_input() {
        let sink = CollectSink::new();
        let result = sort_unique_scalars_lenient(&[json!("b"), json!("a")], &sink);
        assert_eq!(result, vec![json!("a"), json!("b")]);
        assert!(sink.is_empty());
    }
}
