//! Stable multi-key record sort with missing-last semantics.
//!
//! [`sort_records`] orders a sequence of records by a prioritized list of
//! field names. For every key the record either holds a comparable value or
//! it doesn't (absent field, or explicit null) — and records without a value
//! sort after records with one, per key, with later keys breaking ties. Ties
//! that survive the whole key list keep their input order.
//!
//! The `reverse` flag reverses the composite comparison globally. That
//! includes the missing/null flag: with `reverse=true`, records missing a key
//! move to the *front* of that key's group. See the module-level discussion
//! on [`sort_records`].
//!
//! # Examples
//!
//! ```
//! use newtsort::sort_records;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Bob"}),
//!     json!({"name": "Alice", "age": 30}),
//!     json!({"name": "Charlie", "age": 25}),
//! ];
//! let sorted = sort_records(&records, &[json!("age")], false).unwrap();
//! assert_eq!(sorted, vec![
//!     json!({"name": "Charlie", "age": 25}),
//!     json!({"name": "Alice", "age": 30}),
//!     json!({"name": "Bob"}),
//! ]);
//! ```

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::{value_kind, SortError};
use crate::record::RecordView;
use crate::report::{Diagnostic, DiagnosticSink};
use crate::Result;

const LOCATION: &str = "newtsort::sort_records";

/// Comparability class of a present sort value. Values under one key must all
/// belong to the same class or the sort fails with an internal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueClass {
    Bool,
    Number,
    Text,
}

impl ValueClass {
    fn name(self) -> &'static str {
        match self {
            ValueClass::Bool => "boolean",
            ValueClass::Number => "number",
            ValueClass::Text => "string",
        }
    }
}

/// A present field value in sortable form.
///
/// Integers and floats share the [`ValueClass::Number`] class and compare
/// numerically against each other; floats use `total_cmp`, so NaN is ordered
/// (after every finite value) instead of poisoning the sort.
#[derive(Debug, Clone)]
enum SortValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortValue {
    fn class(&self) -> ValueClass {
        match self {
            SortValue::Bool(_) => ValueClass::Bool,
            SortValue::Int(_) | SortValue::Float(_) => ValueClass::Number,
            SortValue::Text(_) => ValueClass::Text,
        }
    }

    /// Converts a present (non-null) field value. Arrays and objects have no
    /// defined ordering here and surface as internal failures, the analogue
    /// of a comparator fault rather than an input-shape error.
    fn try_from_field(key: &str, value: &Value) -> Result<SortValue> {
        match value {
            Value::Bool(b) => Ok(SortValue::Bool(*b)),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => SortValue::Int(i),
                None => SortValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => Ok(SortValue::Text(s.clone())),
            other => Err(SortError::internal_failure(format!(
                "Unsupported sort value under key '{}': {}",
                key,
                value_kind(other)
            ))),
        }
    }

    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Float(b)) => (*a as f64).total_cmp(b),
            (SortValue::Float(a), SortValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // Columns are class-checked before sorting; mixed classes cannot
            // reach this arm. The fallback keeps the comparator total.
            _ => (self.class() as u8).cmp(&(other.class() as u8)),
        }
    }
}

/// One `(is_missing_or_null, value)` pair per key name, in key-list order.
type CompositeKey = Vec<(bool, Option<SortValue>)>;

fn compare_composite(a: &CompositeKey, b: &CompositeKey) -> Ordering {
    for ((a_missing, a_value), (b_missing, b_value)) in a.iter().zip(b.iter()) {
        // false < true: present values sort before missing/null ones
        match a_missing.cmp(b_missing) {
            Ordering::Equal => {}
            decided => return decided,
        }
        if let (Some(a_value), Some(b_value)) = (a_value, b_value) {
            match a_value.compare(b_value) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
    }
    Ordering::Equal
}

/// Builds every record's composite key and verifies that present values in
/// each key column share one comparability class.
fn composite_keys<R: RecordView>(records: &[R], keys: &[&str]) -> Result<Vec<CompositeKey>> {
    let mut composites = Vec::with_capacity(records.len());
    for record in records {
        let mut parts: CompositeKey = Vec::with_capacity(keys.len());
        for key in keys {
            let part = match record.field(key) {
                None | Some(Value::Null) => (true, None),
                Some(value) => (false, Some(SortValue::try_from_field(key, value)?)),
            };
            parts.push(part);
        }
        composites.push(parts);
    }

    for (column, key) in keys.iter().enumerate() {
        let mut first_seen: Option<ValueClass> = None;
        for parts in &composites {
            let Some(value) = parts[column].1.as_ref() else {
                continue;
            };
            match first_seen {
                None => first_seen = Some(value.class()),
                Some(class) if class != value.class() => {
                    return Err(SortError::internal_failure(format!(
                        "Values under key '{}' are not comparable: {} vs {}",
                        key,
                        class.name(),
                        value.class().name()
                    )));
                }
                Some(_) => {}
            }
        }
    }

    Ok(composites)
}

/// Stable sorted index order for `records` under `keys`.
fn sorted_order<R: RecordView>(records: &[R], keys: &[&str], reverse: bool) -> Result<Vec<usize>> {
    let composites = composite_keys(records, keys)?;
    let mut order: Vec<usize> = (0..records.len()).collect();
    // Stable sort over indices: tied composite keys keep input order, with
    // or without reverse, since equal stays equal under reversal.
    order.sort_by(|&a, &b| {
        let ordering = compare_composite(&composites[a], &composites[b]);
        if reverse { ordering.reverse() } else { ordering }
    });
    Ok(order)
}

/// Sorts a sequence of JSON records by one or more keys.
///
/// Each element of `records` must be a JSON object; each element of `keys`
/// must be a JSON string naming a field. Records are cloned into a fresh
/// output sequence — the input is never mutated — and the output is a
/// permutation of the input even when `keys` is empty (no reordering, same
/// construction path).
///
/// Records missing a key, or holding null for it, are placed at the end of
/// that key's group when `reverse` is false. When `reverse` is true the
/// whole composite comparison is reversed, missing flag included, so those
/// records move to the front. That is the behavior this crate commits to;
/// callers needing missing-last in both directions should sort forward and
/// reverse the present-valued prefix themselves.
///
/// # Errors
///
/// - [`SortError::TypeMismatch`] if any record is not an object or any key is
///   not a string. Validation is atomic: no partial sorting happens.
/// - [`SortError::InternalFailure`] if values under one key cannot be ordered
///   (mixed classes such as string vs number, or array/object values).
///
/// # Examples
///
/// ```
/// use newtsort::sort_records;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"name": "Eve", "age": 25, "score": 10}),
///     json!({"name": "Dan", "age": 25}),
///     json!({"name": "Amy", "age": 30, "score": 7}),
/// ];
///
/// // Primary key "age", secondary "score"; Dan has no score and sorts
/// // after Eve inside the age-25 group.
/// let sorted = sort_records(&records, &[json!("age"), json!("score")], false).unwrap();
/// let names: Vec<_> = sorted.iter().map(|r| r["name"].as_str().unwrap().to_string()).collect();
/// assert_eq!(names, ["Eve", "Dan", "Amy"]);
/// ```
pub fn sort_records(records: &[Value], keys: &[Value], reverse: bool) -> Result<Vec<Value>> {
    let views = records
        .iter()
        .map(|record| {
            record
                .as_object()
                .ok_or_else(|| SortError::unexpected_kind("a record", record))
        })
        .collect::<Result<Vec<_>>>()?;

    let key_names = keys
        .iter()
        .map(|key| {
            key.as_str().ok_or_else(|| {
                SortError::type_mismatch(format!("Keys must be strings, got {}", value_kind(key)))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let order = sorted_order(&views, &key_names, reverse)?;
    Ok(order.into_iter().map(|i| records[i].clone()).collect())
}

/// Continue-mode variant of [`sort_records`].
///
/// On [`SortError::TypeMismatch`] the condition is reported to `sink` and an
/// empty sequence is returned — including when only some elements are
/// malformed; a partial result is never produced. On
/// [`SortError::InternalFailure`] the condition is reported and the ORIGINAL
/// sequence is returned in input order, so the caller still gets every record
/// back. The asymmetry is deliberate: shape violations are caller bugs, while
/// comparison faults must still yield something usable.
///
/// # Examples
///
/// ```
/// use newtsort::report::CollectSink;
/// use newtsort::sort_records_lenient;
/// use serde_json::json;
///
/// let sink = CollectSink::new();
/// let records = vec![json!({"id": 1}), json!("not a record")];
/// let result = sort_records_lenient(&records, &[json!("id")], false, &sink);
/// assert!(result.is_empty());
/// assert_eq!(sink.taken().len(), 1);
/// ```
pub fn sort_records_lenient(
    records: &[Value],
    keys: &[Value],
    reverse: bool,
    sink: &dyn DiagnosticSink,
) -> Vec<Value> {
    match sort_records(records, keys, reverse) {
        Ok(sorted) => sorted,
        Err(error) => {
            sink.report(&Diagnostic::from_error(LOCATION, &error));
            if error.is_type_mismatch() {
                Vec::new()
            } else {
                records.to_vec()
            }
        }
    }
}

/// Sorts statically typed records by one or more keys.
///
/// Same ordering semantics as [`sort_records`], for callers holding records
/// in a concrete map representation ([`indexmap::IndexMap`], `BTreeMap`,
/// `HashMap`, or anything implementing [`RecordView`]). Shape validation is
/// subsumed by the type system, so the only error left is a comparison
/// failure.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use newtsort::sort_by_keys;
/// use serde_json::{json, Value};
///
/// let mut first: IndexMap<String, Value> = IndexMap::new();
/// first.insert("age".into(), json!(30));
/// let mut second: IndexMap<String, Value> = IndexMap::new();
/// second.insert("age".into(), json!(25));
///
/// let sorted = sort_by_keys(&[first, second], &["age"], false).unwrap();
/// assert_eq!(sorted[0]["age"], json!(25));
/// ```
pub fn sort_by_keys<R: RecordView + Clone>(
    records: &[R],
    keys: &[&str],
    reverse: bool,
) -> Result<Vec<R>> {
    let order = sorted_order(records, keys, reverse)?;
    Ok(order.into_iter().map(|i| records[i].clone()).collect())
}
