//! Record abstraction for the keyed sort.
//!
//! A record is anything that can answer "what value do you hold for this
//! field name?". The sort core never needs more than that, so it is expressed
//! as the [`RecordView`] trait rather than a concrete map type. Callers can
//! sort `serde_json` objects, `indexmap::IndexMap`s, `BTreeMap`s or
//! `HashMap`s without converting between representations first.
//!
//! # Examples
//!
//! ```
//! use newtsort::record::RecordView;
//! use serde_json::{json, Value};
//!
//! let record = json!({"name": "Alice", "age": 30});
//! let map = record.as_object().unwrap();
//! assert_eq!(map.field("name"), Some(&json!("Alice")));
//! assert_eq!(map.field("missing"), None);
//! assert!(map.has_field("age"));
//! ```

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::Value;

/// Read-only, by-name field access over one record.
///
/// `field` returns `None` for absent fields; an explicitly present `null`
/// comes back as `Some(&Value::Null)`. The keyed sort treats both the same
/// way (ordered after present values), but the distinction is observable
/// through [`RecordView::has_field`].
pub trait RecordView {
    /// Returns the value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns true if the record has an entry under `name`, even a null one.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl RecordView for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl RecordView for IndexMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl RecordView for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl RecordView for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<R: RecordView + ?Sized> RecordView for &R {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_access_across_representations() {
        let mut index_map: IndexMap<String, Value> = IndexMap::new();
        index_map.insert("name".to_string(), json!("Alice"));
        index_map.insert("age".to_string(), Value::Null);

        let mut btree: BTreeMap<String, Value> = BTreeMap::new();
        btree.insert("name".to_string(), json!("Alice"));
        btree.insert("age".to_string(), Value::Null);

        let mut hash: HashMap<String, Value> = HashMap::new();
        hash.insert("name".to_string(), json!("Alice"));
        hash.insert("age".to_string(), Value::Null);

        fn check(record: &dyn RecordView) {
            assert_eq!(record.field("name"), Some(&json!("Alice")));
            // Explicit null is present but holds Value::Null
            assert_eq!(record.field("age"), Some(&Value::Null));
            assert!(record.has_field("age"));
            assert_eq!(record.field("missing"), None);
            assert!(!record.has_field("missing"));
        }

        check(&index_map);
        check(&btree);
        check(&hash);
    }
}
