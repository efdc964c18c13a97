// Sorting operations
//
// This module provides the two core operations: the deduplicating typed sort
// over text/integer scalars, and the stable multi-key record sort with
// missing-last semantics.

pub mod keyed;
pub mod scalar;

pub use keyed::{sort_by_keys, sort_records, sort_records_lenient};
pub use scalar::{sort_unique_scalars, sort_unique_scalars_lenient, Scalar};
