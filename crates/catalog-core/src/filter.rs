//! The filter engine: pure subsequence selection over the record store.
//!
//! Filtering never re-sorts and never duplicates; the output is the input
//! sequence minus the records that fail a predicate. Both predicates must
//! pass: the orphan selector and category membership. The category test is
//! plain set membership, so an empty category selection yields the empty
//! sequence — "no categories selected" is not shorthand for "all
//! categories". Callers that want the show-everything default pre-populate
//! the selection (see `FilterState::with_all_categories`).

use catalog_model::{FilterState, Record, RecordId};

/// Whether a single record passes the filter.
pub fn matches(record: &Record, filter: &FilterState) -> bool {
    filter.orphan.matches(record.orphan) && filter.categories.contains(&record.category)
}

/// The ordered subsequence of `records` passing `filter`.
///
/// Pure function of its inputs: idempotent and order-preserving. Re-invoked
/// on every filter-state change.
pub fn apply<'a>(records: &'a [Record], filter: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, filter)).collect()
}

/// Whether `id` is in the filtered subsequence, without materializing it.
pub fn contains_id(records: &[Record], filter: &FilterState, id: RecordId) -> bool {
    records.iter().any(|r| r.id == id && matches(r, filter))
}

/// Sorted unique category values present in the catalog.
///
/// Used by the UI to build the multi-select options and its default-all
/// pre-population.
pub fn category_options(records: &[Record]) -> Vec<String> {
    let mut options: Vec<String> = records
        .iter()
        .map(|r| r.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    options.sort();
    options.dedup();
    options
}
