//! Case-insensitive substring filter over each kind's search fields.
//!
//! # Invariants
//! - The empty term keeps every record.
//! - Any other term is matched literally; whitespace is not trimmed.
//! - The haystack is the kind's search fields joined by single spaces,
//!   so a term may span adjacent fields. Absent optional fields are skipped.
//! - Output preserves input order, so filtering twice equals filtering once.

use crate::model::record::{Record, RecordData};

/// Returns the records of `records` matching `term`, in input order.
pub fn filter_records<T: RecordData>(records: &[Record<T>], term: &str) -> Vec<Record<T>> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| fields_contain(&record.data, &needle))
        .cloned()
        .collect()
}

/// True when `term` is empty or the record's search haystack contains it.
pub fn matches_term<T: RecordData>(record: &Record<T>, term: &str) -> bool {
    term.is_empty() || fields_contain(&record.data, &term.to_lowercase())
}

fn fields_contain<T: RecordData>(data: &T, lowered_term: &str) -> bool {
    data.search_fields()
        .join(" ")
        .to_lowercase()
        .contains(lowered_term)
}
