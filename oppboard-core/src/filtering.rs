use crate::fields::{FieldHints, LogicalField};
use crate::models::{FilterState, Record, ALL};

/// Check whether a record passes the active filters. Four independent
/// checks, all of which must hold: free-text query, then the area,
/// industry, and paid facets.
pub fn matches(record: &Record, filters: &FilterState, hints: &FieldHints) -> bool {
    query_matches(record, &filters.query)
        && facet_matches(record, hints, LogicalField::Area, &filters.area)
        && facet_matches(record, hints, LogicalField::Industry, &filters.industry)
        && facet_matches(record, hints, LogicalField::Paid, &filters.paid)
}

/// Apply the filters to a record collection, returning the survivors in
/// their original order.
pub fn apply_filters(records: &[Record], filters: &FilterState, hints: &FieldHints) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, filters, hints))
        .cloned()
        .collect()
}

fn query_matches(record: &Record, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    record.search_blob().to_lowercase().contains(&query)
}

/// Substring containment rather than equality: facet cells may be
/// compound ("Agriculture / Food Security"), and selecting one of their
/// parts must still match.
fn facet_matches(record: &Record, hints: &FieldHints, field: LogicalField, selected: &str) -> bool {
    if selected == ALL {
        return true;
    }
    record
        .resolved_text(hints, field)
        .to_lowercase()
        .contains(&selected.to_lowercase())
}
