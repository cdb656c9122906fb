use std::path::Path;

use crate::facets;
use crate::fields::{FieldHints, LogicalField};
use crate::filtering;
use crate::io::{self, CatalogError};
use crate::models::{Dataset, FilterState, Record, SortMode};
use crate::sorting;

/// The catalog facade: owns the immutable record collection plus the
/// current filter and sort state, and is the only entry point the
/// surrounding UI layer talks to. The filtered view is a pure function
/// of (records, hints, filters, sort mode) - recomputed from scratch on
/// every [`Catalog::apply_filters`] call, with no ordering state carried
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
    hints: FieldHints,
    filters: FilterState,
    sort: SortMode,
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Self {
        log::debug!("catalog initialized with {} records", dataset.items.len());
        Self {
            records: dataset.items,
            hints: dataset.meta.detected,
            filters: FilterState::default(),
            sort: SortMode::default(),
        }
    }

    /// One-shot load-then-ready construction from a dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Ok(Self::new(io::load_dataset(path)?))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn hints(&self) -> &FieldHints {
        &self.hints
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_area(&mut self, area: impl Into<String>) {
        self.filters.area = area.into();
    }

    pub fn set_industry(&mut self, industry: impl Into<String>) {
        self.filters.industry = industry.into();
    }

    pub fn set_paid(&mut self, paid: impl Into<String>) {
        self.filters.paid = paid.into();
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = mode;
    }

    /// Distinct normalized values for a facet field, for populating
    /// selection controls.
    pub fn facet_values(&self, field: LogicalField) -> Vec<String> {
        facets::facet_values(&self.records, &self.hints, field)
    }

    /// The ordered, filtered view: every record is run through the
    /// predicate, then the survivors are ordered per the active sort
    /// mode. Returns a fresh sequence each call; empty is a valid,
    /// expected outcome.
    pub fn apply_filters(&self) -> Vec<Record> {
        let mut matched = filtering::apply_filters(&self.records, &self.filters, &self.hints);
        sorting::sort_records(&mut matched, self.sort, &self.hints);
        matched
    }
}
