use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::fields::{FieldHints, LogicalField};

/// Facet sentinel meaning "no constraint on this dimension".
pub const ALL: &str = "All";

/// One listing row, keyed however the source spreadsheet was keyed.
/// Keys are not guaranteed consistent across records. The ordered map
/// fixes the iteration order used by [`Record::search_blob`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The trimmed string form of the cell at `key`. Numbers and booleans
    /// are rendered; null, arrays, objects, and absent cells are empty.
    pub fn text(&self, key: &str) -> String {
        self.fields.get(key).map(coerce_scalar).unwrap_or_default()
    }

    /// Read a logical field through the hint-resolved key, falling back
    /// to the canonical default key when the resolved cell is empty. The
    /// read-time fallback mirrors the resolver chain, so a dataset that
    /// carries both a detected column and the default column still
    /// surfaces a value when the detected one is blank.
    pub fn resolved_text(&self, hints: &FieldHints, field: LogicalField) -> String {
        let primary = self.text(hints.resolve(field));
        if !primary.is_empty() {
            return primary;
        }
        self.text(field.default_key())
    }

    /// Flatten the record into one searchable string: every non-empty
    /// scalar value, in ascending key order, joined by single spaces.
    /// The order is part of the contract - free-text matching is defined
    /// against exactly this serialization.
    pub fn search_blob(&self) -> String {
        self.fields
            .values()
            .map(coerce_scalar)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn coerce_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// The dataset document: `meta` envelope plus the record collection.
/// Both halves are individually defaultable so partial documents load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub meta: DatasetMeta,
    #[serde(default)]
    pub items: Vec<Record>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetMeta {
    /// Detected column mapping; malformed blocks degrade to no hints.
    #[serde(default, deserialize_with = "crate::fields::lenient_hints")]
    pub detected: FieldHints,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Active filter settings. Facet slots hold either the [`ALL`] sentinel
/// or a concrete facet value; `query` is free text. Always fully defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub area: String,
    pub industry: String,
    pub paid: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            area: ALL.to_string(),
            industry: ALL.to_string(),
            paid: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// True when no constraint is active, i.e. filtering is a no-op.
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.area == ALL
            && self.industry == ALL
            && self.paid == ALL
    }
}

/// Result ordering. Exactly one mode is active at a time; `Relevance`
/// keeps ingest order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Relevance,
    DeadlineAsc,
    DeadlineDesc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::DeadlineAsc => "deadline-asc",
            SortMode::DeadlineDesc => "deadline-desc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sort mode '{0}', expected one of: relevance, deadline-asc, deadline-desc, title-asc, title-desc")]
pub struct ParseSortModeError(String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "deadline-asc" => Ok(SortMode::DeadlineAsc),
            "deadline-desc" => Ok(SortMode::DeadlineDesc),
            "title-asc" => Ok(SortMode::TitleAsc),
            "title-desc" => Ok(SortMode::TitleDesc),
            other => Err(ParseSortModeError(other.to_string())),
        }
    }
}
