use regex::Regex;
use std::collections::BTreeSet;

use crate::fields::{FieldHints, LogicalField};
use crate::models::Record;
use crate::sorting::collation_key;

/// Collect the distinct facet values a logical field takes across the
/// dataset. Multi-valued cells are split on commas, slashes, and the
/// word " and " (case-insensitive); tokens are trimmed and deduplicated
/// exact-string. Output is sorted by collation key, ascending, so facet
/// choices render in a stable human order.
///
/// Records missing the field contribute nothing, as do cells containing
/// only delimiters.
pub fn facet_values(records: &[Record], hints: &FieldHints, field: LogicalField) -> Vec<String> {
    let splitter = Regex::new(r"(?i)[/,]| and ").unwrap();
    let mut seen = BTreeSet::new();

    for record in records {
        let cell = record.resolved_text(hints, field);
        if cell.is_empty() {
            continue;
        }

        for token in splitter.split(&cell) {
            let token = token.trim();
            if !token.is_empty() {
                seen.insert(token.to_string());
            }
        }
    }

    let mut values: Vec<String> = seen.into_iter().collect();
    values.sort_by(|a, b| collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b)));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(values).unwrap()
    }

    #[test]
    fn test_splits_compound_cells() {
        let rows = records(json!([
            { "_area": "Agriculture / Food Security, Health" }
        ]));

        assert_eq!(
            facet_values(&rows, &FieldHints::default(), LogicalField::Area),
            vec!["Agriculture", "Food Security", "Health"]
        );
    }

    #[test]
    fn test_splits_on_and_case_insensitively() {
        let rows = records(json!([
            { "_industry": "Energy AND Utilities" },
            { "_industry": "Media and Publishing" }
        ]));

        assert_eq!(
            facet_values(&rows, &FieldHints::default(), LogicalField::Industry),
            vec!["Energy", "Media", "Publishing", "Utilities"]
        );
    }

    #[test]
    fn test_dedup_is_exact_string() {
        let rows = records(json!([
            { "_area": "Health" },
            { "_area": "health, Health" }
        ]));

        assert_eq!(
            facet_values(&rows, &FieldHints::default(), LogicalField::Area),
            vec!["Health", "health"]
        );
    }

    #[test]
    fn test_missing_and_delimiter_only_cells_contribute_nothing() {
        let rows = records(json!([
            { "_org": "Someone" },
            { "_area": " , / " },
            { "_area": "Education" }
        ]));

        assert_eq!(
            facet_values(&rows, &FieldHints::default(), LogicalField::Area),
            vec!["Education"]
        );
    }

    #[test]
    fn test_reads_through_hints_with_default_fallback() {
        let hints = FieldHints {
            area: Some("Focus".to_string()),
            ..FieldHints::default()
        };
        let rows = records(json!([
            { "Focus": "Climate" },
            { "Focus": "", "_area": "Oceans" }
        ]));

        assert_eq!(
            facet_values(&rows, &hints, LogicalField::Area),
            vec!["Climate", "Oceans"]
        );
    }
}
