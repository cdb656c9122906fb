use chrono::NaiveDate;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

use crate::dates::parse_deadline;
use crate::fields::{FieldHints, LogicalField};
use crate::models::{Record, SortMode};

/// Order records in place per the active sort mode. The underlying sort
/// is stable, so ties keep their prior relative order; no secondary key
/// is applied beyond that.
pub fn sort_records(records: &mut [Record], mode: SortMode, hints: &FieldHints) {
    match mode {
        SortMode::Relevance => {
            // Identity pass: ingest order is the relevance order.
        }
        SortMode::DeadlineAsc | SortMode::DeadlineDesc => {
            let descending = mode == SortMode::DeadlineDesc;
            records.sort_by(|a, b| {
                let da = parse_deadline(&a.resolved_text(hints, LogicalField::Deadline));
                let db = parse_deadline(&b.resolved_text(hints, LogicalField::Deadline));
                compare_deadlines(da, db, descending)
            });
        }
        SortMode::TitleAsc | SortMode::TitleDesc => {
            let descending = mode == SortMode::TitleDesc;
            records.sort_by(|a, b| {
                let ka = collation_key(&a.resolved_text(hints, LogicalField::Title));
                let kb = collation_key(&b.resolved_text(hints, LogicalField::Title));
                if descending {
                    kb.cmp(&ka)
                } else {
                    ka.cmp(&kb)
                }
            });
        }
    }
}

/// Unparseable deadlines order last in BOTH directions; only parseable
/// dates respond to the direction flag. Descending does not pull the
/// dateless entries to the front.
fn compare_deadlines(a: Option<NaiveDate>, b: Option<NaiveDate>, descending: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
    }
}

/// Collation key for lexical ordering: NFD-normalized, lowercased,
/// whitespace collapsed to single spaces.
pub fn collation_key(text: &str) -> String {
    let normalized: String = text.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(values).unwrap()
    }

    fn deadlines(rows: &[Record]) -> Vec<String> {
        rows.iter().map(|r| r.text("_deadline")).collect()
    }

    fn titles(rows: &[Record]) -> Vec<String> {
        rows.iter().map(|r| r.text("_title")).collect()
    }

    #[test]
    fn test_relevance_keeps_ingest_order() {
        let mut rows = records(json!([
            { "_title": "Zebra" },
            { "_title": "Aardvark" }
        ]));
        sort_records(&mut rows, SortMode::Relevance, &FieldHints::default());
        assert_eq!(titles(&rows), vec!["Zebra", "Aardvark"]);
    }

    #[test]
    fn test_deadline_asc_puts_unparseable_last() {
        let mut rows = records(json!([
            { "_deadline": "rolling" },
            { "_deadline": "2024-01-01" },
            { "_deadline": "2023-01-01" }
        ]));
        sort_records(&mut rows, SortMode::DeadlineAsc, &FieldHints::default());
        assert_eq!(
            deadlines(&rows),
            vec!["2023-01-01", "2024-01-01", "rolling"]
        );
    }

    #[test]
    fn test_deadline_desc_also_puts_unparseable_last() {
        let mut rows = records(json!([
            { "_deadline": "rolling" },
            { "_deadline": "2024-01-01" },
            { "_deadline": "2023-01-01" }
        ]));
        sort_records(&mut rows, SortMode::DeadlineDesc, &FieldHints::default());
        // Not the intuitive null-first ordering: dateless entries stay
        // at the end in both directions.
        assert_eq!(
            deadlines(&rows),
            vec!["2024-01-01", "2023-01-01", "rolling"]
        );
    }

    #[test]
    fn test_deadline_sort_is_stable_for_ties() {
        let mut rows = records(json!([
            { "_title": "first", "_deadline": "2024-05-01" },
            { "_title": "second", "_deadline": "01/05/2024" },
            { "_title": "third" }
        ]));
        sort_records(&mut rows, SortMode::DeadlineAsc, &FieldHints::default());
        // Both parse to the same date, so ingest order is preserved.
        assert_eq!(titles(&rows), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_title_sort_both_directions() {
        let mut rows = records(json!([
            { "_title": "médiathèque intern" },
            { "_title": "Archive Assistant" },
            { "_title": "zoo outreach" }
        ]));

        sort_records(&mut rows, SortMode::TitleAsc, &FieldHints::default());
        assert_eq!(
            titles(&rows),
            vec!["Archive Assistant", "médiathèque intern", "zoo outreach"]
        );

        sort_records(&mut rows, SortMode::TitleDesc, &FieldHints::default());
        assert_eq!(
            titles(&rows),
            vec!["zoo outreach", "médiathèque intern", "Archive Assistant"]
        );
    }

    #[test]
    fn test_title_sort_treats_missing_title_as_empty() {
        let mut rows = records(json!([
            { "_title": "Beta" },
            { "_org": "No Title Org" }
        ]));
        sort_records(&mut rows, SortMode::TitleAsc, &FieldHints::default());
        assert_eq!(titles(&rows), vec!["", "Beta"]);
    }

    #[test]
    fn test_collation_key_normalizes() {
        assert_eq!(collation_key("  Foo   Bar "), "foo bar");
        assert_eq!(collation_key("Café"), collation_key("Cafe\u{0301}"));
    }
}
