use chrono::NaiveDate;
use regex::Regex;

/// Calendar formats tried before the numeric pattern fallback. Kept to
/// unambiguous renderings; anything else falls through.
const CALENDAR_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Best-effort conversion of a date-like cell into a comparable date.
///
/// Policy, in order: blank input is `None`; then the calendar formats
/// above; then a `D[/-.]M[/-.]Y` pattern where a 2-digit year means
/// `2000 + YY`. The first numeric group is always read as the day and
/// the second as the month, so `"01/06/2024"` is June 1st. `None` is
/// not an error condition - callers treat unparseable dates as
/// sorting last.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in CALENDAR_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    let pattern = Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})").unwrap();
    let caps = pattern.captures(raw)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let year = if caps[3].len() == 2 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_iso_dates() {
        assert_eq!(
            parse_deadline("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_deadline("2024/06/01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_parses_written_month_dates() {
        assert_eq!(
            parse_deadline("June 1, 2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_deadline("Jun 1, 2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_deadline("1 June 2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_numeric_pattern_is_day_first() {
        assert_eq!(
            parse_deadline("01/06/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_deadline("15-3-2025"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(
            parse_deadline("15.03.2025"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
    }

    #[test]
    fn test_two_digit_year_expands_to_2000s() {
        assert_eq!(
            parse_deadline("5/6/24"),
            NaiveDate::from_ymd_opt(2024, 6, 5)
        );
    }

    #[test]
    fn test_invalid_components_are_rejected() {
        assert_eq!(parse_deadline("32/1/2024"), None);
        assert_eq!(parse_deadline("1/13/2024"), None);
    }

    #[test]
    fn test_unparseable_input_is_none() {
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("   "), None);
        assert_eq!(parse_deadline("not a date"), None);
        assert_eq!(parse_deadline("rolling basis"), None);
    }
}
