//! Date helper functions

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Parse an ISO 8601 calendar date (strict `YYYY-MM-DD`, no time part)
///
/// # Examples
/// ```ignore
/// parse_date("2025-07-24") // -> Some(2025-07-24)
/// parse_date("yesterday")  // -> None
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Newest-first ordering over optional dates
///
/// Dated entries sort before undated ones; equal (or equally missing) dates
/// compare as equal, so a stable sort keeps the declared order for ties.
pub fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(
            parse_date("2025-08-01"),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
        assert_eq!(parse_date(" 2025-01-16 "), NaiveDate::from_ymd_opt(2025, 1, 16));
        assert!(parse_date("2025-13-40").is_none());
        assert!(parse_date("2025-01-16 10:30:00").is_none());
        assert!(parse_date("16/01/2025").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_newest_first_ordering() {
        let jan = parse_date("2025-01-15");
        let aug = parse_date("2025-08-01");
        assert_eq!(newest_first(aug, jan), Ordering::Less);
        assert_eq!(newest_first(jan, aug), Ordering::Greater);
        assert_eq!(newest_first(jan, jan), Ordering::Equal);
        assert_eq!(newest_first(jan, None), Ordering::Less);
        assert_eq!(newest_first(None, jan), Ordering::Greater);
        assert_eq!(newest_first(None, None), Ordering::Equal);
    }
}
