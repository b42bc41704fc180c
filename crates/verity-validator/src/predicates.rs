//! Predicate library: pure, side-effect-free checks.
//!
//! Everything here is a plain function over `&str` or a value variant;
//! the executor decides what a failed predicate means for the report.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use uuid::Uuid;

use crate::rules::{DateFormat, TimeFormat, UuidVersion};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| unreachable!("email pattern is constant: {e}"))
});

/// Well-formed email address.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Well-formed UUID, optionally pinned to one version.
#[must_use]
pub fn is_uuid(input: &str, version: Option<UuidVersion>) -> bool {
    match Uuid::parse_str(input) {
        Ok(parsed) => version.is_none_or(|v| parsed.get_version_num() == v.number()),
        Err(_) => false,
    }
}

/// Count of whitespace-separated words.
#[must_use]
pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

/// Parses text as a calendar date in the given format.
///
/// ISO-8601 accepts a date-only form, a `T`-separated datetime, and a
/// fractional-seconds datetime; the regional formats are date-only and
/// resolve to midnight.
#[must_use]
pub fn parse_date(input: &str, format: DateFormat) -> Option<NaiveDateTime> {
    match format.chrono_pattern() {
        Some(pattern) => NaiveDate::parse_from_str(input, pattern)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0)),
        None => parse_iso8601(input),
    }
}

fn parse_iso8601(input: &str) -> Option<NaiveDateTime> {
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(dt);
        }
    }
    // RFC 3339 carries an offset; normalize to the naive UTC instant.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses text as a clock time in the given format. The format is exact:
/// seconds in a `HH:MM` input are a mismatch, not extra precision.
#[must_use]
pub fn parse_time(input: &str, format: TimeFormat) -> Option<NaiveTime> {
    let parsed = NaiveTime::parse_from_str(input, format.chrono_pattern()).ok()?;
    // chrono tolerates trailing precision for some patterns; re-render to
    // reject inputs that carry more fields than the format names.
    let canonical = parsed.format(format.chrono_pattern()).to_string();
    (canonical == input).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_shapes() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.domain.org"));
        assert!(!is_email("invalid-email"));
        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@domain"));
    }

    #[test]
    fn uuid_version_pinning() {
        let v4 = "a9886191-2f4a-48d4-ae84-b4a19cda4ba1";
        assert!(is_uuid(v4, None));
        assert!(is_uuid(v4, Some(UuidVersion::V4)));
        assert!(!is_uuid(v4, Some(UuidVersion::V1)));
        assert!(!is_uuid("not-a-uuid", None));
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(word_count("  "), 0);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn regional_dates_resolve_to_midnight() {
        let parsed = parse_date("09/03/2024", DateFormat::DdMmYyyy).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-09 00:00:00");
        assert!(parse_date("2024-03-09", DateFormat::DdMmYyyy).is_none());
    }

    #[test]
    fn iso_accepts_date_and_datetime_forms() {
        assert!(parse_date("2024-03-09", DateFormat::Iso8601).is_some());
        assert!(parse_date("2024-03-09T10:30:00", DateFormat::Iso8601).is_some());
        assert!(parse_date("2024-03-09T10:30:00.250", DateFormat::Iso8601).is_some());
        assert!(parse_date("2024-03-09T10:30:00Z", DateFormat::Iso8601).is_some());
        assert!(parse_date("09/03/2024", DateFormat::Iso8601).is_none());
    }

    #[test]
    fn month_day_permutations_differ() {
        // 09/03 is March 9th in DD/MM and September 3rd in MM/DD.
        let dd_mm = parse_date("09/03/2024", DateFormat::DdMmYyyy).unwrap();
        let mm_dd = parse_date("09/03/2024", DateFormat::MmDdYyyy).unwrap();
        assert_ne!(dd_mm, mm_dd);
    }

    #[test]
    fn time_formats_are_exact() {
        assert!(parse_time("10:30", TimeFormat::HhMm).is_some());
        assert!(parse_time("10:30:15", TimeFormat::HhMm).is_none());
        assert!(parse_time("10:30:15", TimeFormat::HhMmSs).is_some());
        assert!(parse_time("10:30:15.250", TimeFormat::HhMmSsMs).is_some());
        assert!(parse_time("25:00", TimeFormat::HhMm).is_none());
    }
}
