//! Local-date helpers for streak arithmetic.
//!
//! Every date the engine touches is a local calendar date rendered as
//! "YYYY-MM-DD". Rendering always goes through local wall-clock
//! components, never through a UTC conversion, so a user journaling
//! near midnight is never counted on the wrong day. Day deltas are
//! computed on `NaiveDate` values, which keeps them exact integers
//! across daylight-saving transitions.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::DateParseError;

/// Length of a rendered date-only string ("YYYY-MM-DD").
pub const DATE_ONLY_LEN: usize = 10;

/// Render a local moment as a date-only string.
pub fn to_local_date_string(moment: &DateTime<Local>) -> String {
    moment.format("%Y-%m-%d").to_string()
}

/// Parse a date-only string into a calendar date.
pub fn parse_date_only(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateParseError::InvalidDateOnly {
        input: input.to_string(),
    })
}

/// Normalize any supported date input to a date-only string.
///
/// A 10-character date-only string is validated and returned unchanged,
/// which makes the function idempotent. Anything else must parse as a
/// timestamp -- RFC 3339 with an offset, or a naive local
/// `YYYY-MM-DDTHH:MM:SS[.fff]` -- and is re-rendered as the local date.
pub fn normalize_to_date_only(input: &str) -> Result<String, DateParseError> {
    if input.len() == DATE_ONLY_LEN {
        return parse_date_only(input).map(|_| input.to_string());
    }

    if let Ok(moment) = DateTime::parse_from_rfc3339(input) {
        return Ok(to_local_date_string(&moment.with_timezone(&Local)));
    }

    // Naive timestamps carry no offset; their wall-clock date is the local date.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.date().format("%Y-%m-%d").to_string());
        }
    }

    Err(DateParseError::UnrecognizedTimestamp {
        input: input.to_string(),
    })
}

/// Integer day delta between two date inputs (`a` minus `b`).
///
/// Both inputs are normalized first, so either may be a timestamp.
/// Negative when `a` is earlier than `b`.
pub fn days_between(a: &str, b: &str) -> Result<i64, DateParseError> {
    let a = parse_date_only(&normalize_to_date_only(a)?)?;
    let b = parse_date_only(&normalize_to_date_only(b)?)?;
    Ok(a.signed_duration_since(b).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_local_date_string_format() {
        let moment = Local.with_ymd_and_hms(2026, 2, 10, 23, 59, 59).unwrap();
        assert_eq!(to_local_date_string(&moment), "2026-02-10");
    }

    #[test]
    fn test_date_only_passes_through_unchanged() {
        assert_eq!(normalize_to_date_only("2026-02-10").unwrap(), "2026-02-10");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_to_date_only("2026-02-10T14:30:00").unwrap();
        let twice = normalize_to_date_only(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_naive_timestamp_keeps_wall_clock_date() {
        assert_eq!(
            normalize_to_date_only("2026-02-10T00:15:00").unwrap(),
            "2026-02-10"
        );
        assert_eq!(
            normalize_to_date_only("2026-02-10 23:45:00").unwrap(),
            "2026-02-10"
        );
        assert_eq!(
            normalize_to_date_only("2026-02-10T14:30:00.250").unwrap(),
            "2026-02-10"
        );
    }

    #[test]
    fn test_rfc3339_normalizes_to_a_date_only_string() {
        // The resulting date depends on the host timezone; assert shape,
        // idempotency, and that it parses as a real date.
        let normalized = normalize_to_date_only("2026-02-10T12:00:00+00:00").unwrap();
        assert_eq!(normalized.len(), DATE_ONLY_LEN);
        assert!(parse_date_only(&normalized).is_ok());
        assert_eq!(normalize_to_date_only(&normalized).unwrap(), normalized);
    }

    #[test]
    fn test_invalid_date_only_is_rejected() {
        let err = normalize_to_date_only("2026-13-40").unwrap_err();
        assert!(matches!(err, DateParseError::InvalidDateOnly { .. }));
    }

    #[test]
    fn test_garbage_input_is_rejected() {
        let err = normalize_to_date_only("not a date at all").unwrap_err();
        assert!(matches!(err, DateParseError::UnrecognizedTimestamp { .. }));
    }

    #[test]
    fn test_days_between_basic_deltas() {
        assert_eq!(days_between("2026-02-11", "2026-02-10").unwrap(), 1);
        assert_eq!(days_between("2026-02-10", "2026-02-10").unwrap(), 0);
        assert_eq!(days_between("2026-02-20", "2026-02-10").unwrap(), 10);
        assert_eq!(days_between("2026-02-09", "2026-02-10").unwrap(), -1);
    }

    #[test]
    fn test_days_between_is_exact_across_spring_forward() {
        // 2026-03-08 is a US DST transition day; the delta must stay integral.
        assert_eq!(days_between("2026-03-09", "2026-03-08").unwrap(), 1);
        assert_eq!(days_between("2026-03-15", "2026-03-07").unwrap(), 8);
    }

    #[test]
    fn test_days_between_accepts_timestamps() {
        assert_eq!(
            days_between("2026-02-11T08:00:00", "2026-02-10").unwrap(),
            1
        );
    }

    #[test]
    fn test_days_between_propagates_parse_errors() {
        assert!(days_between("garbage", "2026-02-10").is_err());
        assert!(days_between("2026-02-10", "garbage").is_err());
    }
}
