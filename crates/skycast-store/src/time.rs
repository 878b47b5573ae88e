//! ISO-8601 datetime parsing shared by the dataset loader and the HTTP layer.

use chrono::{DateTime, NaiveDateTime, ParseResult, Utc};

/// Parse an ISO-8601 datetime.
///
/// Accepts RFC 3339 timestamps with an offset (converted to UTC) as well as
/// bare `YYYY-MM-DDTHH:MM:SS[.fff]` values, which are taken as UTC.
pub fn parse_datetime(s: &str) -> ParseResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse_datetime("2024-02-14T12:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_offset_converts_to_utc() {
        let dt = parse_datetime("2024-02-14T12:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 14, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_assumed_utc() {
        let dt = parse_datetime("2024-02-14T12:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_datetime("2024-02-14T12:00:00.500").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_datetime("invalid-date").is_err());
        assert!(parse_datetime("2024-02-14").is_err());
        assert!(parse_datetime("").is_err());
    }
}
